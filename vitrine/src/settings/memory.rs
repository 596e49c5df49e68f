//! Preferences kept for the lifetime of the process.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use super::{SettingsBackend, SettingsError};

/// In-memory preference storage.
///
/// Clones share one map, so the host keeps a handle to inspect what the page
/// saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    stored: Arc<DashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved preferences.
    pub fn len(&self) -> usize {
        self.stored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stored.is_empty()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        Ok(self.stored.get(key).map(|bytes| bytes.value().clone()))
    }

    async fn write(&self, key: &str, bytes: Vec<u8>) -> Result<(), SettingsError> {
        self.stored.insert(key.to_string(), bytes);
        Ok(())
    }
}
