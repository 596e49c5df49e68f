//! Persisted visitor preferences (the chosen theme).

mod backend;
mod memory;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("cannot encode preference '{key}': {source}")]
    Encode { key: String, source: bincode::Error },
    #[error("stored preference '{key}' is unreadable: {source}")]
    Decode { key: String, source: bincode::Error },
}

/// Typed access to a [`SettingsBackend`], encoded with bincode.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl std::fmt::Debug for SettingsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsProvider").finish_non_exhaustive()
    }
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Preferences that last until the process exits.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// The saved preference under `key`, if any.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        let Some(bytes) = self.backend.read(key).await? else {
            return Ok(None);
        };
        bincode::deserialize(&bytes)
            .map(Some)
            .map_err(|source| SettingsError::Decode {
                key: key.to_string(),
                source,
            })
    }

    pub async fn save<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(|source| SettingsError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, bytes).await
    }
}
