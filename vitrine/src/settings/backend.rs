//! Where visitor preferences live between visits.

use async_trait::async_trait;

use super::SettingsError;

/// Byte storage for preferences, keyed by storage key.
///
/// A browser would back this with local storage; the page only ever reads a
/// preference once at startup and writes it when the visitor changes it.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Bytes stored under `key`, or `None` if the visitor never saved one.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Replace whatever is stored under `key`.
    async fn write(&self, key: &str, bytes: Vec<u8>) -> Result<(), SettingsError>;
}
