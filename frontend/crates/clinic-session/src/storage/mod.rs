pub mod file_store;
pub mod memory_store;

use crate::StoreResult;

/// Durable string key-value storage, the desktop stand-in for browser
/// local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
