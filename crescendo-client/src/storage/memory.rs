/// In-memory storage adapter for tests
///
/// HashMap-backed implementation of [`StorageAdapter`]. Besides being the
/// default test double, it carries a failure toggle so tests can exercise the
/// stores' log-and-fall-back path without a broken database on disk.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{StorageAdapter, StorageError, StorageResult};

/// HashMap-backed storage adapter
#[derive(Default)]
pub struct MemoryStorage {
    /// Stored entries
    entries: Mutex<HashMap<String, String>>,

    /// When set, every operation fails with `StorageError::Unavailable`
    fail: AtomicBool,
}

impl MemoryStorage {
    /// Creates an empty in-memory adapter
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Toggles the failure mode
    ///
    /// While enabled, every get/set/remove returns
    /// [`StorageError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the adapter holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("failure toggle enabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check_available()?;
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_available()?;
        self.entries.lock().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.check_available()?;
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let storage = MemoryStorage::new();

        storage.set("key", "value").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("value"));

        storage.remove("key").await.unwrap();
        assert_eq!(storage.get("key").await.unwrap(), None);
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_failure_toggle() {
        let storage = MemoryStorage::new();
        storage.set("key", "value").await.unwrap();

        storage.set_failing(true);
        assert!(storage.get("key").await.is_err());
        assert!(storage.set("key", "other").await.is_err());
        assert!(storage.remove("key").await.is_err());

        // Entries survive a failure window.
        storage.set_failing(false);
        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("value"));
    }
}
