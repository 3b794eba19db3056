/// Persisted key-value store adapter
///
/// This module defines the contract every storage backend must implement.
/// Each state container is assigned one unique key and serializes its entire
/// persisted slice to a single JSON string under that key; the adapter only
/// ever sees opaque strings.
///
/// # Adapter Contract
///
/// All adapters must:
/// 1. Implement the `StorageAdapter` trait (async)
/// 2. Treat keys as flat, unique strings (no namespacing semantics)
/// 3. Report failures honestly via `StorageError` — the log-and-fall-back
///    policy lives in the stores, not here
///
/// # Implementations
///
/// - [`SqliteStorage`]: embedded SQLite table, connected lazily on first use
/// - [`MemoryStorage`]: HashMap-backed adapter for tests, with a failure
///   toggle to exercise the fallback path
///
/// # Example
///
/// ```no_run
/// use crescendo_client::storage::{MemoryStorage, StorageAdapter};
///
/// # async fn example() -> Result<(), crescendo_client::storage::StorageError> {
/// let storage = MemoryStorage::new();
/// storage.set("crescendo.theme", r#"{"theme":"dark"}"#).await?;
/// assert!(storage.get("crescendo.theme").await?.is_some());
/// storage.remove("crescendo.theme").await?;
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Adapter is unavailable (used by the test adapter's failure toggle)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage result type alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Asynchronous string-keyed storage contract
///
/// Backing store for every persisted state container.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Reads the value stored under `key`, if any
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes the value stored under `key`; missing keys are not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
