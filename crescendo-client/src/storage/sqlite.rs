/// SQLite-backed storage adapter
///
/// Persists every container's JSON slice in a single `kv_store` table inside
/// an embedded SQLite database. The pool is created lazily: no connection is
/// opened and no schema is touched until the first get/set/remove, matching
/// the open-on-first-use behavior the dashboard expects from its local store.
///
/// Concurrent writers across processes are not coordinated; the last write
/// under a key wins.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tokio::sync::OnceCell;
use tracing::debug;

use super::{StorageAdapter, StorageResult};

/// Embedded SQLite key-value storage
pub struct SqliteStorage {
    /// Lazily-connected pool
    pool: SqlitePool,

    /// One-shot schema initialization guard
    schema: OnceCell<()>,
}

impl SqliteStorage {
    /// Opens (lazily) a storage database at `path`
    ///
    /// The file and schema are created on first use, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if the connect options cannot be built from `path`.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(options);

        Ok(SqliteStorage {
            pool,
            schema: OnceCell::new(),
        })
    }

    /// Ensures the `kv_store` table exists, exactly once per adapter
    async fn ensure_schema(&self) -> StorageResult<()> {
        self.schema
            .get_or_try_init(|| async {
                debug!("initializing kv_store schema");
                sqlx::query(
                    "CREATE TABLE IF NOT EXISTS kv_store (
                        key TEXT PRIMARY KEY,
                        value TEXT NOT NULL
                    )",
                )
                .execute(&self.pool)
                .await?;
                Ok::<_, super::StorageError>(())
            })
            .await
            .copied()
    }
}

#[async_trait]
impl StorageAdapter for SqliteStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.ensure_schema().await?;

        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get::<String, _>(0)))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_schema().await?;

        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.ensure_schema().await?;

        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStorage::open(dir.path().join("store.db")).unwrap();

        assert_eq!(storage.get("missing").await.unwrap(), None);

        storage.set("crescendo.theme", r#"{"theme":"dark"}"#).await.unwrap();
        assert_eq!(
            storage.get("crescendo.theme").await.unwrap().as_deref(),
            Some(r#"{"theme":"dark"}"#)
        );

        storage.remove("crescendo.theme").await.unwrap();
        assert_eq!(storage.get("crescendo.theme").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStorage::open(dir.path().join("store.db")).unwrap();

        storage.set("key", "first").await.unwrap();
        storage.set("key", "second").await.unwrap();

        assert_eq!(storage.get("key").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStorage::open(dir.path().join("store.db")).unwrap();

        storage.remove("never-written").await.unwrap();
    }

    #[tokio::test]
    async fn test_values_survive_adapter_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.set("key", "persisted").await.unwrap();
        }

        let reopened = SqliteStorage::open(&path).unwrap();
        assert_eq!(reopened.get("key").await.unwrap().as_deref(), Some("persisted"));
    }
}
