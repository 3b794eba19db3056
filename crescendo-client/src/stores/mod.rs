/// State containers for the dashboard
///
/// Each store owns one disjoint slice of client state behind a
/// `tokio::sync::RwLock`, mutates by snapshot replacement, and never holds
/// the lock across an await. Persisted stores take an injected
/// [`StorageAdapter`](crate::storage::StorageAdapter) and run the explicit
/// pipeline below after every mutation; they rehydrate via `load()` before
/// first read.
///
/// # Persistence pipeline
///
/// ```text
/// mutate snapshot (lock held)
///   └─> clone persisted projection (lock released)
///         └─> serialize to JSON
///               └─> adapter.set(store key, json)
/// ```
///
/// Storage failures on either end are logged and swallowed: a corrupted or
/// unavailable store resets to defaults instead of blocking the UI. That
/// trade-off is intentional — every persisted slice is a cache of record,
/// recoverable from the collaborator or from the user.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::storage::StorageAdapter;

mod artists;
mod dashboard;
mod locations;
mod notifications;
mod session;
mod ui;

pub use artists::{ArtistRegistry, ArtistStore};
pub use dashboard::DashboardStore;
pub use locations::{LocationProvider, LocationStore};
pub use notifications::NotificationStore;
pub use session::{SessionSnapshot, SessionStore};
pub use ui::{SidebarStore, Theme, ThemeStore};

/// Storage key for the session store
pub const SESSION_KEY: &str = "crescendo.session";

/// Storage key for the artist registry
pub const ARTISTS_KEY: &str = "crescendo.artists";

/// Storage key for the theme store
pub const THEME_KEY: &str = "crescendo.theme";

/// Writes a store's persisted projection through the adapter
///
/// Serialization or storage failures are logged and swallowed; the in-memory
/// snapshot stays authoritative for the rest of the session.
pub(crate) async fn persist<T: Serialize>(storage: &dyn StorageAdapter, key: &str, snapshot: &T) {
    let json = match serde_json::to_string(snapshot) {
        Ok(json) => json,
        Err(err) => {
            warn!(key, %err, "failed to serialize persisted state");
            return;
        }
    };

    if let Err(err) = storage.set(key, &json).await {
        warn!(key, %err, "failed to persist state");
    }
}

/// Reads and deserializes a store's persisted projection
///
/// Missing keys, storage failures, and corrupt JSON all yield `None` (the
/// store then starts from defaults); failures are logged, corruption included.
pub(crate) async fn load<T: DeserializeOwned>(storage: &dyn StorageAdapter, key: &str) -> Option<T> {
    let json = match storage.get(key).await {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, %err, "failed to read persisted state");
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            warn!(key, %err, "persisted state is corrupt, falling back to defaults");
            None
        }
    }
}

/// Removes a store's persisted projection; failures are logged and swallowed
pub(crate) async fn clear(storage: &dyn StorageAdapter, key: &str) {
    if let Err(err) = storage.remove(key).await {
        warn!(key, %err, "failed to clear persisted state");
    }
}
