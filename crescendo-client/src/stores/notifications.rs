/// Notification (toast) store
///
/// Holds the list of visible toasts. Every push schedules an auto-dismiss
/// timer for the toast's `duration_ms`; manual removal aborts the pending
/// timer, so a toast is removed exactly once no matter which path wins.
/// Removing an id that is already gone is a tolerated no-op — dismiss races
/// are expected, not errors.
///
/// Toasts are ephemeral and never persisted.
///
/// # Example
///
/// ```no_run
/// use crescendo_client::stores::NotificationStore;
/// use crescendo_shared::models::Notification;
///
/// # async fn example() {
/// let store = NotificationStore::new();
/// let id = store.push(Notification::success("Saved", "Draft saved")).await;
///
/// // ... user clicks the X before the 5s auto-dismiss:
/// store.remove(id).await;
/// # }
/// ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use uuid::Uuid;

use crescendo_shared::models::notification::{Notification, NotificationKind};

/// One visible toast plus its pending auto-dismiss timer
struct Entry {
    notification: Notification,
    timer: JoinHandle<()>,
}

#[derive(Default)]
struct Inner {
    entries: RwLock<Vec<Entry>>,
}

impl Inner {
    /// Removes a toast by id, aborting its timer
    ///
    /// Returns false when the id is already gone.
    async fn remove(&self, id: Uuid) -> bool {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|entry| entry.notification.id == id) {
            Some(index) => {
                let entry = entries.remove(index);
                // Aborting a finished timer is harmless.
                entry.timer.abort();
                true
            }
            None => false,
        }
    }
}

/// Toast state container
#[derive(Clone, Default)]
pub struct NotificationStore {
    inner: Arc<Inner>,
}

impl NotificationStore {
    /// Creates an empty store
    pub fn new() -> Self {
        NotificationStore::default()
    }

    /// Adds a toast and schedules its auto-dismiss
    ///
    /// Returns the toast id for manual removal.
    pub async fn push(&self, notification: Notification) -> Uuid {
        let id = notification.id;
        let duration = Duration::from_millis(notification.duration_ms);

        let inner = Arc::clone(&self.inner);
        let timer = tokio::spawn(async move {
            sleep(duration).await;
            inner.remove(id).await;
        });

        self.inner
            .entries
            .write()
            .await
            .push(Entry { notification, timer });

        id
    }

    /// Removes a toast manually, cancelling its auto-dismiss timer
    ///
    /// Removing an unknown or already-dismissed id is a no-op.
    pub async fn remove(&self, id: Uuid) {
        self.inner.remove(id).await;
    }

    /// Pushes a success toast
    pub async fn success(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Success, title, message)).await
    }

    /// Pushes an error toast
    pub async fn error(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Error, title, message)).await
    }

    /// Pushes a warning toast
    pub async fn warning(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Warning, title, message)).await
    }

    /// Pushes an info toast
    pub async fn info(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.push(Notification::new(NotificationKind::Info, title, message)).await
    }

    /// Currently visible toasts, oldest first
    pub async fn notifications(&self) -> Vec<Notification> {
        self.inner
            .entries
            .read()
            .await
            .iter()
            .map(|entry| entry.notification.clone())
            .collect()
    }

    /// Number of visible toasts
    pub async fn len(&self) -> usize {
        self.inner.entries.read().await.len()
    }

    /// Whether no toasts are visible
    pub async fn is_empty(&self) -> bool {
        self.inner.entries.read().await.is_empty()
    }
}
