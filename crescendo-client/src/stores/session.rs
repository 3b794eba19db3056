/// Session store: the authenticated user and auth flag
///
/// Owns `{user, is_authenticated}`, persisted as one JSON blob under
/// `crescendo.session` so a reload restores the signed-in state without a
/// network round trip. Token material is NOT part of the projection — only
/// identity survives a restart; requests re-authenticate via refresh.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use crescendo_client::storage::MemoryStorage;
/// use crescendo_client::stores::SessionStore;
///
/// # async fn example(user: crescendo_shared::models::User) {
/// let store = SessionStore::new(Arc::new(MemoryStorage::new()));
/// store.load().await;
///
/// store.login(user).await;
/// assert!(store.is_authenticated().await);
///
/// store.logout().await;
/// assert!(store.user().await.is_none());
/// # }
/// ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crescendo_shared::models::user::{User, UserUpdate};

use crate::storage::StorageAdapter;

use super::SESSION_KEY;

/// Persisted session projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Signed-in user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Whether a login has completed this session
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Auth/user state container
pub struct SessionStore {
    storage: Arc<dyn StorageAdapter>,
    state: RwLock<SessionSnapshot>,
}

impl SessionStore {
    /// Creates an empty, signed-out session store
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        SessionStore {
            storage,
            state: RwLock::new(SessionSnapshot::default()),
        }
    }

    /// Rehydrates the persisted session, if one exists
    ///
    /// Call once at startup, before first read.
    pub async fn load(&self) {
        if let Some(snapshot) = super::load::<SessionSnapshot>(self.storage.as_ref(), SESSION_KEY).await {
            *self.state.write().await = snapshot;
        }
    }

    /// Signs a user in
    pub async fn login(&self, user: User) {
        debug!(user_id = %user.id, role = %user.role, "session login");
        let snapshot = {
            let mut state = self.state.write().await;
            state.user = Some(user);
            state.is_authenticated = true;
            state.clone()
        };
        super::persist(self.storage.as_ref(), SESSION_KEY, &snapshot).await;
    }

    /// Signs out and clears the persisted session
    pub async fn logout(&self) {
        debug!("session logout");
        {
            let mut state = self.state.write().await;
            *state = SessionSnapshot::default();
        }
        super::clear(self.storage.as_ref(), SESSION_KEY).await;
    }

    /// Merges partial profile fields into the current user
    ///
    /// No-op when nobody is signed in.
    pub async fn update_user(&self, update: UserUpdate) {
        let snapshot = {
            let mut state = self.state.write().await;
            match state.user.as_mut() {
                Some(user) => {
                    user.apply(update);
                    Some(state.clone())
                }
                None => None,
            }
        };

        if let Some(snapshot) = snapshot {
            super::persist(self.storage.as_ref(), SESSION_KEY, &snapshot).await;
        }
    }

    /// Current snapshot
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.read().await.clone()
    }

    /// Signed-in user, if any
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Whether a login has completed
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::Utc;
    use crescendo_shared::models::user::UserRole;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "Ada".to_string(),
            role: UserRole::Dj,
            avatar_url: None,
            is_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_login_sets_user_and_flag() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));

        store.login(sample_user()).await;

        assert!(store.is_authenticated().await);
        assert_eq!(store.user().await.unwrap().role, UserRole::Dj);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());

        store.login(sample_user()).await;
        store.logout().await;

        assert!(!store.is_authenticated().await);
        assert!(store.user().await.is_none());
        assert_eq!(storage.get(SESSION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_user_without_session_is_noop() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));

        store
            .update_user(UserUpdate {
                name: Some("Grace".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(store.snapshot().await, SessionSnapshot::default());
    }

    #[tokio::test]
    async fn test_update_user_shallow_merges() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.login(sample_user()).await;

        store
            .update_user(UserUpdate {
                name: Some("Grace".to_string()),
                ..Default::default()
            })
            .await;

        let user = store.user().await.unwrap();
        assert_eq!(user.name, "Grace");
        assert_eq!(user.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_session_rehydrates_across_instances() {
        let storage = Arc::new(MemoryStorage::new());

        let first = SessionStore::new(storage.clone());
        first.login(sample_user()).await;

        let second = SessionStore::new(storage);
        second.load().await;

        assert!(second.is_authenticated().await);
        assert_eq!(second.user().await.unwrap().id, "u1");
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_block_login() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_failing(true);

        let store = SessionStore::new(storage);
        store.login(sample_user()).await;

        // In-memory state is authoritative even when persistence fails.
        assert!(store.is_authenticated().await);
    }
}
