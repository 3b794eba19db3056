/// Application context
///
/// Wires the storage adapter, API client, and every store into one explicit
/// unit with a defined construction order: adapter first, then the client,
/// then the stores, then rehydration of the persisted ones. Nothing here is
/// a global — tests build a context per case and drop it at the end.
///
/// The context also owns the cross-store flows (login, logout, profile
/// update, dashboard refresh): operations that touch the API and more than
/// one store, including the error→toast path.
///
/// # Example
///
/// ```no_run
/// use crescendo_client::config::ClientConfig;
/// use crescendo_client::context::AppContext;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = ClientConfig::from_env()?;
/// let app = AppContext::new(&config).await?;
///
/// match app.login("a@b.com", "secret").await {
///     Ok(user) => println!("welcome, {}", user.name),
///     Err(_) => {} // already toasted
/// }
/// # Ok(())
/// # }
/// ```

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crescendo_shared::models::stats::DashboardSummary;
use crescendo_shared::models::user::{LoginRequest, RegisterRequest, User, UserUpdate};

use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::drafts::DraftStore;
use crate::storage::{SqliteStorage, StorageAdapter};
use crate::stores::{
    ArtistStore, DashboardStore, LocationStore, NotificationStore, SessionStore, SidebarStore,
    ThemeStore,
};

/// Error type for cross-store flows
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Client-side validation failed; no request was issued
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// The collaborator rejected or never received the request
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The assembled client core
pub struct AppContext {
    /// REST collaborator client
    pub api: Arc<ApiClient>,

    /// Auth/user container
    pub session: SessionStore,

    /// Label artist registry
    pub artists: ArtistStore,

    /// Theme container
    pub theme: ThemeStore,

    /// Sidebar container
    pub sidebar: SidebarStore,

    /// Toast container
    pub notifications: NotificationStore,

    /// Dashboard metrics cache
    pub dashboard: DashboardStore,

    /// Country/state reference cache
    pub locations: LocationStore,

    /// Upload draft persistence
    pub drafts: DraftStore,
}

impl AppContext {
    /// Builds a context over the configured SQLite store
    pub async fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn StorageAdapter> = Arc::new(SqliteStorage::open(&config.storage.path)?);
        Self::with_storage(config, storage).await
    }

    /// Builds a context over an injected storage adapter
    ///
    /// Tests pass a `MemoryStorage` here; production code goes through
    /// [`new`](Self::new).
    pub async fn with_storage(
        config: &ClientConfig,
        storage: Arc<dyn StorageAdapter>,
    ) -> anyhow::Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api)?);

        let context = AppContext {
            session: SessionStore::new(storage.clone()),
            artists: ArtistStore::new(storage.clone()),
            theme: ThemeStore::new(storage.clone()),
            sidebar: SidebarStore::new(),
            notifications: NotificationStore::new(),
            dashboard: DashboardStore::new(),
            locations: LocationStore::new(api.clone()),
            drafts: DraftStore::new(storage),
            api,
        };

        // Rehydrate persisted stores before anything reads them.
        context.session.load().await;
        context.artists.load().await;
        context.theme.load().await;

        info!("application context ready");
        Ok(context)
    }

    /// Signs in against the collaborator
    ///
    /// Validation failures block the request entirely; API failures abort the
    /// flow and raise an error toast with the extracted message.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, FlowError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        match self.api.login(&request).await {
            Ok(response) => {
                self.session.login(response.user.clone()).await;
                Ok(response.user)
            }
            Err(err) => {
                self.notifications.error("Sign-in failed", err.toast_message()).await;
                Err(err.into())
            }
        }
    }

    /// Registers a new account and signs it in
    pub async fn register(&self, request: RegisterRequest) -> Result<User, FlowError> {
        request.validate()?;

        match self.api.register(&request).await {
            Ok(response) => {
                self.session.login(response.user.clone()).await;
                Ok(response.user)
            }
            Err(err) => {
                self.notifications.error("Registration failed", err.toast_message()).await;
                Err(err.into())
            }
        }
    }

    /// Signs out
    ///
    /// The server call is best-effort; local state is cleared no matter what.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            warn!(%err, "server logout failed; clearing local session anyway");
        }
        self.session.logout().await;
        self.dashboard.clear().await;
    }

    /// Updates the profile on the server, then mirrors the change locally
    pub async fn update_profile(&self, update: UserUpdate) -> Result<User, FlowError> {
        match self.api.update_profile(&update).await {
            Ok(user) => {
                self.session.update_user(update).await;
                Ok(user)
            }
            Err(err) => {
                self.notifications.error("Profile update failed", err.toast_message()).await;
                Err(err.into())
            }
        }
    }

    /// Refetches the dashboard metrics into the cache
    pub async fn refresh_dashboard(&self) -> Result<DashboardSummary, FlowError> {
        match self.api.dashboard_summary().await {
            Ok(summary) => {
                self.dashboard.update(summary.clone()).await;
                Ok(summary)
            }
            Err(err) => {
                self.notifications.error("Dashboard unavailable", err.toast_message()).await;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    async fn context() -> AppContext {
        // Nothing listens on port 9; any request fails fast with a transport
        // error instead of hitting a real server.
        let mut config = ClientConfig::default();
        config.api.base_url = "http://127.0.0.1:9".to_string();
        AppContext::with_storage(&config, Arc::new(MemoryStorage::new()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_validation_blocks_request() {
        let app = context().await;

        let err = app.login("not-an-email", "").await.unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));

        // No request, no toast, no session.
        assert!(app.notifications.is_empty().await);
        assert!(!app.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_register_validation_blocks_request() {
        let app = context().await;

        let err = app
            .register(RegisterRequest {
                email: "a@b.com".to_string(),
                password: "short".to_string(),
                name: "Ada".to_string(),
                role: crescendo_shared::models::user::UserRole::Artist,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, FlowError::Validation(_)));
        assert!(!app.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_local_state_without_server() {
        let app = context().await;

        // No server is listening; logout must still clear everything local.
        app.logout().await;

        assert!(!app.session.is_authenticated().await);
        assert!(app.dashboard.summary().await.is_none());
        assert!(!app.api.has_token().await);
    }
}
