/// REST collaborator client
///
/// Typed wrapper around the dashboard's backend API. The server is opaque:
/// this client only knows endpoint paths, request/response shapes, and how to
/// pull a human-readable message out of an error body for toast display.
///
/// # Error Model
///
/// - Transport failures (DNS, timeouts, connection resets) surface as
///   [`ApiError::Transport`]
/// - Non-2xx responses surface as [`ApiError::Status`] with a best-effort
///   message extracted from the body's `message` or `error` JSON field
///
/// Neither is retried; the caller aborts the operation and toasts the
/// message.
///
/// # Authentication
///
/// `login`/`register`/`refresh` store the returned bearer token inside the
/// client; every subsequent request carries it. `logout` clears it even when
/// the server call fails — local sign-out must always succeed.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crescendo_shared::models::artist::Artist;
use crescendo_shared::models::location::{Country, StateProvince};
use crescendo_shared::models::stats::{
    DashboardSummary, EarningsSummary, FanStats, LeaderboardEntry, PayoutRecord, SaleRecord,
};
use crescendo_shared::models::upload::{AlbumDraft, PublishedUpload, TrackDraft, VideoDraft};
use crescendo_shared::models::user::{
    AuthResponse, LoginRequest, PasswordResetRequest, RegisterRequest, User, UserUpdate,
};

use crate::config::ApiConfig;
use crate::stores::LocationProvider;

/// Error type for collaborator requests
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },
}

impl ApiError {
    /// The message to show the user in an error toast
    pub fn toast_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Could not reach the server. Check your connection.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
        }
    }
}

/// Extracts a display message from an error response body
///
/// Tries the conventional `message` then `error` JSON fields; anything else
/// degrades to a generic status line.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(message) = json.get(field).and_then(|value| value.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    format!("Request failed with status {}", status.as_u16())
}

/// Typed REST collaborator client
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Builds a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Stores the bearer token for subsequent requests
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Drops the stored bearer token
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Whether a bearer token is currently held
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and decodes the success body
    async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        debug!(%method, path, "collaborator request");

        let mut builder = self.http.request(method, self.endpoint(path));
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_error_message(status, &body),
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    // --- Auth ---

    /// Logs in and stores the returned bearer token
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post("/auth/login", request).await?;
        self.set_token(response.token.clone()).await;
        Ok(response)
    }

    /// Registers a new account and stores the returned bearer token
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post("/auth/register", request).await?;
        self.set_token(response.token.clone()).await;
        Ok(response)
    }

    /// Logs out server-side and clears the local token either way
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post::<_, serde_json::Value>("/auth/logout", &serde_json::json!({})).await;
        self.clear_token().await;
        result.map(|_| ())
    }

    /// Exchanges the current token for a fresh one
    pub async fn refresh(&self) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.post("/auth/refresh", &serde_json::json!({})).await?;
        self.set_token(response.token.clone()).await;
        Ok(response)
    }

    /// Requests a password-reset email
    pub async fn request_password_reset(&self, request: &PasswordResetRequest) -> Result<(), ApiError> {
        self.post::<_, serde_json::Value>("/auth/password-reset", request)
            .await
            .map(|_| ())
    }

    // --- Profile ---

    /// Fetches the signed-in user's profile
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    /// Updates the signed-in user's profile
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.put("/users/me", update).await
    }

    // --- Uploads ---

    /// Submits a finished track draft for publication
    pub async fn submit_track(&self, draft: &TrackDraft) -> Result<PublishedUpload, ApiError> {
        self.post("/music/tracks", draft).await
    }

    /// Submits a finished album draft for publication
    pub async fn submit_album(&self, draft: &AlbumDraft) -> Result<PublishedUpload, ApiError> {
        self.post("/music/albums", draft).await
    }

    /// Submits a finished video draft for publication
    pub async fn submit_video(&self, draft: &VideoDraft) -> Result<PublishedUpload, ApiError> {
        self.post("/videos", draft).await
    }

    /// Lists published music uploads
    pub async fn music_uploads(&self) -> Result<Vec<PublishedUpload>, ApiError> {
        self.get("/music").await
    }

    /// Lists published video uploads
    pub async fn video_uploads(&self) -> Result<Vec<PublishedUpload>, ApiError> {
        self.get("/videos").await
    }

    // --- Analytics ---

    /// Fetches the dashboard overview metrics
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/dashboard/summary").await
    }

    /// Fetches the earnings breakdown
    pub async fn earnings(&self) -> Result<EarningsSummary, ApiError> {
        self.get("/earnings").await
    }

    /// Fetches the leaderboard
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get("/leaderboard").await
    }

    /// Fetches fan/subscriber analytics
    pub async fn fans(&self) -> Result<FanStats, ApiError> {
        self.get("/fans").await
    }

    /// Fetches sales history
    pub async fn sales(&self) -> Result<Vec<SaleRecord>, ApiError> {
        self.get("/sales").await
    }

    /// Fetches payout history
    pub async fn payments(&self) -> Result<Vec<PayoutRecord>, ApiError> {
        self.get("/payments").await
    }

    /// Fetches the server-side artist roster
    pub async fn artists(&self) -> Result<Vec<Artist>, ApiError> {
        self.get("/artists").await
    }
}

#[async_trait]
impl LocationProvider for ApiClient {
    async fn countries(&self) -> Result<Vec<Country>, ApiError> {
        self.get("/locations/countries").await
    }

    async fn states(&self, country_id: &str) -> Result<Vec<StateProvince>, ApiError> {
        self.get(&format!("/locations/countries/{country_id}/states")).await
    }
}
