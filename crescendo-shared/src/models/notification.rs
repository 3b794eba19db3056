/// Toast notification model
///
/// Notifications are ephemeral: they are never persisted and self-destruct
/// after `duration_ms` (scheduling lives in the client's notification store).
///
/// # Example
///
/// ```
/// use crescendo_shared::models::notification::{Notification, NotificationKind};
///
/// let toast = Notification::error("Upload failed", "Audio file exceeds 200 MB");
/// assert_eq!(toast.kind, NotificationKind::Error);
/// assert_eq!(toast.duration_ms, Notification::DEFAULT_DURATION_MS);
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Action completed
    Success,

    /// Action failed
    Error,

    /// Something needs attention but did not fail
    Warning,

    /// Neutral information
    Info,
}

impl NotificationKind {
    /// Converts kind to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ephemeral toast record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id (UUID v4), used for manual removal
    pub id: Uuid,

    /// Severity
    pub kind: NotificationKind,

    /// Short headline
    pub title: String,

    /// Longer message body
    pub message: String,

    /// How long the toast stays visible, in milliseconds
    pub duration_ms: u64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Default visibility duration (5 seconds)
    pub const DEFAULT_DURATION_MS: u64 = 5000;

    /// Creates a notification with the default duration
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: Self::DEFAULT_DURATION_MS,
            created_at: Utc::now(),
        }
    }

    /// Overrides the visibility duration
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Creates a success toast
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Success, title, message)
    }

    /// Creates an error toast
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Error, title, message)
    }

    /// Creates a warning toast
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Warning, title, message)
    }

    /// Creates an info toast
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification::new(NotificationKind::Info, title, message)
    }
}
