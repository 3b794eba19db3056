/// User model and auth request/response shapes
///
/// This module provides the `User` record owned by the session store, the
/// closed set of account roles, and the typed payloads exchanged with the
/// REST collaborator during login and registration.
///
/// # Roles
///
/// - **artist**: uploads and monetizes their own music
/// - **dj**: uploads mixes and tracks leaderboard placement
/// - **creator**: uploads and monetizes video content
/// - **record_label**: manages a roster of artists on top of the full feature set
///
/// # Example
///
/// ```
/// use crescendo_shared::models::user::{User, UserRole, UserUpdate};
/// use chrono::Utc;
///
/// let mut user = User {
///     id: "u1".to_string(),
///     email: "dj@example.com".to_string(),
///     name: "DJ Example".to_string(),
///     role: UserRole::Dj,
///     avatar_url: None,
///     is_verified: false,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// user.apply(UserUpdate {
///     name: Some("DJ Renamed".to_string()),
///     ..Default::default()
/// });
///
/// assert_eq!(user.name, "DJ Renamed");
/// assert_eq!(user.email, "dj@example.com"); // unspecified fields preserved
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account roles recognized by the dashboard
///
/// The set is closed; the permission tables in [`crate::permissions`] are
/// exhaustive over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Uploads and monetizes their own music
    Artist,

    /// Uploads mixes and competes on the leaderboard
    Dj,

    /// Uploads and monetizes video content
    Creator,

    /// Manages a roster of artists; full feature set
    RecordLabel,
}

impl UserRole {
    /// Converts role to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Artist => "artist",
            UserRole::Dj => "dj",
            UserRole::Creator => "creator",
            UserRole::RecordLabel => "record_label",
        }
    }

    /// All roles, in a fixed order (used by exhaustive permission tests)
    pub const ALL: [UserRole; 4] = [
        UserRole::Artist,
        UserRole::Dj,
        UserRole::Creator,
        UserRole::RecordLabel,
    ];
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account record
///
/// Created from the collaborator's login/registration response, mutated by
/// profile updates, cleared on logout. The id is server-assigned and opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned opaque id
    pub id: String,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: UserRole,

    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Whether identity verification has completed
    #[serde(default)]
    pub is_verified: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last profile update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial user update
///
/// Every field is optional; absent fields leave the current value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Verification flag (set by the collaborator after review)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl User {
    /// Applies a partial update as a shallow merge
    ///
    /// Unspecified fields are preserved; `updated_at` is bumped.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(is_verified) = update.is_verified {
            self.is_verified = is_verified;
        }
        self.updated_at = Utc::now();
    }
}

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Account password (never persisted client-side)
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Registration request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    /// Account password
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Requested account role
    pub role: UserRole,
}

/// Password reset request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    /// Account email to send the reset link to
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// Successful auth response from the collaborator
///
/// Only `user` and `token` are consumed; anything else in the response body
/// is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Authenticated user record
    pub user: User,

    /// Opaque bearer token for subsequent requests
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "Ada".to_string(),
            role: UserRole::Artist,
            avatar_url: None,
            is_verified: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_serde_round_trip() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            let back: UserRole = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
        }
        assert_eq!(
            serde_json::to_string(&UserRole::RecordLabel).unwrap(),
            "\"record_label\""
        );
    }

    #[test]
    fn test_apply_preserves_unspecified_fields() {
        let mut user = sample_user();
        user.apply(UserUpdate {
            name: Some("Grace".to_string()),
            ..Default::default()
        });

        assert_eq!(user.name, "Grace");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, UserRole::Artist);
        assert!(!user.is_verified);
    }

    #[test]
    fn test_apply_sets_all_given_fields() {
        let mut user = sample_user();
        user.apply(UserUpdate {
            name: Some("Grace".to_string()),
            email: Some("g@h.com".to_string()),
            avatar_url: Some("https://cdn.example.com/g.png".to_string()),
            is_verified: Some(true),
        });

        assert_eq!(user.email, "g@h.com");
        assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example.com/g.png"));
        assert!(user.is_verified);
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            email: "not-an-email".to_string(),
            password: "".to_string(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_register_request_password_length() {
        let short = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "short".to_string(),
            name: "Ada".to_string(),
            role: UserRole::Creator,
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_auth_response_deserializes_with_extra_fields() {
        let json = serde_json::json!({
            "user": {
                "id": "u1",
                "email": "a@b.com",
                "name": "Ada",
                "role": "dj",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            },
            "token": "t1",
            "expires_in": 3600
        });

        let response: AuthResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.user.role, UserRole::Dj);
        assert_eq!(response.token, "t1");
    }
}
