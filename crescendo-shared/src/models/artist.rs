/// Artist sub-profile model
///
/// Record-label accounts manage a roster of artists. Unlike [`super::user::User`],
/// artist records are created client-side: the registry store generates the id
/// and timestamps and the caller may reference the returned id immediately.
///
/// # Example
///
/// ```
/// use crescendo_shared::models::artist::{Artist, CreateArtist, UpdateArtist};
///
/// let mut artist = Artist::new(CreateArtist {
///     name: "Night Drive".to_string(),
///     email: None,
///     phone: None,
///     avatar_url: None,
///     genre: Some("synthwave".to_string()),
/// });
///
/// artist.apply(UpdateArtist {
///     email: Some("mgmt@nightdrive.example".to_string()),
///     ..Default::default()
/// });
///
/// assert_eq!(artist.name, "Night Drive");
/// assert!(artist.email.is_some());
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A label-managed artist profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Client-generated id (UUID v4)
    pub id: Uuid,

    /// Artist or act name
    pub name: String,

    /// Optional contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Optional primary genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateArtist {
    /// Artist or act name
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Optional contact email
    #[validate(email(message = "must be a valid email address"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Optional primary genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// Partial artist update; absent fields are preserved
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArtist {
    /// New artist name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// New primary genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Artist {
    /// Creates a new artist with a fresh id and timestamps
    pub fn new(fields: CreateArtist) -> Self {
        let now = Utc::now();
        Artist {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            avatar_url: fields.avatar_url,
            genre: fields.genre,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update and bumps `updated_at`
    pub fn apply(&mut self, update: UpdateArtist) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(genre) = update.genre {
            self.genre = Some(genre);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_fields(name: &str) -> CreateArtist {
        CreateArtist {
            name: name.to_string(),
            email: None,
            phone: None,
            avatar_url: None,
            genre: None,
        }
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Artist::new(create_fields("A"));
        let b = Artist::new(create_fields("B"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_merges_and_bumps_updated_at() {
        let mut artist = Artist::new(create_fields("Night Drive"));
        let created = artist.created_at;

        artist.apply(UpdateArtist {
            genre: Some("synthwave".to_string()),
            ..Default::default()
        });

        assert_eq!(artist.name, "Night Drive");
        assert_eq!(artist.genre.as_deref(), Some("synthwave"));
        assert!(artist.updated_at >= created);
    }

    #[test]
    fn test_create_requires_name() {
        let empty = create_fields("");
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let artist = Artist::new(CreateArtist {
            genre: Some("house".to_string()),
            ..create_fields("Deep Cut")
        });

        let json = serde_json::to_string(&artist).unwrap();
        let back: Artist = serde_json::from_str(&json).unwrap();
        assert_eq!(artist, back);
    }
}
