/// Upload draft models
///
/// Drafts capture an in-progress upload form: metadata fields plus any files
/// the user has already attached, each encoded as a base64 payload with its
/// original filename. Drafts are persisted continuously as the form changes
/// and rehydrated when the user re-enters the edit route with a matching id.
///
/// Every payload field is optional — a draft saved after typing only a title
/// must round-trip unchanged. Binary reconstruction (base64 → bytes + MIME
/// type) lives in `crescendo-client::drafts`.
///
/// # Example
///
/// ```
/// use crescendo_shared::models::upload::{FilePayload, TrackDraft};
///
/// let draft = TrackDraft {
///     id: "d1".to_string(),
///     title: "First Light".to_string(),
///     audio: Some(FilePayload {
///         data: "SGVsbG8=".to_string(),
///         file_name: "first-light.wav".to_string(),
///     }),
///     ..Default::default()
/// };
///
/// let json = serde_json::to_string(&draft).unwrap();
/// let back: TrackDraft = serde_json::from_str(&json).unwrap();
/// assert!(back.artwork.is_none());
/// ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A base64-encoded file attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// File content, standard base64
    pub data: String,

    /// Original filename, including extension
    pub file_name: String,
}

/// In-progress single-track upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TrackDraft {
    /// Draft id, generated or supplied by the edit route
    pub id: String,

    /// Track title
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// Optional genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Optional planned release date (ISO 8601 date)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Attached audio file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<FilePayload>,

    /// Attached cover art, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<FilePayload>,
}

/// One track inside an album draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AlbumTrackDraft {
    /// Track title
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// Attached audio file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<FilePayload>,
}

/// In-progress album upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AlbumDraft {
    /// Draft id, generated or supplied by the edit route
    pub id: String,

    /// Album title
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// Optional genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Attached cover art, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<FilePayload>,

    /// Album tracks in order
    #[serde(default)]
    #[validate(nested)]
    pub tracks: Vec<AlbumTrackDraft>,
}

/// In-progress video upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct VideoDraft {
    /// Draft id, generated or supplied by the edit route
    pub id: String,

    /// Video title
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Attached video file, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<FilePayload>,

    /// Candidate thumbnails, in display order
    #[serde(default)]
    pub thumbnails: Vec<FilePayload>,
}

/// A published upload as returned by the listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublishedUpload {
    /// Server-assigned opaque id
    pub id: String,

    /// Title
    pub title: String,

    /// Play count
    pub plays: u64,

    /// Publication timestamp (RFC 3339)
    pub published_at: String,
}
