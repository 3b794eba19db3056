/// Upload-draft persistence and reconstruction
///
/// When a user leaves an upload form mid-edit, the draft — form fields plus
/// any attached files encoded as base64 — is persisted through the storage
/// adapter. Re-entering the edit route rehydrates the draft and this module
/// decodes every payload back into a binary [`DraftFile`] carrying the
/// original filename and a MIME type derived from its extension.
///
/// Reconstruction is tolerant: each binary-bearing field decodes
/// independently, malformed base64 is logged and yields `None` for that field
/// only, and the form starts with whichever fields survived. A half-broken
/// draft must never abort the page load.
///
/// # Example
///
/// ```
/// use crescendo_client::drafts::{encode_file, reconstruct_track};
/// use crescendo_shared::models::upload::TrackDraft;
///
/// let draft = TrackDraft {
///     id: "d1".to_string(),
///     title: "First Light".to_string(),
///     audio: Some(encode_file("first-light.wav", b"RIFF....")),
///     ..Default::default()
/// };
///
/// let files = reconstruct_track(&draft);
/// let audio = files.audio.unwrap();
/// assert_eq!(audio.file_name, "first-light.wav");
/// assert_eq!(audio.mime_type, "audio/wav");
/// assert_eq!(audio.bytes, b"RIFF....");
/// ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::warn;

use crescendo_shared::models::upload::{AlbumDraft, FilePayload, TrackDraft, VideoDraft};

pub mod mime;
mod store;

pub use mime::mime_for_filename;
pub use store::DraftStore;

/// Error type for draft payload decoding
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// Payload data is not valid base64
    #[error("Invalid base64 in field '{field}': {source}")]
    InvalidBase64 {
        /// Which draft field failed
        field: String,
        /// Decoder error
        source: base64::DecodeError,
    },
}

/// A reconstructed binary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFile {
    /// Original filename
    pub file_name: String,

    /// MIME type derived from the filename's extension
    pub mime_type: &'static str,

    /// Decoded file content
    pub bytes: Vec<u8>,
}

/// Reconstructed files of a single-track draft
#[derive(Debug, Default)]
pub struct TrackFiles {
    /// Audio file, if attached and decodable
    pub audio: Option<DraftFile>,

    /// Cover art, if attached and decodable
    pub artwork: Option<DraftFile>,
}

/// Reconstructed files of an album draft
#[derive(Debug, Default)]
pub struct AlbumFiles {
    /// Cover art, if attached and decodable
    pub artwork: Option<DraftFile>,

    /// Per-track audio, index-aligned with the draft's track list
    pub tracks: Vec<Option<DraftFile>>,
}

/// Reconstructed files of a video draft
#[derive(Debug, Default)]
pub struct VideoFiles {
    /// Video file, if attached and decodable
    pub video: Option<DraftFile>,

    /// Thumbnails that decoded successfully, in draft order
    pub thumbnails: Vec<DraftFile>,
}

/// Encodes raw bytes into a persistable payload
pub fn encode_file(file_name: impl Into<String>, bytes: &[u8]) -> FilePayload {
    FilePayload {
        data: BASE64.encode(bytes),
        file_name: file_name.into(),
    }
}

/// Decodes one payload into a binary file
pub fn decode_payload(field: &str, payload: &FilePayload) -> Result<DraftFile, DraftError> {
    let bytes = BASE64
        .decode(payload.data.as_bytes())
        .map_err(|source| DraftError::InvalidBase64 {
            field: field.to_string(),
            source,
        })?;

    Ok(DraftFile {
        file_name: payload.file_name.clone(),
        mime_type: mime_for_filename(&payload.file_name),
        bytes,
    })
}

/// Decodes an optional payload, logging and dropping failures
fn decode_tolerant(field: &str, payload: Option<&FilePayload>) -> Option<DraftFile> {
    let payload = payload?;
    match decode_payload(field, payload) {
        Ok(file) => Some(file),
        Err(err) => {
            warn!(field, file_name = %payload.file_name, %err, "dropping unreconstructable draft file");
            None
        }
    }
}

/// Reconstructs the files of a single-track draft
pub fn reconstruct_track(draft: &TrackDraft) -> TrackFiles {
    TrackFiles {
        audio: decode_tolerant("audio", draft.audio.as_ref()),
        artwork: decode_tolerant("artwork", draft.artwork.as_ref()),
    }
}

/// Reconstructs the files of an album draft
///
/// The track vector stays index-aligned with the draft so the form can match
/// files back to rows; a missing or broken payload leaves a `None` hole.
pub fn reconstruct_album(draft: &AlbumDraft) -> AlbumFiles {
    AlbumFiles {
        artwork: decode_tolerant("artwork", draft.artwork.as_ref()),
        tracks: draft
            .tracks
            .iter()
            .enumerate()
            .map(|(index, track)| decode_tolerant(&format!("tracks[{index}].audio"), track.audio.as_ref()))
            .collect(),
    }
}

/// Reconstructs the files of a video draft
///
/// Broken thumbnails are dropped from the list; order of the survivors is
/// preserved.
pub fn reconstruct_video(draft: &VideoDraft) -> VideoFiles {
    VideoFiles {
        video: decode_tolerant("video", draft.video.as_ref()),
        thumbnails: draft
            .thumbnails
            .iter()
            .enumerate()
            .filter_map(|(index, payload)| decode_tolerant(&format!("thumbnails[{index}]"), Some(payload)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crescendo_shared::models::upload::AlbumTrackDraft;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let payload = encode_file("noise.flac", &bytes);

        let file = decode_payload("audio", &payload).unwrap();

        assert_eq!(file.bytes, bytes);
        assert_eq!(file.file_name, "noise.flac");
        assert_eq!(file.mime_type, "audio/flac");
    }

    #[test]
    fn test_malformed_base64_reports_field() {
        let payload = FilePayload {
            data: "!!not base64!!".to_string(),
            file_name: "x.mp3".to_string(),
        };

        let err = decode_payload("audio", &payload).unwrap_err();
        assert!(err.to_string().contains("audio"));
    }

    #[test]
    fn test_reconstruct_track_tolerates_partial_draft() {
        let draft = TrackDraft {
            id: "d1".to_string(),
            title: "Untitled".to_string(),
            ..Default::default()
        };

        let files = reconstruct_track(&draft);
        assert!(files.audio.is_none());
        assert!(files.artwork.is_none());
    }

    #[test]
    fn test_reconstruct_track_survives_one_bad_field() {
        let draft = TrackDraft {
            id: "d1".to_string(),
            title: "Untitled".to_string(),
            audio: Some(FilePayload {
                data: "???".to_string(),
                file_name: "broken.mp3".to_string(),
            }),
            artwork: Some(encode_file("cover.png", b"\x89PNG")),
            ..Default::default()
        };

        let files = reconstruct_track(&draft);
        assert!(files.audio.is_none());
        assert_eq!(files.artwork.unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_reconstruct_album_keeps_track_alignment() {
        let draft = AlbumDraft {
            id: "a1".to_string(),
            title: "Afterglow".to_string(),
            tracks: vec![
                AlbumTrackDraft {
                    title: "One".to_string(),
                    audio: Some(encode_file("one.mp3", b"one")),
                },
                AlbumTrackDraft {
                    title: "Two".to_string(),
                    audio: None,
                },
                AlbumTrackDraft {
                    title: "Three".to_string(),
                    audio: Some(encode_file("three.mp3", b"three")),
                },
            ],
            ..Default::default()
        };

        let files = reconstruct_album(&draft);
        assert_eq!(files.tracks.len(), 3);
        assert!(files.tracks[0].is_some());
        assert!(files.tracks[1].is_none());
        assert_eq!(files.tracks[2].as_ref().unwrap().bytes, b"three");
    }

    #[test]
    fn test_reconstruct_video_drops_broken_thumbnails() {
        let draft = VideoDraft {
            id: "v1".to_string(),
            title: "Tour Recap".to_string(),
            video: Some(encode_file("recap.mp4", b"vid")),
            thumbnails: vec![
                encode_file("a.jpg", b"a"),
                FilePayload {
                    data: "%%%".to_string(),
                    file_name: "b.jpg".to_string(),
                },
                encode_file("c.jpg", b"c"),
            ],
            ..Default::default()
        };

        let files = reconstruct_video(&draft);
        assert_eq!(files.video.unwrap().mime_type, "video/mp4");
        let names: Vec<_> = files.thumbnails.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, ["a.jpg", "c.jpg"]);
    }
}
