/// Extension → MIME type table
///
/// Reconstructed draft files need a MIME type, and the only clue a persisted
/// payload carries is its filename. The table covers the audio, video, and
/// image formats the upload forms accept; anything else falls back to the
/// generic binary type.

/// Fallback for unknown or missing extensions
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Known extension → MIME type pairs (extensions lowercase)
const MIME_TABLE: &[(&str, &str)] = &[
    // Audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    ("m4a", "audio/mp4"),
    ("ogg", "audio/ogg"),
    ("opus", "audio/opus"),
    // Video
    ("mp4", "video/mp4"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    // Images (cover art, thumbnails)
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
];

/// Derives a MIME type from a filename's extension
///
/// Case-insensitive; filenames without a known extension map to
/// [`OCTET_STREAM`].
pub fn mime_for_filename(file_name: &str) -> &'static str {
    let extension = match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => extension.to_ascii_lowercase(),
        _ => return OCTET_STREAM,
    };

    MIME_TABLE
        .iter()
        .find(|(known, _)| *known == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}
