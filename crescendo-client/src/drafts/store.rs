/// Draft persistence over the storage adapter
///
/// Each draft lives under its own key (`crescendo.draft.{kind}.{id}`) so
/// saving one draft never rewrites another. Drafts are created implicitly on
/// first save, overwritten on every form change, and simply abandoned when
/// the user never returns — there is no delete lifecycle.

use std::sync::Arc;

use crescendo_shared::models::upload::{AlbumDraft, TrackDraft, VideoDraft};

use crate::storage::StorageAdapter;
use crate::stores;

/// Storage key prefix for track drafts
const TRACK_PREFIX: &str = "crescendo.draft.track";

/// Storage key prefix for album drafts
const ALBUM_PREFIX: &str = "crescendo.draft.album";

/// Storage key prefix for video drafts
const VIDEO_PREFIX: &str = "crescendo.draft.video";

/// Persists upload drafts under per-id keys
pub struct DraftStore {
    storage: Arc<dyn StorageAdapter>,
}

impl DraftStore {
    /// Creates a draft store over an adapter
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        DraftStore { storage }
    }

    fn key(prefix: &str, id: &str) -> String {
        format!("{prefix}.{id}")
    }

    /// Saves (or overwrites) a track draft
    pub async fn save_track(&self, draft: &TrackDraft) {
        stores::persist(self.storage.as_ref(), &Self::key(TRACK_PREFIX, &draft.id), draft).await;
    }

    /// Loads a track draft by id; missing or corrupt records yield `None`
    pub async fn load_track(&self, id: &str) -> Option<TrackDraft> {
        stores::load(self.storage.as_ref(), &Self::key(TRACK_PREFIX, id)).await
    }

    /// Saves (or overwrites) an album draft
    pub async fn save_album(&self, draft: &AlbumDraft) {
        stores::persist(self.storage.as_ref(), &Self::key(ALBUM_PREFIX, &draft.id), draft).await;
    }

    /// Loads an album draft by id; missing or corrupt records yield `None`
    pub async fn load_album(&self, id: &str) -> Option<AlbumDraft> {
        stores::load(self.storage.as_ref(), &Self::key(ALBUM_PREFIX, id)).await
    }

    /// Saves (or overwrites) a video draft
    pub async fn save_video(&self, draft: &VideoDraft) {
        stores::persist(self.storage.as_ref(), &Self::key(VIDEO_PREFIX, &draft.id), draft).await;
    }

    /// Loads a video draft by id; missing or corrupt records yield `None`
    pub async fn load_video(&self, id: &str) -> Option<VideoDraft> {
        stores::load(self.storage.as_ref(), &Self::key(VIDEO_PREFIX, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::encode_file;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_save_and_load_by_id() {
        let store = DraftStore::new(Arc::new(MemoryStorage::new()));

        let draft = TrackDraft {
            id: "d1".to_string(),
            title: "First Light".to_string(),
            audio: Some(encode_file("first-light.wav", b"RIFF")),
            ..Default::default()
        };
        store.save_track(&draft).await;

        assert_eq!(store.load_track("d1").await, Some(draft));
        assert_eq!(store.load_track("d2").await, None);
    }

    #[tokio::test]
    async fn test_drafts_of_different_kinds_do_not_collide() {
        let store = DraftStore::new(Arc::new(MemoryStorage::new()));

        let track = TrackDraft {
            id: "same-id".to_string(),
            title: "Track".to_string(),
            ..Default::default()
        };
        let video = VideoDraft {
            id: "same-id".to_string(),
            title: "Video".to_string(),
            ..Default::default()
        };

        store.save_track(&track).await;
        store.save_video(&video).await;

        assert_eq!(store.load_track("same-id").await.unwrap().title, "Track");
        assert_eq!(store.load_video("same-id").await.unwrap().title, "Video");
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_draft() {
        let store = DraftStore::new(Arc::new(MemoryStorage::new()));

        let mut draft = TrackDraft {
            id: "d1".to_string(),
            title: "Working Title".to_string(),
            ..Default::default()
        };
        store.save_track(&draft).await;

        draft.title = "Final Title".to_string();
        store.save_track(&draft).await;

        assert_eq!(store.load_track("d1").await.unwrap().title, "Final Title");
    }
}
