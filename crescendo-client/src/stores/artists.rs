/// Artist registry store
///
/// Record-label accounts manage a roster of artists plus a nullable
/// "selected artist" that scopes the rest of the dashboard. The registry is
/// persisted as one JSON blob under `crescendo.artists`.
///
/// # Invariant
///
/// `selected_artist_id` never points at an artist that is not in the list:
/// deleting the selected artist clears the selection inside the same snapshot
/// replacement, and selecting an unknown id is a logged no-op.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crescendo_shared::models::artist::{Artist, CreateArtist, UpdateArtist};

use crate::storage::StorageAdapter;

use super::ARTISTS_KEY;

/// Persisted registry projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRegistry {
    /// All managed artists, in insertion order
    #[serde(default)]
    pub artists: Vec<Artist>,

    /// Active artist context, if one is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_artist_id: Option<Uuid>,
}

/// Artist registry state container
pub struct ArtistStore {
    storage: Arc<dyn StorageAdapter>,
    state: RwLock<ArtistRegistry>,
}

impl ArtistStore {
    /// Creates an empty registry
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        ArtistStore {
            storage,
            state: RwLock::new(ArtistRegistry::default()),
        }
    }

    /// Rehydrates the persisted registry, if one exists
    pub async fn load(&self) {
        if let Some(snapshot) = super::load::<ArtistRegistry>(self.storage.as_ref(), ARTISTS_KEY).await {
            *self.state.write().await = snapshot;
        }
    }

    /// Adds an artist and returns the new record
    ///
    /// The generated id is visible via [`artist_by_id`](Self::artist_by_id)
    /// as soon as this returns; callers may reference it immediately.
    pub async fn add_artist(&self, fields: CreateArtist) -> Artist {
        let artist = Artist::new(fields);
        debug!(artist_id = %artist.id, "adding artist");

        let snapshot = {
            let mut state = self.state.write().await;
            state.artists.push(artist.clone());
            state.clone()
        };
        super::persist(self.storage.as_ref(), ARTISTS_KEY, &snapshot).await;

        artist
    }

    /// Merges fields into an existing artist and bumps its `updated_at`
    ///
    /// No-op when the id is absent from the registry.
    pub async fn update_artist(&self, id: Uuid, update: UpdateArtist) {
        let snapshot = {
            let mut state = self.state.write().await;
            match state.artists.iter_mut().find(|artist| artist.id == id) {
                Some(artist) => {
                    artist.apply(update);
                    Some(state.clone())
                }
                None => None,
            }
        };

        if let Some(snapshot) = snapshot {
            super::persist(self.storage.as_ref(), ARTISTS_KEY, &snapshot).await;
        }
    }

    /// Removes an artist by id
    ///
    /// When the removed artist was selected, the selection is cleared in the
    /// same snapshot replacement so the invariant holds at every read.
    pub async fn delete_artist(&self, id: Uuid) {
        let snapshot = {
            let mut state = self.state.write().await;
            let before = state.artists.len();
            state.artists.retain(|artist| artist.id != id);

            if state.artists.len() == before {
                None
            } else {
                if state.selected_artist_id == Some(id) {
                    state.selected_artist_id = None;
                }
                Some(state.clone())
            }
        };

        if let Some(snapshot) = snapshot {
            super::persist(self.storage.as_ref(), ARTISTS_KEY, &snapshot).await;
        }
    }

    /// Sets or clears the active artist context
    ///
    /// Selecting an id that is not in the registry is a logged no-op.
    pub async fn select_artist(&self, id: Option<Uuid>) {
        let snapshot = {
            let mut state = self.state.write().await;
            match id {
                Some(id) if !state.artists.iter().any(|artist| artist.id == id) => {
                    warn!(artist_id = %id, "refusing to select unknown artist");
                    None
                }
                selection => {
                    state.selected_artist_id = selection;
                    Some(state.clone())
                }
            }
        };

        if let Some(snapshot) = snapshot {
            super::persist(self.storage.as_ref(), ARTISTS_KEY, &snapshot).await;
        }
    }

    /// The selected artist record, if any
    pub async fn selected_artist(&self) -> Option<Artist> {
        let state = self.state.read().await;
        let id = state.selected_artist_id?;
        state.artists.iter().find(|artist| artist.id == id).cloned()
    }

    /// Looks an artist up by id
    pub async fn artist_by_id(&self, id: Uuid) -> Option<Artist> {
        self.state
            .read()
            .await
            .artists
            .iter()
            .find(|artist| artist.id == id)
            .cloned()
    }

    /// All artists, in insertion order
    pub async fn artists(&self) -> Vec<Artist> {
        self.state.read().await.artists.clone()
    }

    /// Current snapshot
    pub async fn snapshot(&self) -> ArtistRegistry {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> ArtistStore {
        ArtistStore::new(Arc::new(MemoryStorage::new()))
    }

    fn create_fields(name: &str) -> CreateArtist {
        CreateArtist {
            name: name.to_string(),
            email: None,
            phone: None,
            avatar_url: None,
            genre: None,
        }
    }

    #[tokio::test]
    async fn test_add_artist_is_immediately_visible() {
        let store = store();

        let artist = store.add_artist(create_fields("Night Drive")).await;
        let looked_up = store.artist_by_id(artist.id).await.unwrap();

        assert_eq!(looked_up, artist);
    }

    #[tokio::test]
    async fn test_add_artist_ids_are_unique() {
        let store = store();

        let a = store.add_artist(create_fields("A")).await;
        let b = store.add_artist(create_fields("B")).await;
        let c = store.add_artist(create_fields("C")).await;

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.artists().await.len(), 3);
    }

    #[tokio::test]
    async fn test_update_absent_artist_is_noop() {
        let store = store();
        store.add_artist(create_fields("A")).await;

        store
            .update_artist(
                Uuid::new_v4(),
                UpdateArtist {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(store.artists().await[0].name, "A");
    }

    #[tokio::test]
    async fn test_delete_selected_artist_clears_selection() {
        let store = store();
        let artist = store.add_artist(create_fields("A")).await;
        store.select_artist(Some(artist.id)).await;

        store.delete_artist(artist.id).await;

        assert_eq!(store.snapshot().await.selected_artist_id, None);
        assert!(store.selected_artist().await.is_none());
    }

    #[tokio::test]
    async fn test_delete_other_artist_keeps_selection() {
        let store = store();
        let keep = store.add_artist(create_fields("Keep")).await;
        let drop = store.add_artist(create_fields("Drop")).await;
        store.select_artist(Some(keep.id)).await;

        store.delete_artist(drop.id).await;

        assert_eq!(store.snapshot().await.selected_artist_id, Some(keep.id));
    }

    #[tokio::test]
    async fn test_select_unknown_artist_is_refused() {
        let store = store();
        let artist = store.add_artist(create_fields("A")).await;
        store.select_artist(Some(artist.id)).await;

        store.select_artist(Some(Uuid::new_v4())).await;

        // Prior selection stands; the invariant never broke.
        assert_eq!(store.snapshot().await.selected_artist_id, Some(artist.id));
    }

    #[tokio::test]
    async fn test_registry_rehydrates_across_instances() {
        let storage = Arc::new(MemoryStorage::new());

        let first = ArtistStore::new(storage.clone());
        let artist = first.add_artist(create_fields("Night Drive")).await;
        first.select_artist(Some(artist.id)).await;

        let second = ArtistStore::new(storage);
        second.load().await;

        assert_eq!(second.artists().await.len(), 1);
        assert_eq!(second.selected_artist().await.unwrap().id, artist.id);
    }
}
