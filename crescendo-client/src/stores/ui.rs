/// Theme and sidebar stores
///
/// Two small UI containers. The theme survives reloads (persisted under
/// `crescendo.theme`); the sidebar collapse flag is deliberately ephemeral —
/// every session starts expanded.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::storage::StorageAdapter;

use super::THEME_KEY;

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,

    /// Dark theme
    Dark,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted theme projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ThemeSnapshot {
    theme: Theme,
}

/// Theme state container
pub struct ThemeStore {
    storage: Arc<dyn StorageAdapter>,
    state: RwLock<ThemeSnapshot>,
}

impl ThemeStore {
    /// Creates a store with the default (light) theme
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        ThemeStore {
            storage,
            state: RwLock::new(ThemeSnapshot::default()),
        }
    }

    /// Rehydrates the persisted theme, if one exists
    pub async fn load(&self) {
        if let Some(snapshot) = super::load::<ThemeSnapshot>(self.storage.as_ref(), THEME_KEY).await {
            *self.state.write().await = snapshot;
        }
    }

    /// Sets the theme
    pub async fn set_theme(&self, theme: Theme) {
        let snapshot = {
            let mut state = self.state.write().await;
            state.theme = theme;
            state.clone()
        };
        super::persist(self.storage.as_ref(), THEME_KEY, &snapshot).await;
    }

    /// Flips between light and dark
    pub async fn toggle(&self) -> Theme {
        let (snapshot, theme) = {
            let mut state = self.state.write().await;
            state.theme = state.theme.toggled();
            (state.clone(), state.theme)
        };
        super::persist(self.storage.as_ref(), THEME_KEY, &snapshot).await;
        theme
    }

    /// Current theme
    pub async fn theme(&self) -> Theme {
        self.state.read().await.theme
    }
}

/// Sidebar state container (not persisted)
#[derive(Default)]
pub struct SidebarStore {
    collapsed: RwLock<bool>,
}

impl SidebarStore {
    /// Creates an expanded sidebar
    pub fn new() -> Self {
        SidebarStore::default()
    }

    /// Flips the collapsed flag and returns the new value
    pub async fn toggle(&self) -> bool {
        let mut collapsed = self.collapsed.write().await;
        *collapsed = !*collapsed;
        *collapsed
    }

    /// Sets the collapsed flag
    pub async fn set_collapsed(&self, collapsed: bool) {
        *self.collapsed.write().await = collapsed;
    }

    /// Whether the sidebar is collapsed
    pub async fn is_collapsed(&self) -> bool {
        *self.collapsed.read().await
    }
}
