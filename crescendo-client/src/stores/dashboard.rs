/// Dashboard metrics cache
///
/// In-memory cache of the collaborator's overview metrics so navigating back
/// to the dashboard does not refetch. Not persisted — stale numbers across a
/// restart would be worse than a single fetch.

use tokio::sync::RwLock;

use crescendo_shared::models::stats::DashboardSummary;

/// Dashboard summary cache
#[derive(Default)]
pub struct DashboardStore {
    summary: RwLock<Option<DashboardSummary>>,
}

impl DashboardStore {
    /// Creates an empty cache
    pub fn new() -> Self {
        DashboardStore::default()
    }

    /// Replaces the cached summary
    pub async fn update(&self, summary: DashboardSummary) {
        *self.summary.write().await = Some(summary);
    }

    /// Cached summary, if a fetch has completed this session
    pub async fn summary(&self) -> Option<DashboardSummary> {
        self.summary.read().await.clone()
    }

    /// Drops the cache (e.g. on logout)
    pub async fn clear(&self) {
        *self.summary.write().await = None;
    }
}
