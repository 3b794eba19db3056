/// Location reference-data store
///
/// Country and state lists come from an opaque reference API. Countries are
/// fetched once and memoized for the life of the process; the state list
/// belongs to the selected country and is invalidated and refetched whenever
/// the selection changes.
///
/// The store talks to the API through the [`LocationProvider`] seam so tests
/// can count fetches without a network.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crescendo_shared::models::location::{Country, StateProvince};

use crate::api::ApiError;

/// Source of country/state reference data
///
/// Implemented by [`ApiClient`](crate::api::ApiClient) and by test mocks.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Fetches the full country list
    async fn countries(&self) -> Result<Vec<Country>, ApiError>;

    /// Fetches the state/province list for one country
    async fn states(&self, country_id: &str) -> Result<Vec<StateProvince>, ApiError>;
}

#[derive(Default)]
struct LocationState {
    /// Memoized country list; `None` until the first successful fetch
    countries: Option<Vec<Country>>,

    /// Selected country id, if any
    selected_country_id: Option<String>,

    /// States of the selected country
    states: Vec<StateProvince>,
}

/// Location reference-data container
pub struct LocationStore {
    provider: Arc<dyn LocationProvider>,
    state: RwLock<LocationState>,
}

impl LocationStore {
    /// Creates an empty store over a provider
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        LocationStore {
            provider,
            state: RwLock::new(LocationState::default()),
        }
    }

    /// Returns the country list, fetching it at most once
    ///
    /// A failed fetch is not memoized; the next call retries.
    pub async fn countries(&self) -> Result<Vec<Country>, ApiError> {
        if let Some(countries) = self.state.read().await.countries.clone() {
            return Ok(countries);
        }

        let fetched = self.provider.countries().await?;
        self.state.write().await.countries = Some(fetched.clone());
        Ok(fetched)
    }

    /// Selects a country and refetches its state list
    ///
    /// The previous state list is invalidated before the fetch, so readers
    /// never see another country's states against the new selection.
    /// Selecting an id not present in the country list is a logged no-op.
    pub async fn select_country(&self, country_id: &str) -> Result<Vec<StateProvince>, ApiError> {
        let known = self
            .countries()
            .await?
            .iter()
            .any(|country| country.id == country_id);
        if !known {
            warn!(country_id, "refusing to select unknown country");
            return Ok(Vec::new());
        }

        {
            let mut state = self.state.write().await;
            state.selected_country_id = Some(country_id.to_string());
            state.states.clear();
        }

        let states = self.provider.states(country_id).await?;

        {
            let mut state = self.state.write().await;
            // A slow response for a stale selection must not overwrite the
            // current country's list.
            if state.selected_country_id.as_deref() == Some(country_id) {
                state.states = states.clone();
            }
        }

        Ok(states)
    }

    /// Selected country id, if any
    pub async fn selected_country_id(&self) -> Option<String> {
        self.state.read().await.selected_country_id.clone()
    }

    /// States of the selected country (empty while none is selected)
    pub async fn states(&self) -> Vec<StateProvince> {
        self.state.read().await.states.clone()
    }
}
