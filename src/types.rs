use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::services::Services;
use crate::store::FavoritesStore;
use crate::upstream::TripSearchClient;

#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<Dependencies>,
    pub services: Services,
}

impl AppState {
    pub fn new(deps: Dependencies) -> Self {
        let deps = Arc::new(deps);
        let services = Services::new(deps.clone());
        Self { deps, services }
    }
}

pub struct Dependencies {
    pub store: Arc<dyn FavoritesStore>,
    pub trips_client: Arc<dyn TripSearchClient>,
    /// Held across the read-check-write of every favorites mutation.
    pub favorites_write_lock: Mutex<()>,
    pub port: u16,
}

impl Dependencies {
    pub fn new(
        store: Arc<dyn FavoritesStore>,
        trips_client: Arc<dyn TripSearchClient>,
        port: u16,
    ) -> Self {
        Self {
            store,
            trips_client,
            favorites_write_lock: Mutex::new(()),
            port,
        }
    }
}

/// A travel option as returned by the upstream search API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub display_name: String,
    pub destination: String,
    pub origin: String,
    /// Minutes.
    pub duration: f64,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoritesList {
    pub username: String,
    pub trips: Vec<Trip>,
}

impl FavoritesList {
    pub fn empty(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            trips: Vec::new(),
        }
    }

    pub fn contains(&self, trip_id: &str) -> bool {
        self.trips.iter().any(|trip| trip.id == trip_id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TripSearchParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoritesParams {
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddFavoriteRequest {
    pub username: Option<String>,
    pub trip: Option<Trip>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteRequest {
    pub username: Option<String>,
    pub trip_id: Option<String>,
}
