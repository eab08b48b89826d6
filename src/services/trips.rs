use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::types::{Dependencies, Trip, TripSearchParams};
use crate::validation::{SortOrder, is_valid_iata};

#[derive(Clone)]
pub struct TripService {
    deps: Arc<Dependencies>,
}

impl TripService {
    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self { deps }
    }

    /// Validate the query, fetch matching trips upstream and sort them.
    pub async fn search(&self, params: TripSearchParams) -> Result<Vec<Trip>, AppError> {
        let Some(destination) = params.destination.filter(|code| is_valid_iata(code)) else {
            return Err(AppError::bad_request("You must provide a valid destination"));
        };
        let Some(origin) = params.origin.filter(|code| is_valid_iata(code)) else {
            return Err(AppError::bad_request("You must provide a valid origin"));
        };
        let Some(order) = params.sort_by.as_deref().and_then(SortOrder::parse) else {
            return Err(AppError::bad_request("You must provide a valid sort order"));
        };

        info!(
            "trip search requested: origin={} destination={} sort_by={}",
            origin,
            destination,
            order.as_str()
        );

        let mut trips = self
            .deps
            .trips_client
            .search(&origin, &destination)
            .await
            .map_err(AppError::from)?;
        order.apply(&mut trips);

        Ok(trips)
    }
}
