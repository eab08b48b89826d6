use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::errors::AppError;
use crate::types::{AppState, Trip, TripSearchParams};

pub(super) async fn search_trips(
    State(state): State<AppState>,
    params: Result<Query<TripSearchParams>, QueryRejection>,
) -> Result<Json<Vec<Trip>>, AppError> {
    // An undecodable query string is treated as if no parameters were sent.
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let trips = state.services.trips.search(params).await?;
    Ok(Json(trips))
}
