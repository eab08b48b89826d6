use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::errors::AppError;
use crate::types::{
    AddFavoriteRequest, AppState, FavoritesList, FavoritesParams, RemoveFavoriteRequest,
};

pub(super) async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoritesList>), AppError> {
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();
    let favorites = state.services.favorites.add(payload).await?;
    Ok((StatusCode::CREATED, Json(favorites)))
}

pub(super) async fn get_favorites(
    State(state): State<AppState>,
    params: Result<Query<FavoritesParams>, QueryRejection>,
) -> Result<Json<FavoritesList>, AppError> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let favorites = state.services.favorites.get(params).await?;
    Ok(Json(favorites))
}

pub(super) async fn remove_favorite(
    State(state): State<AppState>,
    payload: Result<Json<RemoveFavoriteRequest>, JsonRejection>,
) -> Result<Json<FavoritesList>, AppError> {
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();
    let favorites = state.services.favorites.remove(payload).await?;
    Ok(Json(favorites))
}
