use axum::Router;
use axum::http::Method;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::types::AppState;

mod docs;
mod favorites;
mod healthz;
mod trips;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz::healthz))
        .route("/api-docs", get(docs::api_docs))
        .route("/trips", get(trips::search_trips))
        .route("/favorites/add", post(favorites::add_favorite))
        .route("/favorites/byUsername", get(favorites::get_favorites))
        .route("/favorites/remove", delete(favorites::remove_favorite))
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
