use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::openapi;
use crate::types::AppState;

pub(super) async fn api_docs(State(state): State<AppState>) -> Json<Value> {
    Json(openapi::document(state.deps.port))
}
