#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use trip_favorites::store::{FavoritesStore, InMemoryFavoritesStore, SqliteFavoritesStore};
use trip_favorites::upstream::{HttpTripSearchClient, TripSearchClient};
use trip_favorites::{AppState, Dependencies, build_router};
use url::Url;

pub const API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub store: Arc<dyn FavoritesStore>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve `router` on an ephemeral local port and return its address.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });
    addr
}

pub async fn spawn_app_with(
    store: Arc<dyn FavoritesStore>,
    trips_client: Arc<dyn TripSearchClient>,
) -> TestApp {
    let deps = Dependencies::new(store.clone(), trips_client, 3000);
    let addr = serve(build_router(AppState::new(deps))).await;
    TestApp {
        base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
        store,
    }
}

/// App backed by the in-memory store, with trips served by `upstream`.
pub async fn spawn_app(upstream: &FakeUpstream) -> TestApp {
    spawn_app_with(Arc::new(InMemoryFavoritesStore::new()), upstream.client()).await
}

pub async fn spawn_app_on_sqlite(upstream: &FakeUpstream) -> TestApp {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = SqliteFavoritesStore::new(db).await.unwrap();
    spawn_app_with(Arc::new(store), upstream.client()).await
}

#[derive(Clone, Debug)]
pub struct UpstreamRequest {
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    body: Value,
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
}

/// A stand-in for the third-party trip-search API.
pub struct FakeUpstream {
    pub endpoint: Url,
    requests: Arc<Mutex<Vec<UpstreamRequest>>>,
}

impl FakeUpstream {
    pub async fn returning(trips: Value) -> Self {
        Self::start(StatusCode::OK, trips).await
    }

    pub async fn failing(status: StatusCode) -> Self {
        Self::start(status, json!({ "message": "nope" })).await
    }

    async fn start(status: StatusCode, body: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = UpstreamState {
            status,
            body,
            requests: requests.clone(),
        };
        let router = Router::new()
            .route("/default/trips", get(upstream_trips))
            .with_state(state);
        let addr = serve(router).await;
        Self {
            endpoint: Url::parse(&format!("http://{addr}/default/trips")).unwrap(),
            requests,
        }
    }

    pub fn client(&self) -> Arc<dyn TripSearchClient> {
        Arc::new(
            HttpTripSearchClient::new(self.endpoint.clone(), API_KEY, Duration::from_secs(10)).unwrap(),
        )
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn upstream_trips(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let api_key = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .unwrap()
        .push(UpstreamRequest { query, api_key });
    (state.status, axum::Json(state.body.clone())).into_response()
}

pub fn trip_json(id: &str, duration: f64, cost: f64) -> Value {
    json!({
        "id": id,
        "destination": "ATL",
        "origin": "PEK",
        "duration": duration,
        "cost": cost,
        "type": "flight",
        "display_name": "from PEK to ATL by flight",
    })
}
