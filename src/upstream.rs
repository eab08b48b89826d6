//! Client for the third-party trip-search API.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::info;
use url::Url;

use crate::types::Trip;

pub const API_KEY_HEADER: &str = "x-api-key";

#[async_trait]
pub trait TripSearchClient: Send + Sync {
    /// Trips between two airports, in whatever order upstream returns them.
    async fn search(&self, origin: &str, destination: &str) -> anyhow::Result<Vec<Trip>>;
}

pub struct HttpTripSearchClient {
    http_client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl HttpTripSearchClient {
    pub fn new(endpoint: Url, api_key: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(default_headers)
            .user_agent("trip-favorites/0.1")
            .timeout(timeout)
            .build()
            .context("build http client")?;

        Ok(Self {
            http_client,
            endpoint,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl TripSearchClient for HttpTripSearchClient {
    async fn search(&self, origin: &str, destination: &str) -> anyhow::Result<Vec<Trip>> {
        let start = std::time::Instant::now();
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&[("destination", destination), ("origin", origin)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            info!(
                "trip search upstream failed: origin={} destination={} http_status={} elapsed_ms={}",
                origin,
                destination,
                status.as_u16(),
                start.elapsed().as_millis()
            );
            anyhow::bail!(
                "Error while fetching: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            );
        }

        let trips: Vec<Trip> = response.json().await?;
        info!(
            "trip search upstream ok: origin={} destination={} trips={} elapsed_ms={}",
            origin,
            destination,
            trips.len(),
            start.elapsed().as_millis()
        );
        Ok(trips)
    }
}
