use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_favorites::config::{Config, UPSTREAM_TIMEOUT};
use trip_favorites::store::SqliteFavoritesStore;
use trip_favorites::upstream::HttpTripSearchClient;
use trip_favorites::{AppState, Dependencies, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run().await {
        error!("fatal: {:#}", err);
        return Err(err);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("load configuration")?;

    let store = SqliteFavoritesStore::connect(&config.database_url)
        .await
        .context("open favorites database")?;
    let trips_client =
        HttpTripSearchClient::new(config.trips_api_url.clone(), &config.api_key, UPSTREAM_TIMEOUT)?;

    let deps = Dependencies::new(Arc::new(store), Arc::new(trips_client), config.port);
    let app = build_router(AppState::new(deps));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
