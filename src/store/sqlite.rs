use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use super::FavoritesStore;
use crate::types::{FavoritesList, Trip};

/// Favorites kept in SQLite, one row per username with the trip list stored
/// as a JSON array.
#[derive(Clone)]
pub struct SqliteFavoritesStore {
    db: SqlitePool,
}

impl SqliteFavoritesStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("parse database url {database_url}"))?
            .create_if_missing(true);

        if let Some(dir) = database_dir(database_url) {
            tokio::fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("create database dir {}", dir.display()))?;
        }

        let db = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("connect sqlite")?;
        info!("database connected: {}", database_url);

        Self::new(db).await
    }

    pub async fn new(db: SqlitePool) -> anyhow::Result<Self> {
        init_db(&db).await?;
        Ok(Self { db })
    }
}

#[async_trait]
impl FavoritesStore for SqliteFavoritesStore {
    async fn find_one(&self, username: &str) -> anyhow::Result<Option<FavoritesList>> {
        let trips: Option<String> =
            sqlx::query_scalar("SELECT trips FROM favorites WHERE username = ?1")
                .bind(username)
                .fetch_optional(&self.db)
                .await?;

        let Some(trips) = trips else {
            return Ok(None);
        };
        let trips: Vec<Trip> = serde_json::from_str(&trips)
            .with_context(|| format!("decode stored favorites for {username}"))?;

        Ok(Some(FavoritesList {
            username: username.to_string(),
            trips,
        }))
    }

    async fn save(&self, favorites: &FavoritesList) -> anyhow::Result<()> {
        let trips = serde_json::to_string(&favorites.trips).context("encode favorites")?;
        sqlx::query(
            r#"
            INSERT INTO favorites (username, trips)
            VALUES (?1, ?2)
            ON CONFLICT(username) DO UPDATE SET trips = excluded.trips
            "#,
        )
        .bind(&favorites.username)
        .bind(trips)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}

/// Directory holding the database file, if the url names one.
fn database_dir(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

async fn init_db(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            username TEXT PRIMARY KEY NOT NULL,
            trips TEXT NOT NULL
        );
        "#,
    )
    .execute(db)
    .await
    .context("create favorites table")?;

    Ok(())
}
