//! Persistence for per-user favorites documents.

mod memory;
mod sqlite;

pub use memory::InMemoryFavoritesStore;
pub use sqlite::SqliteFavoritesStore;

use async_trait::async_trait;

use crate::types::FavoritesList;

/// One document per username, read and written whole.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn find_one(&self, username: &str) -> anyhow::Result<Option<FavoritesList>>;

    /// Insert the document, or replace the stored one with the same username.
    async fn save(&self, favorites: &FavoritesList) -> anyhow::Result<()>;
}
