use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::FavoritesStore;
use crate::types::FavoritesList;

#[derive(Default)]
pub struct InMemoryFavoritesStore {
    documents: RwLock<HashMap<String, FavoritesList>>,
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl FavoritesStore for InMemoryFavoritesStore {
    async fn find_one(&self, username: &str) -> anyhow::Result<Option<FavoritesList>> {
        Ok(self.documents.read().await.get(username).cloned())
    }

    async fn save(&self, favorites: &FavoritesList) -> anyhow::Result<()> {
        self.documents
            .write()
            .await
            .insert(favorites.username.clone(), favorites.clone());
        Ok(())
    }
}
