use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::types::{
    AddFavoriteRequest, Dependencies, FavoritesList, FavoritesParams, RemoveFavoriteRequest,
};

#[derive(Clone)]
pub struct FavoriteService {
    deps: Arc<Dependencies>,
}

impl FavoriteService {
    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self { deps }
    }

    /// Append a trip to the user's list, creating the list on first use.
    pub async fn add(&self, payload: AddFavoriteRequest) -> Result<FavoritesList, AppError> {
        let (Some(username), Some(trip)) = (non_empty(payload.username), payload.trip) else {
            return Err(AppError::bad_request("Username and trip details are required."));
        };
        if trip.id.is_empty() {
            return Err(AppError::bad_request("Username and trip details are required."));
        }

        let _guard = self.deps.favorites_write_lock.lock().await;
        let mut favorites = self
            .deps
            .store
            .find_one(&username)
            .await
            .map_err(|err| AppError::internal("Error adding favorite: ", err))?
            .unwrap_or_else(|| FavoritesList::empty(username.as_str()));

        if favorites.contains(&trip.id) {
            info!("favorite add duplicate: username={} trip_id={}", username, trip.id);
            return Err(AppError::conflict(format!(
                "This trip is already in the favorites list for {username}"
            )));
        }

        let trip_id = trip.id.clone();
        favorites.trips.push(trip);
        self.deps
            .store
            .save(&favorites)
            .await
            .map_err(|err| AppError::internal("Error adding favorite: ", err))?;

        info!(
            "favorite added: username={} trip_id={} total={}",
            username,
            trip_id,
            favorites.trips.len()
        );
        Ok(favorites)
    }

    pub async fn get(&self, params: FavoritesParams) -> Result<FavoritesList, AppError> {
        let Some(username) = non_empty(params.username) else {
            return Err(AppError::bad_request("Username is required."));
        };

        let favorites = self
            .deps
            .store
            .find_one(&username)
            .await
            .map_err(|err| AppError::internal("Error fetching favorites: ", err))?;
        let Some(favorites) = favorites else {
            info!("favorites not found: username={}", username);
            return Err(AppError::not_found("No favorites found for this user."));
        };

        info!("favorites listed: username={} total={}", username, favorites.trips.len());
        Ok(favorites)
    }

    /// Drop one trip from the user's list. Membership is checked before
    /// anything is written.
    pub async fn remove(&self, payload: RemoveFavoriteRequest) -> Result<FavoritesList, AppError> {
        let (Some(username), Some(trip_id)) =
            (non_empty(payload.username), non_empty(payload.trip_id))
        else {
            return Err(AppError::bad_request("Username and trip ID are required."));
        };

        let _guard = self.deps.favorites_write_lock.lock().await;
        let favorites = self
            .deps
            .store
            .find_one(&username)
            .await
            .map_err(|err| AppError::internal("Error removing favorite: ", err))?;
        let Some(mut favorites) = favorites else {
            info!("favorite remove unknown user: username={}", username);
            return Err(AppError::not_found("User not found"));
        };

        let Some(position) = favorites.trips.iter().position(|trip| trip.id == trip_id) else {
            info!("favorite remove unknown trip: username={} trip_id={}", username, trip_id);
            return Err(AppError::not_found("Trip not found in favorites."));
        };

        favorites.trips.remove(position);
        self.deps
            .store
            .save(&favorites)
            .await
            .map_err(|err| AppError::internal("Error removing favorite: ", err))?;

        info!(
            "favorite removed: username={} trip_id={} total={}",
            username,
            trip_id,
            favorites.trips.len()
        );
        Ok(favorites)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
