mod favorites;
mod trips;

pub use favorites::FavoriteService;
pub use trips::TripService;

use std::sync::Arc;

use crate::types::Dependencies;

#[derive(Clone)]
pub struct Services {
    pub trips: TripService,
    pub favorites: FavoriteService,
}

impl Services {
    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self {
            trips: TripService::new(deps.clone()),
            favorites: FavoriteService::new(deps),
        }
    }
}
