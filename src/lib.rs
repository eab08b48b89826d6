pub mod config;
pub mod controllers;
pub mod errors;
pub mod openapi;
pub mod services;
pub mod store;
pub mod types;
pub mod upstream;
pub mod validation;

pub use controllers::build_router;
pub use types::{AppState, Dependencies};
