//! Plants API: a small REST CRUD service for a plant catalog over SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::AppError;
pub use model::{NewPlant, Plant, PlantDraft, PlantPatch};
pub use routes::{app, common_routes, plant_routes};
pub use state::AppState;
pub use store::PlantStore;
