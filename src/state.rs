//! Shared application state for all routes.

use crate::store::PlantStore;

/// Passed to each handler via axum's `State` extractor rather than living
/// as a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub store: PlantStore,
}
