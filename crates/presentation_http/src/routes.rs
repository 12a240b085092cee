//! Route definitions

use axum::{
    Router,
    routing::get,
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Form flow
        .route(
            "/",
            get(handlers::search::index).post(handlers::search::search),
        )
        // JSON API (v1)
        .route("/v1/stops/nearest", get(handlers::search::nearest_stop))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
