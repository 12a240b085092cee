//! StopFinder HTTP presentation layer
//!
//! Serves the place-lookup form, the result page, and a small JSON API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
