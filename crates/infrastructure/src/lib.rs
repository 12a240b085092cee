//! Infrastructure layer for StopFinder
//!
//! Provides application configuration and the adapters that implement the
//! application ports on top of the integration clients.

pub mod adapters;
pub mod config;

pub use adapters::{GeocodingAdapter, StopDirectoryAdapter};
pub use config::{AppConfig, ServerConfig};
