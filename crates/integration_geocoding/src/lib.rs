//! Address geocoding integration for StopFinder
//!
//! Converts free-form place names to geographic coordinates using the
//! [MapQuest Geocoding API](https://developer.mapquest.com/documentation/geocoding-api).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`GeocodingClient`] defines the interface for
//! place-to-coordinate resolution, implemented by [`MapQuestGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, MapQuestGeocodingClient};
//!
//! let config = GeocodingConfig::new(api_key);
//! let client = MapQuestGeocodingClient::new(&config)?;
//!
//! let location = client.resolve("Malden").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, MapQuestGeocodingClient};
pub use config::GeocodingConfig;
pub use error::GeocodingError;
