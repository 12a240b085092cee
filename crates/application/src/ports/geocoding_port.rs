//! Geocoding port
//!
//! Defines the interface for resolving free-text place names to
//! coordinates. Adapters in the infrastructure layer implement this port
//! using an external geocoding API.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-to-coordinates resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-form place name or address to coordinates
    ///
    /// Returns `ApplicationError::NotFound` when the service has no
    /// candidate for the input.
    async fn resolve(&self, place: &str) -> Result<GeoLocation, ApplicationError>;
}
