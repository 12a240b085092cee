//! Stop-directory port
//!
//! Defines the interface for nearest-stop lookup. Adapters in the
//! infrastructure layer implement this port using an external transit API.
//!
//! The external contract this port assumes: the remote service returns
//! stops sorted by proximity to the given coordinates, so the first entry
//! is the nearest. No local distance computation is performed.

use async_trait::async_trait;
use domain::entities::NearestStop;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for nearest-stop lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StopDirectoryPort: Send + Sync {
    /// Find the stop nearest to the given coordinates
    ///
    /// Returns `Ok(None)` when no stop exists near the coordinates; that
    /// is a valid outcome, distinct from any service failure.
    async fn nearest_stop(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<NearestStop>, ApplicationError>;
}
