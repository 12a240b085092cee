//! Nearest-stop lookup service
//!
//! The core composition: geocode a place name, then ask the stop directory
//! for the nearest stop to the resulting coordinates. The two calls are
//! strictly sequential (the second depends on the first) and the service
//! holds no mutable state.

use std::sync::Arc;

use domain::entities::NearestStop;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, StopDirectoryPort};

/// Service composing geocoding and nearest-stop lookup
pub struct StopFinderService {
    geocoding: Arc<dyn GeocodingPort>,
    stops: Arc<dyn StopDirectoryPort>,
}

impl std::fmt::Debug for StopFinderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopFinderService")
            .field("geocoding", &"<GeocodingPort>")
            .field("stops", &"<StopDirectoryPort>")
            .finish()
    }
}

impl StopFinderService {
    /// Create a new stop finder from its two ports
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>, stops: Arc<dyn StopDirectoryPort>) -> Self {
        Self { geocoding, stops }
    }

    /// Find the transit stop nearest to a named place
    ///
    /// Returns `Ok(None)` when the place resolves but no stop exists near
    /// it. Errors from either hop propagate unchanged so the presentation
    /// layer can distinguish "unknown place" from "service failure".
    #[instrument(skip(self))]
    pub async fn find_stop_near(
        &self,
        place: &str,
    ) -> Result<Option<NearestStop>, ApplicationError> {
        let location = self.geocoding.resolve(place).await?;
        debug!(%location, "Place resolved, looking up nearest stop");

        let stop = self.stops.nearest_stop(&location).await?;
        match &stop {
            Some(stop) => debug!(stop = %stop.name, "Nearest stop found"),
            None => debug!("No stop near resolved coordinates"),
        }
        Ok(stop)
    }
}
