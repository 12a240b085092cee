//! Geocoding adapter - implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geocoding::{
    GeocodingClient, GeocodingConfig, GeocodingError, MapQuestGeocodingClient,
};
use tracing::instrument;

/// Adapter for place-name resolution using the MapQuest geocoding API
pub struct GeocodingAdapter {
    client: MapQuestGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"MapQuestGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = MapQuestGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration geocoding error to an application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::PlaceNotFound(place) => ApplicationError::NotFound(place),
            GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
            GeocodingError::ParseError(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, place: &str) -> Result<GeoLocation, ApplicationError> {
        self.client.resolve(place).await.map_err(Self::map_error)
    }
}
