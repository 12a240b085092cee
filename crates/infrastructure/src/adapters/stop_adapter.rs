//! Stop-directory adapter - implements StopDirectoryPort using integration_mbta

use application::error::ApplicationError;
use application::ports::StopDirectoryPort;
use async_trait::async_trait;
use domain::entities::NearestStop;
use domain::value_objects::GeoLocation;
use integration_mbta::{MbtaConfig, MbtaStopClient, StopClient, StopError};
use tracing::instrument;

/// Adapter for nearest-stop lookup using the MBTA v3 API
pub struct StopDirectoryAdapter {
    client: MbtaStopClient,
}

impl std::fmt::Debug for StopDirectoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopDirectoryAdapter")
            .field("client", &"MbtaStopClient")
            .finish()
    }
}

impl StopDirectoryAdapter {
    /// Create a new adapter with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &MbtaConfig) -> Result<Self, ApplicationError> {
        let client =
            MbtaStopClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map an integration stop error to an application error
    fn map_error(err: StopError) -> ApplicationError {
        match err {
            StopError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
            StopError::ConnectionFailed(_)
            | StopError::RequestFailed(_)
            | StopError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
            StopError::ParseError(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl StopDirectoryPort for StopDirectoryAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn nearest_stop(
        &self,
        location: &GeoLocation,
    ) -> Result<Option<NearestStop>, ApplicationError> {
        let stop = self
            .client
            .nearest_stop(location)
            .await
            .map_err(Self::map_error)?;

        Ok(stop.map(|s| NearestStop::from_code(s.name, s.wheelchair_boarding)))
    }
}
