//! MBTA stop client
//!
//! Nearest-stop lookup via the MBTA v3 `GET /stops` endpoint. One outbound
//! GET per lookup with `sort=distance` and `page[limit]=1`; the remote
//! service performs all proximity ordering.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::MbtaConfig;
use crate::error::StopError;
use crate::models::{Stop, StopsResponse};

/// Trait for stop-directory clients
#[async_trait]
pub trait StopClient: Send + Sync {
    /// Find the stop nearest to the given coordinates
    ///
    /// Returns `Ok(None)` when the service reports no stop near the
    /// coordinates; that is a valid outcome, not an error.
    async fn nearest_stop(&self, location: &GeoLocation) -> Result<Option<Stop>, StopError>;
}

/// MBTA v3 API stop client
#[derive(Debug)]
pub struct MbtaStopClient {
    client: Client,
    config: MbtaConfig,
}

impl MbtaStopClient {
    /// Create a new MBTA stop client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MbtaConfig) -> Result<Self, StopError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("StopFinder/0.1")
            .build()
            .map_err(|e| StopError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl StopClient for MbtaStopClient {
    #[instrument(skip(self), fields(location = %location))]
    async fn nearest_stop(&self, location: &GeoLocation) -> Result<Option<Stop>, StopError> {
        let url = format!("{}/stops", self.config.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("filter[latitude]", location.latitude().to_string()),
            ("filter[longitude]", location.longitude().to_string()),
            ("sort", "distance".to_string()),
            ("page[limit]", "1".to_string()),
        ];

        if let Some(api_key) = &self.config.api_key {
            params.push(("api_key", api_key.expose_secret().to_string()));
        }

        debug!("Looking up nearest stop");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StopError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    StopError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(StopError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(StopError::RequestFailed(format!("HTTP {status}")));
        }

        let body: StopsResponse = response
            .json()
            .await
            .map_err(|e| StopError::ParseError(e.to_string()))?;

        // An empty list means no stop near these coordinates, a defined
        // outcome rather than an error or an out-of-bounds access.
        let Some(raw) = body.data.into_iter().next() else {
            debug!("No stop near coordinates");
            return Ok(None);
        };

        let stop = Stop::from(raw);
        debug!(stop = %stop.name, code = stop.wheelchair_boarding, "Found nearest stop");
        Ok(Some(stop))
    }
}
