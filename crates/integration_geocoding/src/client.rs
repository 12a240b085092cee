//! MapQuest geocoding client
//!
//! Converts free-form place names to geographic coordinates using the
//! MapQuest Geocoding API. One outbound GET per resolution, no caching,
//! no retries; a bounded request timeout is the only resilience measure.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::models::GeocodeResponse;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form place name or address to coordinates
    ///
    /// Takes the first candidate the service returns; the service is
    /// authoritative for input interpretation.
    async fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodingError>;
}

/// MapQuest-based geocoding client
#[derive(Debug)]
pub struct MapQuestGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl MapQuestGeocodingClient {
    /// Create a new MapQuest geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("StopFinder/0.1")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

#[async_trait]
impl GeocodingClient for MapQuestGeocodingClient {
    #[instrument(skip(self))]
    async fn resolve(&self, place: &str) -> Result<GeoLocation, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::PlaceNotFound(
                "Place must not be empty".to_string(),
            ));
        }

        let url = format!("{}/geocoding/v1/address", self.config.base_url);
        let params = [
            ("key", self.config.api_key.expose_secret()),
            ("location", place),
        ];

        debug!(%place, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        // An empty result set is a defined "not found" outcome, never an
        // out-of-bounds access.
        let location = body
            .results
            .first()
            .and_then(|result| result.locations.first())
            .ok_or_else(|| GeocodingError::PlaceNotFound(place.to_string()))?;

        let (lat, lng) = (location.lat_lng.lat, location.lat_lng.lng);
        debug!(%place, %lat, %lng, "Geocoded place");

        GeoLocation::new(lat, lng).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}
