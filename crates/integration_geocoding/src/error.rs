//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed (non-success status)
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response from the geocoding service
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// The place could not be resolved to coordinates (empty result set)
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Request timed out
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeocodingError {
    /// Returns true if this error indicates a transient service problem
    /// rather than a definitive "no such place" answer
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout { .. }
        )
    }
}
