//! Stop-directory error types

use thiserror::Error;

/// Errors that can occur during stop-directory operations
///
/// An empty result set is not an error; [`crate::StopClient::nearest_stop`]
/// returns `Ok(None)` for "no stop near these coordinates".
#[derive(Debug, Error)]
pub enum StopError {
    /// Connection to the stop-directory service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the stop-directory service failed (non-success status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response from the stop-directory service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by the API)
        retry_after_secs: Option<u64>,
    },

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl StopError {
    /// Returns true if this error indicates a transient service problem
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}
