//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// "No stop near the coordinates" is not an error; the lookup returns
/// `Ok(None)` for that outcome.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error (transport failure or remote non-success status)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// A requested resource was not found (e.g., unknown place name)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded at an external service
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (e.g., malformed remote response)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::RateLimited)
    }
}
