//! Geocoding service configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the MapQuest geocoding service
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the MapQuest API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// MapQuest API key, injected from the environment at startup
    pub api_key: SecretString,
}

fn default_base_url() -> String {
    "https://www.mapquestapi.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl GeocodingConfig {
    /// Create a configuration with the given API key and defaults otherwise
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key,
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            api_key: SecretString::from("test-key"),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
