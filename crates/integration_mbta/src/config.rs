//! Stop-directory service configuration

use secrecy::SecretString;
use serde::Deserialize;

/// Configuration for the MBTA v3 stop-directory service
#[derive(Debug, Clone, Deserialize)]
pub struct MbtaConfig {
    /// Base URL for the MBTA v3 API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// MBTA API key, injected from the environment at startup
    ///
    /// The API works without a key at a lower rate tier, so this is optional.
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

fn default_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl MbtaConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            api_key: None,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialization_defaults() {
        let config: MbtaConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://api-v3.mbta.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_for_testing() {
        let config = MbtaConfig::for_testing("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = MbtaConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..MbtaConfig::for_testing("http://localhost")
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_validation_success() {
        assert!(MbtaConfig::for_testing("http://localhost").validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = MbtaConfig {
            base_url: String::new(),
            ..MbtaConfig::for_testing("http://localhost")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = MbtaConfig {
            timeout_secs: 0,
            ..MbtaConfig::for_testing("http://localhost")
        };
        assert!(config.validate().is_err());
    }
}
