//! Application configuration
//!
//! Layered loading in the order defaults → optional `config.toml` →
//! `STOPFINDER`-prefixed environment variables. API keys are never read
//! from the config file; they come from dedicated environment variables
//! (`MAPQUEST_API_KEY`, `MBTA_API_KEY`) and are held as [`SecretString`]
//! so they cannot leak through serialization or debug output.

use std::env;

use secrecy::SecretString;
use serde::Deserialize;

use application::error::ApplicationError;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding service configuration
    #[serde(default)]
    pub geocoding: GeocodingSettings,

    /// MBTA stop-directory configuration
    #[serde(default)]
    pub mbta: MbtaSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: None,
        }
    }
}

/// Geocoding service settings (API key injected from the environment)
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingSettings {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// MapQuest API key; populated from `MAPQUEST_API_KEY`, never from file
    #[serde(skip)]
    pub api_key: Option<SecretString>,
}

fn default_geocoding_base_url() -> String {
    "https://www.mapquestapi.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

/// MBTA stop-directory settings (API key injected from the environment)
#[derive(Debug, Clone, Deserialize)]
pub struct MbtaSettings {
    /// Base URL for the MBTA v3 API
    #[serde(default = "default_mbta_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// MBTA API key; populated from `MBTA_API_KEY`, never from file.
    /// Optional: the API serves keyless requests at a lower rate tier.
    #[serde(skip)]
    pub api_key: Option<SecretString>,
}

fn default_mbta_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

impl Default for MbtaSettings {
    fn default() -> Self {
        Self {
            base_url: default_mbta_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `STOPFINDER`-prefixed environment variables, then inject API keys
    /// from their dedicated environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., STOPFINDER_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("STOPFINDER")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut loaded: Self = builder.build()?.try_deserialize()?;
        loaded.inject_api_keys();
        Ok(loaded)
    }

    /// Read API keys from their dedicated environment variables
    fn inject_api_keys(&mut self) {
        if let Ok(key) = env::var("MAPQUEST_API_KEY") {
            self.geocoding.api_key = Some(SecretString::from(key));
        }
        if let Ok(key) = env::var("MBTA_API_KEY") {
            self.mbta.api_key = Some(SecretString::from(key));
        }
    }

    /// Build the geocoding client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if no MapQuest API key is
    /// configured; the geocoding service refuses keyless requests.
    pub fn geocoding_client_config(
        &self,
    ) -> Result<integration_geocoding::GeocodingConfig, ApplicationError> {
        let api_key = self.geocoding.api_key.clone().ok_or_else(|| {
            ApplicationError::Configuration(
                "Missing MapQuest API key: set MAPQUEST_API_KEY".to_string(),
            )
        })?;

        let client_config = integration_geocoding::GeocodingConfig {
            base_url: self.geocoding.base_url.clone(),
            timeout_secs: self.geocoding.timeout_secs,
            api_key,
        };
        client_config
            .validate()
            .map_err(ApplicationError::Configuration)?;
        Ok(client_config)
    }

    /// Build the MBTA client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the settings fail
    /// validation.
    pub fn mbta_client_config(&self) -> Result<integration_mbta::MbtaConfig, ApplicationError> {
        let client_config = integration_mbta::MbtaConfig {
            base_url: self.mbta.base_url.clone(),
            timeout_secs: self.mbta.timeout_secs,
            api_key: self.mbta.api_key.clone(),
        };
        client_config
            .validate()
            .map_err(ApplicationError::Configuration)?;
        Ok(client_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.geocoding.base_url, "https://www.mapquestapi.com");
        assert_eq!(config.mbta.base_url, "https://api-v3.mbta.com");
        assert!(config.geocoding.api_key.is_none());
        assert!(config.mbta.api_key.is_none());
    }

    #[test]
    fn test_geocoding_client_config_requires_key() {
        let config = AppConfig::default();
        let result = config.geocoding_client_config();
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn test_geocoding_client_config_with_key() {
        let mut config = AppConfig::default();
        config.geocoding.api_key = Some(SecretString::from("key"));

        let client_config = config.geocoding_client_config().unwrap();
        assert_eq!(client_config.base_url, "https://www.mapquestapi.com");
        assert_eq!(client_config.api_key.expose_secret(), "key");
    }

    #[test]
    fn test_mbta_client_config_keyless_is_valid() {
        let config = AppConfig::default();
        let client_config = config.mbta_client_config().unwrap();
        assert!(client_config.api_key.is_none());
    }

    #[test]
    fn test_file_deserialization_ignores_api_keys() {
        // API keys only ever come from the environment
        let toml_str = r#"
            [server]
            port = 8080

            [geocoding]
            timeout_secs = 3
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.geocoding.timeout_secs, 3);
        assert!(config.geocoding.api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_injected_keys() {
        let mut config = AppConfig::default();
        config.geocoding.api_key = Some(SecretString::from("super-secret"));
        config.mbta.api_key = Some(SecretString::from("also-secret"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("also-secret"));
    }
}
