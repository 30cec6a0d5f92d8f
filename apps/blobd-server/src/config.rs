//! Server configuration.
//!
//! Provides [`ServerConfig`] for the blobd server binary. Values are
//! loaded from environment variables with container-friendly defaults.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Server configuration.
///
/// All fields have defaults suited to running in a container.
/// Configuration is loaded from environment variables via
/// [`ServerConfig::from_env`].
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// TCP port the HTTP listener binds to.
    #[builder(default = 8080)]
    pub port: u16,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            log_level: String::from("info"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to
    /// defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `PORT` | `8080` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("PORT") {
            if let Ok(n) = v.parse::<u16>() {
                config.port = n;
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The socket address string the listener binds to.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_should_load_from_env() {
        let config = ServerConfig::from_env();
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = ServerConfig::builder()
            .port(9000)
            .log_level("debug".into())
            .build();

        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_format_listen_addr() {
        let config = ServerConfig::builder().port(9000).build();
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = ServerConfig::default();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("port"));
        assert!(json.contains("logLevel"));
    }
}
