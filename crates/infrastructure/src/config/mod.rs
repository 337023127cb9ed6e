//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `logging`: Log filter and output format
//! - `chaos`: Chaos settings applied at startup
//!
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! `HL7MIRROR_*` environment variables (e.g. `HL7MIRROR_SERVER__PORT=9090`).

mod chaos;
mod logging;
mod server;

use std::fmt;

use application::AckIdentity;
use domain::{ChaosConfig, DomainError};
use serde::{Deserialize, Serialize};

pub use chaos::{ChaosSeedConfig, LatencySeedConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Environment variable holding the configuration file path
pub const CONFIG_PATH_ENV: &str = "HL7MIRROR_CONFIG";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "HL7MIRROR";

const DEFAULT_CONFIG_FILE: &str = "config";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment, stamped on every request log entry
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Chaos settings in effect until changed through the admin API
    #[serde(default)]
    pub chaos: ChaosSeedConfig,

    /// Header identifiers of generated acknowledgments
    #[serde(default)]
    pub ack: AckIdentity,
}

impl AppConfig {
    /// Load configuration from the config file and environment
    ///
    /// The file path is taken from `HL7MIRROR_CONFIG` and defaults to
    /// `config.toml` in the working directory. A missing file is not an error.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path, environment_source())
    }

    /// Load from a specific file and environment source
    pub fn load_from(
        path: &str,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Validated initial chaos configuration
    ///
    /// Applies the same constraints as the admin API.
    pub fn initial_chaos(&self) -> Result<ChaosConfig, DomainError> {
        let config = ChaosConfig::from(self.chaos.clone());
        config.ensure_valid()?;
        Ok(config)
    }
}

/// Environment variable source for `HL7MIRROR_SECTION__KEY` names
#[must_use]
pub fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        environment_source().source(Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ))
    }

    #[test]
    fn environment_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.ack, AckIdentity::default());
        assert_eq!(
            config.initial_chaos().unwrap(),
            ChaosConfig::default()
        );
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn toml_sections_are_read() {
        let config = AppConfig::from_toml_str(
            r#"
            environment = "production"

            [server]
            port = 9000
            max_body_bytes = 2048

            [logging]
            format = "json"

            [chaos]
            enabled = true
            failure_rate_percent = 25
            default_error_type = "503"

            [chaos.latency]
            enabled = true
            delay_ms = 250

            [ack]
            sending_application = "SIM"
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_body_bytes, 2048);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.ack.sending_application, "SIM");
        assert_eq!(config.ack.sending_facility, "TEST");

        let chaos = config.initial_chaos().unwrap();
        assert!(chaos.enabled);
        assert_eq!(chaos.failure_rate_percent, 25);
        assert_eq!(chaos.default_error_type, "503");
        assert_eq!(chaos.effective_delay_ms(), 250);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let config = AppConfig::from_toml_str(
            r#"
            [chaos]
            failure_rate_percent = 150

            [chaos.latency]
            delay_ms = 30001
            "#,
        )
        .unwrap();

        let Err(DomainError::InvalidChaosConfig(violations)) = config.initial_chaos() else {
            unreachable!("Expected InvalidChaosConfig");
        };
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::load_from(
            "does-not-exist",
            env(&[
                ("HL7MIRROR_SERVER__PORT", "9090"),
                ("HL7MIRROR_ENVIRONMENT", "production"),
                ("HL7MIRROR_CHAOS__FAILURE_RATE_PERCENT", "40"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.chaos.failure_rate_percent, 40);
    }

    #[test]
    fn every_loader_agrees_on_server_defaults() {
        let loaded = AppConfig::load_from("does-not-exist", env(&[])).unwrap();
        let parsed = AppConfig::from_toml_str("[server]\nport = 8080").unwrap();

        assert_eq!(loaded.server, ServerConfig::default());
        assert_eq!(parsed.server, ServerConfig::default());
        assert_eq!(AppConfig::default().server.host, "0.0.0.0");
        assert_eq!(parsed.server.shutdown_timeout_secs, Some(30));
    }

    #[test]
    fn app_config_serialization() {
        let json = serde_json::to_string(&AppConfig::default()).unwrap();
        assert!(json.contains("server"));
        assert!(json.contains("logging"));
        assert!(json.contains("failure_rate_percent"));
    }
}
