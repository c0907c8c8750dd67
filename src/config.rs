//! Configuration Module
//!
//! Runtime settings for the cinema tickets binary, loaded from a TOML file.
//! Prices and purchase limits are not configurable; see `pricing`.

use serde::Deserialize;
use std::fs;
use std::str::FromStr;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [api]
/// host = "127.0.0.1"
/// port = 8080
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// JSON-RPC endpoint settings
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> anyhow::Result<tracing::Level> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| anyhow::anyhow!("unknown log level {:?}", self.level))
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.logging.max_level()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [api]
            host = "0.0.0.0"
            port = 9000

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.logging.max_level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = Config::parse("[api]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();

        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let result = Config::parse(
            "[api]\nhost = \"127.0.0.1\"\nport = 8080\n[logging]\nlevel = \"loud\"\n",
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_default_config_loads() {
        let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml")).unwrap();

        assert_eq!(config.api.port, 8080);
    }
}
