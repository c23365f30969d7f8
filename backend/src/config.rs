//! Configuration management for the Crop Advisory server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with ADVISORY__ prefix
//! 4. The `OWM_API_KEY` / `OWM_BASE_URL` variables, when set

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// OpenWeatherMap configuration (weather and geocoding)
    pub openweather: OpenWeatherConfig,

    /// Allowed browser origins
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenWeatherConfig {
    /// API key sent as `appid`
    pub api_key: String,

    /// API root, without the `/data/2.5` or `/geo/1.0` suffix
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("ADVISORY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("openweather.api_key", "")?
            .set_default("openweather.base_url", "https://api.openweathermap.org")?
            .set_default("openweather.timeout_secs", 10)?
            .set_default("cors.allowed_origins", vec!["http://localhost:5173"])?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ADVISORY__ prefix)
            .add_source(
                Environment::with_prefix("ADVISORY")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("openweather.api_key", std::env::var("OWM_API_KEY").ok())?
            .set_override_option("openweather.base_url", std::env::var("OWM_BASE_URL").ok())?
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Refuse to run without upstream credentials
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.openweather.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "OpenWeatherMap API key must be set (OWM_API_KEY or ADVISORY__OPENWEATHER__API_KEY)".into(),
            ));
        }
        if self.openweather.base_url.trim().is_empty() {
            return Err(ConfigError::Message("OpenWeatherMap base URL must not be empty".into()));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(api_key: &str) -> Config {
        Config {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            openweather: OpenWeatherConfig {
                api_key: api_key.to_string(),
                base_url: "https://api.openweathermap.org".to_string(),
                timeout_secs: 10,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
        }
    }

    #[test]
    fn test_validate_requires_api_key() {
        assert!(config_with_key("").validate().is_err());
        assert!(config_with_key("   ").validate().is_err());
        assert!(config_with_key("abc123").validate().is_ok());
    }

    #[test]
    fn test_validate_requires_base_url() {
        let mut config = config_with_key("abc123");
        config.openweather.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = config_with_key("abc123");
        assert!(!config.is_production());
        config.environment = "production".to_string();
        assert!(config.is_production());
    }
}
