//! Configuration management for the Salt Crystallization Forecast Service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SCF_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Model configuration
    pub model: ModelConfig,

    /// Forecast policy configuration
    pub forecast: ForecastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Path to the serialized model artifact
    pub path: String,

    /// Maximum number of concurrently running predictions
    pub max_workers: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Half-width of the monthly uncertainty band, as a fraction of the
    /// point estimate
    pub bound_fraction: f64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SCF_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 50057)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("model.path", "models/best_hybrid_model.json")?
            .set_default("model.max_workers", 10)?
            .set_default("forecast.bound_fraction", 0.15)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SCF_ prefix)
            .add_source(
                Environment::with_prefix("SCF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 50057,
            host: "0.0.0.0".to_string(),
        }
    }
}
