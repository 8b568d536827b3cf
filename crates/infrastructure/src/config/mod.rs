//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: upstream Open-Meteo settings and monitoring location
//! - `model`: regression model artifact and reported metrics

mod model;
mod server;
mod weather;

use serde::{Deserialize, Serialize};

pub use model::ModelConfig;
pub use server::ServerConfig;
pub use weather::{GeoLocationConfig, WeatherConfig};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather integration settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Regression model settings
    #[serde(default)]
    pub model: ModelConfig,
}

impl AppConfig {
    /// Load configuration with layered precedence: defaults, then an
    /// optional `config.toml`, then `AEROSENSE_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., AEROSENSE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("AEROSENSE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
