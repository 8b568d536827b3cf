//! Infrastructure layer for AeroSense
//!
//! Configuration loading and the concrete adapters behind the application
//! ports: the serialized regression model, the Open-Meteo client, and the
//! random noise source.

pub mod adapters;
pub mod config;

pub use adapters::{GbdtRegressionAdapter, OpenMeteoWeatherAdapter, StdRngNoise};
pub use config::{AppConfig, GeoLocationConfig, ModelConfig, ServerConfig, WeatherConfig};
