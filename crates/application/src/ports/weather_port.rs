//! Weather service port
//!
//! Defines the interface for live weather retrieval. Implementations fetch
//! fresh data for every call; there is no caching layer.

use async_trait::async_trait;
use domain::WeatherObservation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the current observation for the configured location
    async fn current_observation(&self) -> Result<WeatherObservation, ApplicationError>;

    /// Fetch today's hourly forecast as the upstream `hourly` object,
    /// structurally unmodified
    async fn hourly_forecast(&self) -> Result<serde_json::Value, ApplicationError>;

    /// Check whether the upstream service is reachable
    async fn is_available(&self) -> bool;
}
