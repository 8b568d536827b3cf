//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Forecast API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, ObservationData};

/// Upstream parameters requested for both the current observation and the
/// hourly forecast, in the order the model was trained on
const WEATHER_PARAMS: &str =
    "temperature_2m,relative_humidity_2m,windspeed_10m,surface_pressure";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Expected section or field absent from the response (schema drift)
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    ///
    /// Always finite; an unbounded outbound call would let one slow
    /// upstream request pin a connection indefinitely.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Open-Meteo HTTP client
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the URL for a current-observation request
    fn build_current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}",
            self.config.base_url, latitude, longitude, WEATHER_PARAMS
        )
    }

    /// Build the URL for today's hourly forecast
    fn build_hourly_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}&forecast_days=1",
            self.config.base_url, latitude, longitude, WEATHER_PARAMS
        )
    }

    /// Issue a GET and decode the response envelope
    ///
    /// One non-success status aborts the request; there is no retry and no
    /// cached fallback.
    async fn fetch(&self, url: &str) -> Result<ApiResponse, WeatherError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Fetch the current observation for a location
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn current_observation(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ObservationData, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_current_url(latitude, longitude);
        debug!(url = %url, "Fetching current observation");

        let api_response = self.fetch(&url).await?;

        api_response
            .current
            .ok_or_else(|| WeatherError::MissingField("current".to_string()))
    }

    /// Fetch today's hourly forecast for a location
    ///
    /// Returns the upstream `hourly` sub-object verbatim; the caller owns
    /// any interpretation of its schema.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<serde_json::Value, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_hourly_url(latitude, longitude);
        debug!(url = %url, "Fetching hourly forecast");

        let api_response = self.fetch(&url).await?;

        api_response
            .hourly
            .ok_or_else(|| WeatherError::MissingField("hourly".to_string()))
    }

    /// Check if the weather service is reachable
    pub async fn is_healthy(&self, latitude: f64, longitude: f64) -> bool {
        self.current_observation(latitude, longitude).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn validate_coordinates_valid() {
        assert!(OpenMeteoClient::validate_coordinates(0.0, 0.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(90.0, 180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(-90.0, -180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(27.7, 85.3).is_ok());
    }

    #[test]
    fn validate_coordinates_invalid() {
        assert!(OpenMeteoClient::validate_coordinates(91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(-91.0, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, 181.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn current_url_requests_the_model_parameters() {
        let client = OpenMeteoClient::with_defaults().expect("client creation should succeed");
        let url = client.build_current_url(27.7, 85.3);
        assert!(url.contains("latitude=27.7"));
        assert!(url.contains("longitude=85.3"));
        assert!(url.contains(
            "current=temperature_2m,relative_humidity_2m,windspeed_10m,surface_pressure"
        ));
        assert!(!url.contains("hourly="));
    }

    #[test]
    fn hourly_url_substitutes_hourly_and_limits_to_one_day() {
        let client = OpenMeteoClient::with_defaults().expect("client creation should succeed");
        let url = client.build_hourly_url(27.7, 85.3);
        assert!(url.contains(
            "hourly=temperature_2m,relative_humidity_2m,windspeed_10m,surface_pressure"
        ));
        assert!(url.contains("forecast_days=1"));
        assert!(!url.contains("current="));
    }

    #[test]
    fn weather_error_display() {
        let err = WeatherError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));

        let err = WeatherError::MissingField("current".to_string());
        assert_eq!(err.to_string(), "Missing field in response: current");

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn client_creation() {
        assert!(OpenMeteoClient::with_defaults().is_ok());
    }

    #[test]
    fn config_serialization() {
        let config = WeatherConfig {
            base_url: "https://custom.api.com".to_string(),
            timeout_secs: 5,
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: WeatherConfig = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.base_url, "https://custom.api.com");
        assert_eq!(deserialized.timeout_secs, 5);
    }
}
