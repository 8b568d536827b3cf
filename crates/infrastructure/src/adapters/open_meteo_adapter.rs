//! Open-Meteo weather adapter - Implements WeatherPort using the
//! integration_weather client

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{GeoLocation, WeatherObservation};
use integration_weather::{ObservationData, OpenMeteoClient, WeatherError};
use tracing::instrument;

use crate::config::WeatherConfig;

/// Adapter binding the Open-Meteo client to the configured location
#[derive(Debug)]
pub struct OpenMeteoWeatherAdapter {
    client: OpenMeteoClient,
    location: GeoLocation,
}

impl OpenMeteoWeatherAdapter {
    /// Create a new adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid coordinates or an
    /// external-service error if the HTTP client cannot be built.
    pub fn new(config: &WeatherConfig) -> Result<Self, ApplicationError> {
        let location = config.location.to_geo_location().ok_or_else(|| {
            ApplicationError::Configuration(format!(
                "invalid monitoring location: {}, {}",
                config.location.latitude, config.location.longitude
            ))
        })?;

        let client = OpenMeteoClient::new(integration_weather::WeatherConfig {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
        .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        Ok(Self { client, location })
    }

    /// Map a client error into the application taxonomy
    fn map_error(e: WeatherError) -> ApplicationError {
        ApplicationError::ExternalService(e.to_string())
    }
}

fn to_observation(data: ObservationData) -> WeatherObservation {
    WeatherObservation {
        temperature: data.temperature_2m,
        humidity: data.relative_humidity_2m,
        wind_speed: data.windspeed_10m,
        pressure: data.surface_pressure,
    }
}

#[async_trait]
impl WeatherPort for OpenMeteoWeatherAdapter {
    #[instrument(skip(self))]
    async fn current_observation(&self) -> Result<WeatherObservation, ApplicationError> {
        let data = self
            .client
            .current_observation(self.location.latitude(), self.location.longitude())
            .await
            .map_err(Self::map_error)?;

        Ok(to_observation(data))
    }

    #[instrument(skip(self))]
    async fn hourly_forecast(&self) -> Result<serde_json::Value, ApplicationError> {
        self.client
            .hourly_forecast(self.location.latitude(), self.location.longitude())
            .await
            .map_err(Self::map_error)
    }

    async fn is_available(&self) -> bool {
        self.client
            .is_healthy(self.location.latitude(), self.location.longitude())
            .await
    }
}
