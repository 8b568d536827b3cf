//! Weather observation snapshot

use serde::{Deserialize, Serialize};

/// The four scalar weather readings the regression model consumes
///
/// Fetched fresh from the upstream service for every request; never cached
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed (upstream unit, km/h by default)
    pub wind_speed: f64,
    /// Surface pressure in hPa
    pub pressure: f64,
}

impl WeatherObservation {
    /// Copy of this observation with every field rounded to 2 decimals
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            temperature: round2(self.temperature),
            humidity: round2(self.humidity),
            wind_speed: round2(self.wind_speed),
            pressure: round2(self.pressure),
        }
    }
}

/// Round to 2 decimal places
#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
