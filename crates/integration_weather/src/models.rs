//! Wire types for the Open-Meteo Forecast API
//!
//! Field names match the upstream query parameters exactly, including the
//! legacy `windspeed_10m` spelling the model was trained against.

use serde::Deserialize;

/// Raw current observation from the API
///
/// Decoding this struct is the schema boundary: a missing field upstream
/// fails here as one typed error instead of surfacing later during
/// feature-vector assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationData {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub windspeed_10m: f64,
    pub surface_pressure: f64,
}

/// Raw API response envelope
///
/// `hourly` stays untyped: the forecast endpoint passes it through to the
/// caller verbatim, so upstream schema additions must survive the trip.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub current: Option<ObservationData>,
    pub hourly: Option<serde_json::Value>,
}
