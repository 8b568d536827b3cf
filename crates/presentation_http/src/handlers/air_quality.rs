//! Current conditions handler

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Current conditions response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentResponse {
    pub air_quality: AirQualityBlock,
    pub weather: WeatherBlock,
}

/// Classified air-quality estimate
#[derive(Debug, Serialize)]
pub struct AirQualityBlock {
    pub pm25: f64,
    pub status: String,
}

/// Weather measurements the estimate was derived from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherBlock {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
}

/// Get current weather and the model's PM2.5 estimate
#[instrument(skip(state))]
pub async fn current(State(state): State<AppState>) -> Result<Json<CurrentResponse>, ApiError> {
    let conditions = state.prediction_service.current_conditions().await?;

    Ok(Json(CurrentResponse {
        air_quality: AirQualityBlock {
            pm25: conditions.pm25,
            status: conditions.category.label().to_string(),
        },
        weather: WeatherBlock {
            temperature: conditions.weather.temperature,
            humidity: conditions.weather.humidity,
            wind_speed: conditions.weather.wind_speed,
            pressure: conditions.weather.pressure,
        },
    }))
}
