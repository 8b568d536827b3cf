//! Hourly forecast handler

use axum::{Json, extract::State};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Get today's hourly forecast
///
/// The upstream `hourly` block is returned verbatim; the dashboard reads
/// its parallel arrays directly, so no reshaping happens here.
#[instrument(skip(state))]
pub async fn forecast(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let hourly = state.prediction_service.hourly_forecast().await?;
    Ok(Json(hourly))
}
