//! Prediction handlers

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Single prediction response
#[derive(Debug, Serialize)]
pub struct SinglePredictionResponse {
    pub pm25_prediction: f64,
}

/// Raw PM2.5 prediction from the current observation
#[instrument(skip(state))]
pub async fn predict_single(
    State(state): State<AppState>,
) -> Result<Json<SinglePredictionResponse>, ApiError> {
    let pm25_prediction = state.prediction_service.predict_single().await?;
    Ok(Json(SinglePredictionResponse { pm25_prediction }))
}

/// Multi-step prediction response
///
/// Each entry serializes as a `[timestamp, value]` pair.
#[derive(Debug, Serialize)]
pub struct MultiPredictionResponse {
    pub predictions: Vec<(DateTime<Utc>, f64)>,
}

/// Simulated 24-hour PM2.5 series
#[instrument(skip(state))]
pub async fn predict_multi(
    State(state): State<AppState>,
) -> Result<Json<MultiPredictionResponse>, ApiError> {
    let series = state.prediction_service.predict_hourly().await?;

    Ok(Json(MultiPredictionResponse {
        predictions: series.into_iter().map(|p| (p.timestamp, p.pm25)).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn single_prediction_serializes_flat() {
        let resp = SinglePredictionResponse {
            pm25_prediction: 47.3,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["pm25_prediction"], 47.3);
    }

    #[test]
    fn multi_prediction_entries_are_pairs() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 29, 12, 0, 0).unwrap();
        let resp = MultiPredictionResponse {
            predictions: vec![(ts, 47.3), (ts, 49.1)],
        };
        let json = serde_json::to_value(&resp).unwrap();
        let first = &json["predictions"][0];
        assert!(first.is_array());
        assert_eq!(first[1], 47.3);
        assert!(first[0].as_str().unwrap().starts_with("2025-08-29T12:00:00"));
    }
}
