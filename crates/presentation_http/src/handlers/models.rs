//! Model metrics handler

use application::ports::ModelMetrics;
use axum::{Json, extract::State};

use crate::state::AppState;

/// List metrics for the loaded model
///
/// Returned as a bare array; the figures come from offline training and
/// never change while the server runs.
pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelMetrics>> {
    Json(state.prediction_service.model_metrics().to_vec())
}
