//! Application state shared across handlers

use std::sync::Arc;

use application::PredictionService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Prediction service driving every endpoint
    pub prediction_service: Arc<PredictionService>,
}
