//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Dashboard-facing API under /api, probes at the root
    let api = Router::new()
        .route("/current", get(handlers::air_quality::current))
        .route("/forecast", get(handlers::forecast::forecast))
        .route("/models", get(handlers::models::list_models))
        .route("/predict/single", get(handlers::predict::predict_single))
        .route("/predict/multi", get(handlers::predict::predict_multi));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(state)
}
