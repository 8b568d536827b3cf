//! Application layer for AeroSense
//!
//! Orchestrates the per-request pipeline (fetch weather, build the feature
//! vector, predict, post-process) behind ports that the infrastructure
//! layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::PredictionService;
