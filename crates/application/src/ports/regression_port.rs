//! Regression model port
//!
//! Interface for the pre-trained PM2.5 regression model. The model is
//! loaded once at process start and treated as immutable shared state;
//! prediction is a synchronous CPU call.

use domain::FeatureVector;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Static descriptor of a trained model
///
/// Reported as-is by the metrics endpoint; these figures come from the
/// offline training pipeline and are never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Model family name
    pub name: String,
    /// Training-time accuracy
    pub accuracy: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Root mean square error
    pub rmse: f64,
}

/// Port for regression model inference
pub trait RegressionPort: Send + Sync {
    /// Predict a PM2.5 concentration from a feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, ApplicationError>;

    /// Static metrics records for the loaded model
    fn metrics(&self) -> &[ModelMetrics];

    /// Name of the loaded model
    fn model_name(&self) -> &str;
}
