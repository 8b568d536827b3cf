//! Regression model configuration.

use application::ports::ModelMetrics;
use serde::{Deserialize, Serialize};

/// Regression model configuration
///
/// The metrics fields describe the offline training run that produced the
/// artifact; they are reported as-is by the metrics endpoint and never
/// recomputed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized model artifact
    #[serde(default = "default_model_path")]
    pub path: String,

    /// Model family name
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Training-time accuracy
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,

    /// Mean absolute error from training
    #[serde(default = "default_mae")]
    pub mae: f64,

    /// Root mean square error from training
    #[serde(default = "default_rmse")]
    pub rmse: f64,
}

impl ModelConfig {
    /// Build the static metrics record reported by the API
    #[must_use]
    pub fn metrics(&self) -> ModelMetrics {
        ModelMetrics {
            name: self.name.clone(),
            accuracy: self.accuracy,
            mae: self.mae,
            rmse: self.rmse,
        }
    }
}

fn default_model_path() -> String {
    "model/pm25_gbdt.model".to_string()
}

fn default_model_name() -> String {
    "RandomForest".to_string()
}

const fn default_accuracy() -> f64 {
    0.88
}

const fn default_mae() -> f64 {
    3.1
}

const fn default_rmse() -> f64 {
    4.7
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            name: default_model_name(),
            accuracy: default_accuracy(),
            mae: default_mae(),
            rmse: default_rmse(),
        }
    }
}
