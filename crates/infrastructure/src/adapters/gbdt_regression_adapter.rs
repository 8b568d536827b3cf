//! GBDT regression adapter - Implements RegressionPort over a serialized
//! gradient-boosted decision tree ensemble

use std::fmt;

use application::{
    error::ApplicationError,
    ports::{ModelMetrics, RegressionPort},
};
use domain::FeatureVector;
use gbdt::decision_tree::{Data, DataVec, PredVec};
use gbdt::gradient_boost::GBDT;
use tracing::{debug, info};

use crate::config::ModelConfig;

/// Adapter for the pre-trained PM2.5 regression model
///
/// The artifact is loaded once at startup and never mutated afterwards;
/// prediction only reads the tree ensemble, so the adapter is freely
/// shared across request tasks.
pub struct GbdtRegressionAdapter {
    model: GBDT,
    metrics: Vec<ModelMetrics>,
    name: String,
}

impl fmt::Debug for GbdtRegressionAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GbdtRegressionAdapter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl GbdtRegressionAdapter {
    /// Load the model artifact named by the configuration
    ///
    /// # Errors
    ///
    /// Returns `ModelUnavailable` if the artifact cannot be read or
    /// decoded. This is fatal: the process must not serve predictions
    /// without a model.
    pub fn load(config: &ModelConfig) -> Result<Self, ApplicationError> {
        let model = GBDT::load_model(&config.path).map_err(|e| {
            ApplicationError::ModelUnavailable(format!("{}: {e}", config.path))
        })?;

        info!(path = %config.path, name = %config.name, "Regression model loaded");

        Ok(Self {
            model,
            metrics: vec![config.metrics()],
            name: config.name.clone(),
        })
    }

    /// Wrap an already-constructed model (used by tests that train a tiny
    /// ensemble in-process)
    #[must_use]
    pub fn from_model(model: GBDT, config: &ModelConfig) -> Self {
        Self {
            model,
            metrics: vec![config.metrics()],
            name: config.name.clone(),
        }
    }
}

impl RegressionPort for GbdtRegressionAdapter {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ApplicationError> {
        #[allow(clippy::cast_possible_truncation)]
        let row = Data::new_test_data(
            features.as_slice().iter().map(|&v| v as f32).collect(),
            None,
        );
        let batch: DataVec = vec![row];
        let predictions: PredVec = self.model.predict(&batch);

        let predicted = predictions
            .first()
            .copied()
            .ok_or_else(|| ApplicationError::Inference("model returned no prediction".to_string()))?;

        debug!(predicted, "Model inference complete");

        Ok(f64::from(predicted))
    }

    fn metrics(&self) -> &[ModelMetrics] {
        &self.metrics
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
