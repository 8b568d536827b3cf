//! Prediction service - the per-request PM2.5 pipeline
//!
//! Control flow is strictly linear: fetch weather, build the feature
//! vector, predict, post-process, return. Nothing is retained across
//! requests; the model behind `RegressionPort` is the only long-lived
//! state.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use domain::{AqiCategory, FeatureVector, WeatherObservation};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{ModelMetrics, NoiseSource, RegressionPort, WeatherPort},
};

/// Uniform jitter half-widths applied per observation field to simulate
/// sub-interval variability
const TEMPERATURE_JITTER: f64 = 0.5;
const HUMIDITY_JITTER: f64 = 2.0;
const WIND_SPEED_JITTER: f64 = 0.3;
const PRESSURE_JITTER: f64 = 0.8;

/// Uniform jitter half-width applied to the model output on /current
const PREDICTION_JITTER: f64 = 2.0;

/// Scale of the normal noise used for the synthetic hourly series
const HOURLY_NOISE_SCALE: f64 = 2.0;

/// Number of synthetic hourly predictions
const HOURLY_STEPS: i64 = 24;

/// Current conditions: classified air quality plus the jittered weather
/// reading the classification was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// PM2.5 estimate, jittered and rounded to 2 decimals
    pub pm25: f64,
    /// Category bucketed from the jittered estimate
    pub category: AqiCategory,
    /// The jittered observation, rounded to 2 decimals
    pub weather: WeatherObservation,
}

/// One synthetic hourly prediction
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPrediction {
    /// Hour the value is attributed to (UTC)
    pub timestamp: DateTime<Utc>,
    /// Synthetic PM2.5 value
    pub pm25: f64,
}

/// Service assembling weather data and model inference into predictions
pub struct PredictionService {
    weather: Arc<dyn WeatherPort>,
    model: Arc<dyn RegressionPort>,
    noise: Arc<dyn NoiseSource>,
}

impl fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionService")
            .field("model", &self.model.model_name())
            .finish_non_exhaustive()
    }
}

impl PredictionService {
    /// Create a new prediction service
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        model: Arc<dyn RegressionPort>,
        noise: Arc<dyn NoiseSource>,
    ) -> Self {
        Self {
            weather,
            model,
            noise,
        }
    }

    /// Current conditions with a classified air-quality estimate
    ///
    /// The observation is jittered before the feature vector is built, so
    /// the weather returned to the caller and the model input agree with
    /// each other while differing from the raw upstream reading.
    #[instrument(skip(self))]
    pub async fn current_conditions(&self) -> Result<CurrentConditions, ApplicationError> {
        let raw = self.weather.current_observation().await?;
        let observation = self.jitter(raw);

        let features = FeatureVector::from_observation(&observation);
        let predicted = self.model.predict(&features)?;
        let pm25 = round2(
            predicted
                + self
                    .noise
                    .uniform(-PREDICTION_JITTER, PREDICTION_JITTER),
        );
        let category = AqiCategory::from_pm25(pm25);

        debug!(pm25, %category, "Classified current conditions");

        Ok(CurrentConditions {
            pm25,
            category,
            weather: observation.rounded(),
        })
    }

    /// Raw model prediction from the unjittered observation
    ///
    /// No rounding, no classification.
    #[instrument(skip(self))]
    pub async fn predict_single(&self) -> Result<f64, ApplicationError> {
        let observation = self.weather.current_observation().await?;
        let features = FeatureVector::from_observation(&observation);
        let predicted = self.model.predict(&features)?;

        debug!(predicted, "Single prediction");

        Ok(predicted)
    }

    /// Synthetic 24-hour prediction series
    ///
    /// The model is not a sequence model, so this performs one real
    /// prediction and perturbs it independently for each hour with normal
    /// noise. Timestamps increment hourly from the current instant.
    #[instrument(skip(self))]
    pub async fn predict_hourly(&self) -> Result<Vec<HourlyPrediction>, ApplicationError> {
        let single = self.predict_single().await?;
        let start = Utc::now();

        let series = (0..HOURLY_STEPS)
            .map(|hour| HourlyPrediction {
                timestamp: start + Duration::hours(hour),
                pm25: single + self.noise.standard_normal() * HOURLY_NOISE_SCALE,
            })
            .collect();

        Ok(series)
    }

    /// Today's hourly forecast, passed through from upstream unmodified
    #[instrument(skip(self))]
    pub async fn hourly_forecast(&self) -> Result<serde_json::Value, ApplicationError> {
        self.weather.hourly_forecast().await
    }

    /// Static metrics records for the loaded model
    pub fn model_metrics(&self) -> &[ModelMetrics] {
        self.model.metrics()
    }

    /// Check whether the upstream weather service is reachable
    pub async fn is_weather_available(&self) -> bool {
        self.weather.is_available().await
    }

    /// Name of the loaded model
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Apply per-field uniform jitter to an observation
    fn jitter(&self, obs: WeatherObservation) -> WeatherObservation {
        WeatherObservation {
            temperature: obs.temperature
                + self.noise.uniform(-TEMPERATURE_JITTER, TEMPERATURE_JITTER),
            humidity: obs.humidity + self.noise.uniform(-HUMIDITY_JITTER, HUMIDITY_JITTER),
            wind_speed: obs.wind_speed
                + self.noise.uniform(-WIND_SPEED_JITTER, WIND_SPEED_JITTER),
            pressure: obs.pressure + self.noise.uniform(-PRESSURE_JITTER, PRESSURE_JITTER),
        }
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
