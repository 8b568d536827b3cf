//! Model input vector

use serde::{Deserialize, Serialize};

use crate::entities::WeatherObservation;

/// Fixed-order input vector consumed by the PM2.5 regression model
///
/// The layout is part of the contract with the trained artifact: position 0
/// is a constant PM2.5 seed, positions 1-4 are the four weather fields in
/// the order temperature, humidity, wind speed, pressure, and positions
/// 5-14 are zero placeholders for model inputs this service does not
/// populate. Reordering any of them breaks predictions silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FeatureVector::LEN]);

impl FeatureVector {
    /// Total number of features the model was trained on
    pub const LEN: usize = 15;

    /// Placeholder PM2.5 seed in position 0
    pub const PM25_SEED: f64 = 50.0;

    /// Number of trailing zero placeholders
    const PADDING: usize = 10;

    /// Build the vector from a weather observation
    #[must_use]
    pub fn from_observation(obs: &WeatherObservation) -> Self {
        let mut features = [0.0; Self::LEN];
        features[0] = Self::PM25_SEED;
        features[1] = obs.temperature;
        features[2] = obs.humidity;
        features[3] = obs.wind_speed;
        features[4] = obs.pressure;
        // features[5..15] stay zero
        debug_assert_eq!(Self::LEN, 5 + Self::PADDING);
        Self(features)
    }

    /// View the features as a slice (single-row matrix semantics)
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
