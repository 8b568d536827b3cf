//! Air-quality category derived from a PM2.5 concentration

use serde::{Deserialize, Serialize};

/// Air-quality category bucketed from a PM2.5 value (µg/m³)
///
/// Buckets follow the EPA breakpoint table for 24-hour PM2.5. Each variant
/// covers values up to and including its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// PM2.5 <= 12.0
    Good,
    /// PM2.5 <= 35.4
    Moderate,
    /// PM2.5 <= 55.4
    UnhealthyForSensitiveGroups,
    /// PM2.5 <= 150.4
    Unhealthy,
    /// PM2.5 <= 250.4
    VeryUnhealthy,
    /// PM2.5 > 250.4
    Hazardous,
}

impl AqiCategory {
    /// Classify a PM2.5 concentration into its category
    ///
    /// Total over all finite inputs; negative readings (possible after
    /// jitter on a near-zero prediction) classify as `Good`.
    #[must_use]
    pub fn from_pm25(pm25: f64) -> Self {
        if pm25 <= 12.0 {
            Self::Good
        } else if pm25 <= 35.4 {
            Self::Moderate
        } else if pm25 <= 55.4 {
            Self::UnhealthyForSensitiveGroups
        } else if pm25 <= 150.4 {
            Self::Unhealthy
        } else if pm25 <= 250.4 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    /// Human-readable label used in API responses
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Upper bound of this category's PM2.5 range, if bounded
    #[must_use]
    pub const fn upper_bound(&self) -> Option<f64> {
        match self {
            Self::Good => Some(12.0),
            Self::Moderate => Some(35.4),
            Self::UnhealthyForSensitiveGroups => Some(55.4),
            Self::Unhealthy => Some(150.4),
            Self::VeryUnhealthy => Some(250.4),
            Self::Hazardous => None,
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
