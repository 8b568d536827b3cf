//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid geographic coordinates
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// A measurement value is outside its physically meaningful range
    #[error("Invalid measurement for {field}: {value}")]
    InvalidMeasurement { field: String, value: f64 },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid measurement error
    pub fn invalid_measurement(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidMeasurement {
            field: field.into(),
            value,
        }
    }
}
