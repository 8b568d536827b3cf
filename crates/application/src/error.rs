//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Upstream weather service failed or returned unusable data
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Model inference error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Model artifact could not be loaded; the process cannot serve requests
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error comes from a dependency outside the process
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
