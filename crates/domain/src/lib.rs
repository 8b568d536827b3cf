//! Domain layer for AeroSense
//!
//! Contains the core air-quality vocabulary: value objects, the model input
//! contract, and domain errors. This layer has no I/O dependencies.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
