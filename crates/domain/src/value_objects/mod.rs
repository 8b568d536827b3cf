//! Domain value objects

mod aqi_category;
mod feature_vector;
mod geo_location;

pub use aqi_category::AqiCategory;
pub use feature_vector::FeatureVector;
pub use geo_location::{GeoLocation, InvalidCoordinates};
