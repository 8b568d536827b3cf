//! Domain entities

mod weather_observation;

pub use weather_observation::WeatherObservation;
