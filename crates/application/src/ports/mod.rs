//! Ports implemented by the infrastructure layer

mod noise_port;
mod regression_port;
mod weather_port;

pub use noise_port::NoiseSource;
pub use regression_port::{ModelMetrics, RegressionPort};
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use weather_port::MockWeatherPort;
