//! Concrete implementations of the application ports

mod gbdt_regression_adapter;
mod open_meteo_adapter;
mod rng_noise;

pub use gbdt_regression_adapter::GbdtRegressionAdapter;
pub use open_meteo_adapter::OpenMeteoWeatherAdapter;
pub use rng_noise::StdRngNoise;
