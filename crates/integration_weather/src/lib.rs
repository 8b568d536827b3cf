//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Forecast API (<https://open-meteo.com>),
//! restricted to the four parameters the PM2.5 model consumes. No API key
//! required.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherConfig, WeatherError};
pub use models::{ApiResponse, ObservationData};
