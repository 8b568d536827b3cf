//! HTTP request handlers

pub mod air_quality;
pub mod forecast;
pub mod health;
pub mod models;
pub mod predict;
