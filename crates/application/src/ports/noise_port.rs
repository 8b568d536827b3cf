//! Noise source port
//!
//! The random perturbations applied by the prediction pipeline go through
//! this interface instead of a process-global generator, so tests can
//! substitute a fixed or seeded source.

/// Port for the bounded random noise used to simulate measurement jitter
pub trait NoiseSource: Send + Sync {
    /// Sample uniformly from the closed interval [lo, hi]
    fn uniform(&self, lo: f64, hi: f64) -> f64;

    /// Sample from the standard normal distribution
    fn standard_normal(&self) -> f64;
}
