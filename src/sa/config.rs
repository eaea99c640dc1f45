//! Annealing configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the simulated-annealing tour optimizer.
///
/// The temperature follows a geometric schedule, `T_{k+1} = α · T_k`, applied
/// once per iteration for exactly `max_iterations` iterations.
///
/// # Examples
///
/// ```
/// use u_tour::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling_factor(0.995)
///     .with_max_iterations(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Initial temperature T₀. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Geometric cooling factor α in (0, 1). Higher = slower cooling.
    pub cooling_factor: f64,

    /// Number of neighbor evaluations K.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_factor: 0.995,
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // written so that NaN is rejected too
        if !(self.initial_temperature > 0.0) {
            return Err(ConfigError::NonPositiveTemperature(self.initial_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(ConfigError::CoolingFactorOutOfRange(self.cooling_factor));
        }
        Ok(())
    }
}
