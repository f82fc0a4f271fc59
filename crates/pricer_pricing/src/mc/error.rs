//! Error types for the Monte Carlo engine.
//!
//! - [`ConfigError`]: invalid engine configuration, raised at construction
//! - [`PricerError`]: any failure of a simulate-and-price run

use super::config::{MAX_PATHS, MAX_STEPS};
use pricer_core::types::{PricingError, SimulationError};
use pricer_models::models::hybrid::CrossCurrencyError;
use thiserror::Error;

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),
    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Failure of a Monte Carlo run.
///
/// Wraps the error of the stage that failed without altering it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricerError {
    /// Invalid engine configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Invalid model or product, or an unsupported observation time.
    #[error(transparent)]
    Model(#[from] CrossCurrencyError),
    /// The path simulation could not deliver a value.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl From<PricerError> for PricingError {
    fn from(err: PricerError) -> Self {
        match err {
            PricerError::Config(config) => PricingError::InvalidInput(config.to_string()),
            PricerError::Model(model) => model.into(),
            PricerError::Simulation(simulation) => simulation.into(),
        }
    }
}
