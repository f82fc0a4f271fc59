//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `SimulationError`: Errors raised by path simulation and path-wise algebra

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `ModelFailure`: Model assumptions violated
/// - `UnsupportedInstrument`: Instrument type not supported by model
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative zero bond price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative zero bond price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Model failed to produce valid result
    ModelFailure(String),

    /// Instrument type not supported
    UnsupportedInstrument(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::ModelFailure(msg) => write!(f, "Model failure: {}", msg),
            PricingError::UnsupportedInstrument(msg) => {
                write!(f, "Unsupported instrument: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Path simulation errors.
///
/// Raised when a simulated process cannot deliver a value: the requested
/// time is not on the simulation grid, an index is out of range, or two
/// path-wise quantities disagree on the number of paths.
///
/// Monte Carlo simulation is deterministic for a fixed seed, so these errors
/// are never retried; they are propagated unchanged to the caller.
///
/// # Examples
/// ```
/// use pricer_core::types::SimulationError;
///
/// let err = SimulationError::TimeNotInGrid { time: 0.37 };
/// assert!(format!("{}", err).contains("0.37"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimulationError {
    /// Requested time is not a point of the time discretisation.
    #[error("Time {time} is not part of the time discretisation")]
    TimeNotInGrid {
        /// The requested time
        time: f64,
    },

    /// Time index outside the simulated grid.
    #[error("Time index {index} out of range: grid has {len} points")]
    TimeIndexOutOfRange {
        /// The requested time index
        index: usize,
        /// Number of grid points
        len: usize,
    },

    /// Component index outside the simulated state vector.
    #[error("Component {component} out of range: process has {components} components")]
    ComponentOutOfRange {
        /// The requested component
        component: usize,
        /// Number of components of the process
        components: usize,
    },

    /// Factor index outside the Brownian driver.
    #[error("Factor {factor} out of range: driver has {factors} factors")]
    FactorOutOfRange {
        /// The requested factor
        factor: usize,
        /// Number of independent factors
        factors: usize,
    },

    /// Two path-wise quantities carry different numbers of paths.
    #[error("Path count mismatch: expected {expected}, got {got}")]
    PathCountMismatch {
        /// Expected number of paths
        expected: usize,
        /// Number of paths found
        got: usize,
    },

    /// The time discretisation is malformed.
    #[error("Invalid time discretisation: {0}")]
    InvalidGrid(String),
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        PricingError::ModelFailure(err.to_string())
    }
}
