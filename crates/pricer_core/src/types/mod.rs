//! Core time and error types.
//!
//! This module provides:
//! - `time_grid`: Simulation time discretisation with exact point lookup
//! - `error`: Structured error types for pricing and simulation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`TimeDiscretization`], [`times_match`], [`TIME_TOLERANCE`] from `time_grid`
//! - [`PricingError`], [`SimulationError`] from `error`

pub mod error;
pub mod time_grid;

// Re-export commonly used types at module level
pub use error::{PricingError, SimulationError};
pub use time_grid::{times_match, TimeDiscretization, TIME_TOLERANCE};
