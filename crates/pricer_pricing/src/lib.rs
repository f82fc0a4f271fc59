//! # Pricer Pricing (L3: Monte Carlo Engine)
//!
//! Monte Carlo valuation of cross-currency caplets.
//!
//! This crate provides:
//! - [`rng`]: seeded normal variates for the Brownian drivers
//! - [`mc`]: Brownian increments, log-Euler simulation of lognormal process
//!   models, the simulated cross-currency model and the caplet pricer
//!
//! ## Layer Integration
//!
//! - Layer 1 (`pricer_core`): time grids, `RandomVariable`, error types
//! - Layer 2 (`pricer_models`): the cross-currency model and the caplet
//!
//! ## Logging
//!
//! The engine emits `tracing` events (`debug` for model construction and
//! path generation, `info` for prices). No subscriber is installed; binaries
//! choose one.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::{BrownianMotion, MonteCarloConfig};
//! use pricer_core::types::TimeDiscretization;
//!
//! let config = MonteCarloConfig::builder().n_paths(100).n_steps(10).build().unwrap();
//! let grid = TimeDiscretization::uniform(1.0, config.n_steps()).unwrap();
//! let brownian = BrownianMotion::new(grid, 3, config.n_paths(), config.seed()).unwrap();
//!
//! assert_eq!(brownian.number_of_factors(), 3);
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
