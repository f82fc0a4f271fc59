//! # pricer_core: Numerical Foundation for Cross-Currency Monte Carlo
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the 3-layer architecture, providing:
//! - Generic floating-point trait (`traits::Float`)
//! - Path-wise random variable algebra (`math::random_variable`)
//! - Simulation time grids: `TimeDiscretization` (`types::time_grid`)
//! - Error types: `PricingError`, `SimulationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - rayon: Parallel elementwise kernels over path ensembles
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::RandomVariable;
//! use pricer_core::types::TimeDiscretization;
//!
//! let grid = TimeDiscretization::uniform(2.0, 8).unwrap();
//! assert_eq!(grid.time_index(1.0).unwrap(), 4);
//!
//! let forward = RandomVariable::from_values(vec![0.04, 0.06]);
//! let bond = forward.mult_scalar(1.0).add_scalar(1.0).invert();
//! assert!((bond.get(0) - 1.0 / 1.04).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `TimeDiscretization` and `SimulationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
