//! # Random Number Generation
//!
//! Seeded pseudo-random generation for the Brownian drivers of the Monte
//! Carlo engine.
//!
//! - **Reproducibility**: a seed fully determines every draw
//! - **Batch filling**: draws are written into pre-allocated `&mut [f64]`
//!   slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Brownian increments over a step of length 0.25
//! let mut increments = vec![0.0; 1000];
//! rng.fill_normal_scaled(&mut increments, 0.25_f64.sqrt());
//! ```

mod prng;

pub use prng::PricerRng;
