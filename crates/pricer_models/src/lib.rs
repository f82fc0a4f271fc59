//! # Pricer Models (L2: Business Logic)
//!
//! Stochastic models and instruments for cross-currency interest rate
//! options.
//!
//! This crate provides:
//! - Correlation decomposition for multi-factor lognormal models
//! - The three-factor lognormal cross-currency model (domestic rate,
//!   foreign rate, forward FX) with its numeraire and FX reconstruction
//! - The `LognormalProcessModel` / `SimulatedProcess` traits implemented by
//!   discretisation schemes in `pricer_pricing`
//! - The generalised caplet (domestic, foreign and quanto; paid in advance
//!   or in arrears)
//! - Black-formula reference prices for the caplet variants
//!
//! ## Design Principles
//!
//! - **Generic injection** of models into schemes and of simulations into
//!   products; no runtime type inspection
//! - **Fail fast**: invalid parameters are rejected at construction and
//!   unsupported observation times are errors, never interpolated
//! - **Path-wise values** via `pricer_core::math::RandomVariable`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
