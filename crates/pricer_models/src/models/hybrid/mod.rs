//! Hybrid cross-currency models.
//!
//! This module provides the three-factor lognormal cross-currency model:
//! - [`CrossCurrencyCorrelations`]: pairwise driver correlations and their
//!   decomposition into independent-factor loadings
//! - [`CrossCurrencyParams`]: validated single-period model parameters
//! - [`LognormalCrossCurrencyProcess`]: drift, factor loadings, FX
//!   reconstruction
//! - [`DomesticBondNumeraire`]: numeraire at `0`, `T1` and `T2`
//! - [`CrossCurrencyModel`]: path-wise queries consumed by products
//!
//! # Example
//!
//! ```
//! use pricer_models::models::hybrid::{
//!     CrossCurrencyCorrelations, CrossCurrencyParams, LognormalCrossCurrencyProcess,
//! };
//!
//! let params = CrossCurrencyParams::builder()
//!     .period(1.0, 2.0)
//!     .zero_bonds(0.98, 0.97)
//!     .initial_forward_rates(0.05, 0.04)
//!     .initial_fx_forward(1.2)
//!     .volatilities(0.2, 0.25, 0.1)
//!     .correlations(CrossCurrencyCorrelations::new(0.3, 0.2, -0.1))
//!     .build()
//!     .unwrap();
//!
//! let model = LognormalCrossCurrencyProcess::new(params).unwrap();
//! assert_eq!(model.observation_times(), [0.0, 1.0, 2.0]);
//! ```

pub mod correlated;
pub mod cross_currency;
pub mod error;
pub mod model;
pub mod numeraire;
pub mod params;

#[cfg(test)]
pub(crate) mod test_support;

pub use correlated::{
    CholeskyFactor, CorrelationError, CorrelationMatrix, CrossCurrencyCorrelations, DOMESTIC,
    FOREIGN, FX_FORWARD,
};
pub use cross_currency::{LognormalCrossCurrencyProcess, NUMBER_OF_COMPONENTS};
pub use error::CrossCurrencyError;
pub use model::{CrossCurrencyModel, Currency};
pub use numeraire::{zero_bond_from_forward, DomesticBondNumeraire};
pub use params::{CrossCurrencyParams, CrossCurrencyParamsBuilder, ObservationTime};
