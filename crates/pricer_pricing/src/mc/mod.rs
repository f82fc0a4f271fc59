//! Monte Carlo engine for the cross-currency model.
//!
//! # Architecture
//!
//! ```text
//! CrossCurrencyPricer
//! ├── MonteCarloConfig         (paths, steps, seed)
//! └── CrossCurrencySimulation  (CrossCurrencyModel queries)
//!     └── EulerScheme          (log-Euler paths of the model)
//!         └── BrownianMotion   (independent increments, PricerRng)
//! ```
//!
//! Path-wise arithmetic runs through `pricer_core::math::RandomVariable`,
//! whose elementwise kernels are parallelised across paths with Rayon. The
//! Euler recursion itself is sequential in time.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{GeneralizedCaplet, PaymentTiming};
//! use pricer_models::models::hybrid::{CrossCurrencyCorrelations, CrossCurrencyParams, Currency};
//! use pricer_pricing::mc::{CrossCurrencyPricer, MonteCarloConfig};
//!
//! let params = CrossCurrencyParams::builder()
//!     .period(1.0, 2.0)
//!     .zero_bonds(0.98, 0.97)
//!     .initial_forward_rates(0.05, 0.04)
//!     .initial_fx_spot(1.1)
//!     .volatilities(0.2, 0.25, 0.1)
//!     .correlations(CrossCurrencyCorrelations::new(0.3, 0.2, -0.1))
//!     .build()
//!     .unwrap();
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(5_000)
//!     .n_steps(10)
//!     .seed(3141)
//!     .build()
//!     .unwrap();
//! let pricer = CrossCurrencyPricer::new(config).unwrap();
//!
//! let caplet = GeneralizedCaplet::with_payment_timing(
//!     Currency::Foreign,
//!     true,
//!     1.0,
//!     2.0,
//!     PaymentTiming::InArrears,
//!     0.04,
//! )
//! .unwrap();
//!
//! let result = pricer.price(&params, &caplet).unwrap();
//! println!("{}: {} +/- {}", caplet.variant_name(), result.price, result.confidence_95());
//! ```

mod brownian;
mod config;
mod cross_currency;
mod error;
mod euler;
mod pricer;

pub use brownian::BrownianMotion;
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_SEED, MAX_PATHS, MAX_STEPS};
pub use cross_currency::CrossCurrencySimulation;
pub use error::{ConfigError, PricerError};
pub use euler::EulerScheme;
pub use pricer::{CrossCurrencyPricer, PricingResult};
