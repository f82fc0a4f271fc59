//! Financial instruments valued on simulated models.
//!
//! Products depend only on the [`CrossCurrencyModel`] query trait, so any
//! simulation that can answer forward-rate, FX and numeraire queries can
//! value them.
//!
//! [`CrossCurrencyModel`]: crate::models::hybrid::CrossCurrencyModel

pub mod rates;

pub use rates::{GeneralizedCaplet, PaymentTiming};
