//! Interest rate derivative instruments.
//!
//! - [`GeneralizedCaplet`]: single-period caplet on a domestic or foreign
//!   forward rate, optionally quanto, paid in advance or in arrears

mod caplet;

pub use caplet::{GeneralizedCaplet, PaymentTiming};
