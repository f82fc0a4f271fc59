//! Error types for the cross-currency hybrid model and its products.

use super::correlated::CorrelationError;
use pricer_core::types::{PricingError, SimulationError};
use thiserror::Error;

/// Cross-currency model and product errors.
///
/// Three families are distinguished:
/// - domain errors: invalid construction parameters, rejected before any
///   simulation (`Correlation`, `InvalidParameter`, `UnsupportedCurrency`)
/// - `UnsupportedTime`: a query at a time where the model has no closed-form
///   value; nothing is interpolated
/// - `Simulation`: the underlying simulated process could not deliver a
///   value, propagated unchanged
///
/// # Examples
/// ```
/// use pricer_models::models::hybrid::CrossCurrencyError;
///
/// let err = CrossCurrencyError::UnsupportedTime { time: 0.37 };
/// assert!(err.is_unsupported_time());
/// assert!(!err.is_domain_error());
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CrossCurrencyError {
    /// Correlations cannot be decomposed into unit-norm loadings.
    #[error("Invalid correlations: {0}")]
    Correlation(#[from] CorrelationError),

    /// A model or product parameter is outside its domain.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Currency index other than 0 (domestic) or 1 (foreign).
    #[error("Unsupported currency index {index}: expected 0 (domestic) or 1 (foreign)")]
    UnsupportedCurrency {
        /// The offending index
        index: usize,
    },

    /// Query at a time the model cannot observe.
    #[error("Unsupported observation time {time}: only 0, period start and period end are supported")]
    UnsupportedTime {
        /// The requested time
        time: f64,
    },

    /// The simulated process failed to deliver a value.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl CrossCurrencyError {
    /// Shorthand for [`CrossCurrencyError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors raised while validating construction inputs.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::Correlation(_) | Self::InvalidParameter { .. } | Self::UnsupportedCurrency { .. }
        )
    }

    /// Returns `true` for queries at unsupported observation times.
    pub fn is_unsupported_time(&self) -> bool {
        matches!(self, Self::UnsupportedTime { .. })
    }
}

impl From<CrossCurrencyError> for PricingError {
    fn from(err: CrossCurrencyError) -> Self {
        match err {
            CrossCurrencyError::Correlation(_)
            | CrossCurrencyError::InvalidParameter { .. }
            | CrossCurrencyError::UnsupportedCurrency { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            CrossCurrencyError::UnsupportedTime { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            CrossCurrencyError::Simulation(_) => PricingError::ModelFailure(err.to_string()),
        }
    }
}
