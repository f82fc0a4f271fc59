//! Query interface of a simulated cross-currency model.

use super::error::CrossCurrencyError;
use pricer_core::math::RandomVariable;

/// Currency of a rate or payoff leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Currency of the numeraire; no FX conversion.
    Domestic,
    /// Converted to domestic units with the FX rate.
    Foreign,
}

impl Currency {
    /// Maps `0` to `Domestic` and `1` to `Foreign`.
    ///
    /// # Errors
    ///
    /// `UnsupportedCurrency` for any other index.
    pub fn from_index(index: usize) -> Result<Self, CrossCurrencyError> {
        match index {
            0 => Ok(Currency::Domestic),
            1 => Ok(Currency::Foreign),
            _ => Err(CrossCurrencyError::UnsupportedCurrency { index }),
        }
    }

    /// Inverse of [`Currency::from_index`].
    pub fn index(self) -> usize {
        match self {
            Currency::Domestic => 0,
            Currency::Foreign => 1,
        }
    }
}

/// Path-wise observables of a simulated cross-currency model.
///
/// All values are expressed per path and every query fails rather than
/// interpolating when the model has no value at the requested time.
pub trait CrossCurrencyModel {
    /// Simply-compounded forward rate `L(T1, T2; t)` of `currency`.
    fn forward_rate(
        &self,
        currency: Currency,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError>;

    /// Units of domestic currency per unit of `currency` at `time`.
    fn fx_rate(&self, currency: Currency, time: f64) -> Result<RandomVariable, CrossCurrencyError>;

    /// Numeraire `N(t)` in domestic units.
    fn numeraire(&self, time: f64) -> Result<RandomVariable, CrossCurrencyError>;

    /// Accrual period `(T1, T2)` of the modelled forward rates.
    fn period(&self) -> (f64, f64);

    /// Number of simulated paths.
    fn number_of_paths(&self) -> usize;
}
