//! Domestic zero-coupon bond numeraire.
//!
//! The numeraire is the domestic bond maturing at `T2`. It has closed-form
//! values at three times only:
//!
//! | time | value |
//! |------|-------|
//! | `0`  | `P_d(T2; 0)` |
//! | `T1` | `1 / (1 + L_d(T1, T2; T1) (T2 - T1))` |
//! | `T2` | `1` |
//!
//! The `T1` value is reconstructed from the simulated domestic forward rate
//! at its own fixing date. Every other time is rejected.

use super::correlated::DOMESTIC;
use super::error::CrossCurrencyError;
use super::params::{CrossCurrencyParams, ObservationTime};
use crate::models::process::SimulatedProcess;
use pricer_core::math::RandomVariable;

/// Zero-coupon bond `P(T2; T1)` implied by a simply-compounded forward
/// rate fixed at `T1`: `1 / (1 + L (T2 - T1))`.
pub fn zero_bond_from_forward(forward_rate: &RandomVariable, accrual: f64) -> RandomVariable {
    forward_rate.apply(|rate| 1.0 / (1.0 + rate * accrual))
}

/// Numeraire given by the domestic zero-coupon bond maturing at `T2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomesticBondNumeraire {
    period_start: f64,
    period_end: f64,
    zero_bond: f64,
}

impl DomesticBondNumeraire {
    /// Creates the numeraire for the period and domestic bond of `params`.
    pub fn new(params: &CrossCurrencyParams) -> Self {
        Self {
            period_start: params.period_start(),
            period_end: params.period_end(),
            zero_bond: params.domestic_zero_bond(),
        }
    }

    /// Numeraire at `time`, read from `process` where needed.
    ///
    /// # Errors
    ///
    /// - `UnsupportedTime` unless `time` is `0`, `T1` or `T2`
    /// - `Simulation` if the domestic forward rate is not available at `T1`
    pub fn at<P: SimulatedProcess>(
        &self,
        process: &P,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        match ObservationTime::classify(time, self.period_start, self.period_end)? {
            ObservationTime::Valuation => Ok(RandomVariable::deterministic(self.zero_bond)),
            ObservationTime::PeriodStart => {
                let forward = process.value_at(self.period_start, DOMESTIC)?;
                Ok(zero_bond_from_forward(
                    forward,
                    self.period_end - self.period_start,
                ))
            }
            ObservationTime::PeriodEnd => Ok(RandomVariable::deterministic(1.0)),
        }
    }
}
