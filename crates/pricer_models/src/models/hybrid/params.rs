//! Parameters of the single-period cross-currency model.
//!
//! The model covers one accrual period `[T1, T2]` and is fully described by
//! the two zero-coupon bonds maturing at `T2`, the initial values of the
//! three simulated assets, their volatilities and pairwise correlations.
//!
//! # Examples
//!
//! ```
//! use pricer_models::models::hybrid::{CrossCurrencyCorrelations, CrossCurrencyParams};
//!
//! let params = CrossCurrencyParams::builder()
//!     .period(1.0, 2.0)
//!     .zero_bonds(0.98, 0.97)
//!     .initial_forward_rates(0.05, 0.04)
//!     .initial_fx_spot(1.10)
//!     .volatilities(0.2, 0.25, 0.1)
//!     .correlations(CrossCurrencyCorrelations::new(0.3, 0.2, -0.1))
//!     .build()
//!     .unwrap();
//!
//! // FFX(T2; 0) = FX(0) * P_f(T2; 0) / P_d(T2; 0)
//! assert!((params.initial_fx_forward() - 1.10 * 0.97 / 0.98).abs() < 1e-15);
//! assert_eq!(params.accrual(), 1.0);
//! ```

use super::correlated::CrossCurrencyCorrelations;
use super::error::CrossCurrencyError;
use pricer_core::types::times_match;

/// One of the three times at which the model has closed-form observables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationTime {
    /// Valuation date `t = 0`.
    Valuation,
    /// Fixing date of both forward rates, `t = T1`.
    PeriodStart,
    /// Maturity of both zero-coupon bonds, `t = T2`.
    PeriodEnd,
}

impl ObservationTime {
    /// Classifies `time` against the period `[period_start, period_end]`.
    ///
    /// `0` takes precedence over `period_start` when both coincide.
    ///
    /// # Errors
    ///
    /// `UnsupportedTime` for any other time.
    pub fn classify(
        time: f64,
        period_start: f64,
        period_end: f64,
    ) -> Result<Self, CrossCurrencyError> {
        if times_match(time, 0.0) {
            Ok(ObservationTime::Valuation)
        } else if times_match(time, period_start) {
            Ok(ObservationTime::PeriodStart)
        } else if times_match(time, period_end) {
            Ok(ObservationTime::PeriodEnd)
        } else {
            Err(CrossCurrencyError::UnsupportedTime { time })
        }
    }
}

/// Validated cross-currency model parameters.
///
/// Construct through [`CrossCurrencyParams::builder`]. Values are never
/// mutated after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossCurrencyParams {
    period_start: f64,
    period_end: f64,
    domestic_zero_bond: f64,
    foreign_zero_bond: f64,
    initial_domestic_forward_rate: f64,
    initial_foreign_forward_rate: f64,
    initial_fx_forward: f64,
    domestic_volatility: f64,
    foreign_volatility: f64,
    fx_forward_volatility: f64,
    correlations: CrossCurrencyCorrelations<f64>,
}

impl CrossCurrencyParams {
    /// Returns a builder with every field unset.
    pub fn builder() -> CrossCurrencyParamsBuilder {
        CrossCurrencyParamsBuilder::new()
    }

    /// Fixing date `T1` of the forward rates.
    #[inline]
    pub fn period_start(&self) -> f64 {
        self.period_start
    }

    /// Payment date `T2`, maturity of both zero-coupon bonds.
    #[inline]
    pub fn period_end(&self) -> f64 {
        self.period_end
    }

    /// Accrual period length `T2 - T1`.
    #[inline]
    pub fn accrual(&self) -> f64 {
        self.period_end - self.period_start
    }

    /// Domestic zero-coupon bond `P_d(T2; 0)`.
    #[inline]
    pub fn domestic_zero_bond(&self) -> f64 {
        self.domestic_zero_bond
    }

    /// Foreign zero-coupon bond `P_f(T2; 0)`.
    #[inline]
    pub fn foreign_zero_bond(&self) -> f64 {
        self.foreign_zero_bond
    }

    /// Domestic forward rate `L_d(T1, T2; 0)`.
    #[inline]
    pub fn initial_domestic_forward_rate(&self) -> f64 {
        self.initial_domestic_forward_rate
    }

    /// Foreign forward rate `L_f(T1, T2; 0)`.
    #[inline]
    pub fn initial_foreign_forward_rate(&self) -> f64 {
        self.initial_foreign_forward_rate
    }

    /// Forward FX `FFX(T2; 0)`.
    #[inline]
    pub fn initial_fx_forward(&self) -> f64 {
        self.initial_fx_forward
    }

    /// Spot FX implied by the forward: `FFX(T2; 0) * P_d(T2; 0) / P_f(T2; 0)`.
    #[inline]
    pub fn initial_fx_spot(&self) -> f64 {
        self.initial_fx_forward * self.domestic_zero_bond / self.foreign_zero_bond
    }

    /// Volatility of the domestic forward rate.
    #[inline]
    pub fn domestic_volatility(&self) -> f64 {
        self.domestic_volatility
    }

    /// Volatility of the foreign forward rate.
    #[inline]
    pub fn foreign_volatility(&self) -> f64 {
        self.foreign_volatility
    }

    /// Volatility of the forward FX rate.
    #[inline]
    pub fn fx_forward_volatility(&self) -> f64 {
        self.fx_forward_volatility
    }

    /// Pairwise correlations of the three drivers.
    #[inline]
    pub fn correlations(&self) -> &CrossCurrencyCorrelations<f64> {
        &self.correlations
    }

    /// Classifies `time` as one of the three supported observation times.
    pub fn observation(&self, time: f64) -> Result<ObservationTime, CrossCurrencyError> {
        ObservationTime::classify(time, self.period_start, self.period_end)
    }

    /// Checks every parameter.
    ///
    /// Called by the builder; useful again after deserialisation.
    pub fn validate(&self) -> Result<(), CrossCurrencyError> {
        if !(self.period_start.is_finite() && self.period_start >= 0.0) {
            return Err(CrossCurrencyError::invalid(
                "period_start",
                format!("must be finite and non-negative, got {}", self.period_start),
            ));
        }
        if !(self.period_end.is_finite() && self.period_end > self.period_start) {
            return Err(CrossCurrencyError::invalid(
                "period_end",
                format!(
                    "must be finite and after period start {}, got {}",
                    self.period_start, self.period_end
                ),
            ));
        }

        let positive = [
            ("domestic_zero_bond", self.domestic_zero_bond),
            ("foreign_zero_bond", self.foreign_zero_bond),
            (
                "initial_domestic_forward_rate",
                self.initial_domestic_forward_rate,
            ),
            (
                "initial_foreign_forward_rate",
                self.initial_foreign_forward_rate,
            ),
            ("initial_fx_forward", self.initial_fx_forward),
        ];
        for (name, value) in positive {
            // Lognormal state: the log of the initial value must exist
            if !(value.is_finite() && value > 0.0) {
                return Err(CrossCurrencyError::invalid(
                    name,
                    format!("must be finite and positive, got {}", value),
                ));
            }
        }

        let volatilities = [
            ("domestic_volatility", self.domestic_volatility),
            ("foreign_volatility", self.foreign_volatility),
            ("fx_forward_volatility", self.fx_forward_volatility),
        ];
        for (name, value) in volatilities {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CrossCurrencyError::invalid(
                    name,
                    format!("must be finite and non-negative, got {}", value),
                ));
            }
        }

        self.correlations.decompose()?;
        Ok(())
    }
}

/// Builder for [`CrossCurrencyParams`].
///
/// Correlations default to zero; every other field is required. The FX
/// input is either the forward `FFX(T2; 0)` or the spot `FX(0)`, whichever
/// was set last.
#[derive(Clone, Debug, Default)]
pub struct CrossCurrencyParamsBuilder {
    period: Option<(f64, f64)>,
    zero_bonds: Option<(f64, f64)>,
    forward_rates: Option<(f64, f64)>,
    fx: Option<FxInput>,
    volatilities: Option<(f64, f64, f64)>,
    correlations: Option<CrossCurrencyCorrelations<f64>>,
}

#[derive(Clone, Copy, Debug)]
enum FxInput {
    Forward(f64),
    Spot(f64),
}

impl CrossCurrencyParamsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accrual period `[T1, T2]`.
    pub fn period(mut self, period_start: f64, period_end: f64) -> Self {
        self.period = Some((period_start, period_end));
        self
    }

    /// Sets the domestic and foreign zero-coupon bonds maturing at `T2`.
    pub fn zero_bonds(mut self, domestic: f64, foreign: f64) -> Self {
        self.zero_bonds = Some((domestic, foreign));
        self
    }

    /// Sets the initial domestic and foreign forward rates for `[T1, T2]`.
    pub fn initial_forward_rates(mut self, domestic: f64, foreign: f64) -> Self {
        self.forward_rates = Some((domestic, foreign));
        self
    }

    /// Sets the initial forward FX `FFX(T2; 0)`.
    pub fn initial_fx_forward(mut self, fx_forward: f64) -> Self {
        self.fx = Some(FxInput::Forward(fx_forward));
        self
    }

    /// Sets the spot FX `FX(0)`; the forward is derived from the zero bonds.
    pub fn initial_fx_spot(mut self, fx_spot: f64) -> Self {
        self.fx = Some(FxInput::Spot(fx_spot));
        self
    }

    /// Sets the volatilities of the domestic rate, foreign rate and forward FX.
    pub fn volatilities(mut self, domestic: f64, foreign: f64, fx_forward: f64) -> Self {
        self.volatilities = Some((domestic, foreign, fx_forward));
        self
    }

    /// Sets the pairwise driver correlations.
    pub fn correlations(mut self, correlations: CrossCurrencyCorrelations<f64>) -> Self {
        self.correlations = Some(correlations);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for missing or out-of-domain fields,
    /// `Correlation` if the correlations cannot be decomposed.
    pub fn build(self) -> Result<CrossCurrencyParams, CrossCurrencyError> {
        let (period_start, period_end) = self.period.ok_or_else(|| missing("period"))?;
        let (domestic_zero_bond, foreign_zero_bond) =
            self.zero_bonds.ok_or_else(|| missing("zero_bonds"))?;
        let (initial_domestic_forward_rate, initial_foreign_forward_rate) = self
            .forward_rates
            .ok_or_else(|| missing("initial_forward_rates"))?;
        let fx = self.fx.ok_or_else(|| missing("initial_fx_forward"))?;
        let (domestic_volatility, foreign_volatility, fx_forward_volatility) =
            self.volatilities.ok_or_else(|| missing("volatilities"))?;

        let initial_fx_forward = match fx {
            FxInput::Forward(value) => value,
            FxInput::Spot(spot) => spot * foreign_zero_bond / domestic_zero_bond,
        };

        let params = CrossCurrencyParams {
            period_start,
            period_end,
            domestic_zero_bond,
            foreign_zero_bond,
            initial_domestic_forward_rate,
            initial_foreign_forward_rate,
            initial_fx_forward,
            domestic_volatility,
            foreign_volatility,
            fx_forward_volatility,
            correlations: self
                .correlations
                .unwrap_or_else(CrossCurrencyCorrelations::uncorrelated),
        };
        params.validate()?;
        Ok(params)
    }
}

fn missing(name: &'static str) -> CrossCurrencyError {
    CrossCurrencyError::invalid(name, "missing")
}
