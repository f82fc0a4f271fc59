//! Generalised single-period caplet.
//!
//! A [`GeneralizedCaplet`] pays
//!
//! ```text
//! max(L - K, 0) × FX(T_pay)      (or × 1 if quanto)
//! ```
//!
//! at `T_pay`, where `L` is the forward rate of the selected currency fixed
//! at the period start. The time-`t` value is obtained by numeraire-relative
//! pricing:
//!
//! ```text
//! V(t) = payoff / N(T_pay) × N(t)
//! ```
//!
//! Six variants follow from currency, quanto flag and payment timing:
//!
//! | currency | quanto | pays at | name |
//! |----------|--------|---------|------|
//! | domestic | - | T2 | Caplet Domestic |
//! | foreign | no | T2 | Caplet Foreign |
//! | foreign | yes | T2 | Caplet Quanto |
//! | ... | ... | T1 | ... with In-Advance Payment |
//!
//! # Example
//!
//! ```
//! use pricer_models::instruments::rates::{GeneralizedCaplet, PaymentTiming};
//! use pricer_models::models::hybrid::Currency;
//!
//! let caplet =
//!     GeneralizedCaplet::with_payment_timing(Currency::Foreign, true, 1.0, 2.0, PaymentTiming::InArrears, 0.03)
//!         .unwrap();
//!
//! assert_eq!(caplet.payment_time(), 2.0);
//! assert_eq!(caplet.variant_name(), "Caplet Quanto");
//! ```

use crate::models::hybrid::{CrossCurrencyError, CrossCurrencyModel, Currency};
use pricer_core::math::RandomVariable;
use pricer_core::types::times_match;
use tracing::warn;

/// Payment date of a single-period coupon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentTiming {
    /// Paid at the period start `T1`.
    InAdvance,
    /// Paid at the period end `T2`.
    InArrears,
}

/// Caplet on a domestic or foreign forward rate, optionally quanto.
///
/// Deserialisation goes through [`GeneralizedCaplet::new`], so a
/// deserialised caplet satisfies the same rules as a constructed one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CapletFields"))]
pub struct GeneralizedCaplet {
    currency: Currency,
    is_quanto: bool,
    fixing_time: f64,
    period_start: f64,
    period_end: f64,
    payment_time: f64,
    strike: f64,
}

/// Unchecked wire form of [`GeneralizedCaplet`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CapletFields {
    currency: Currency,
    is_quanto: bool,
    fixing_time: f64,
    period_start: f64,
    period_end: f64,
    payment_time: f64,
    strike: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CapletFields> for GeneralizedCaplet {
    type Error = CrossCurrencyError;

    fn try_from(fields: CapletFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.currency,
            fields.is_quanto,
            fields.fixing_time,
            fields.period_start,
            fields.period_end,
            fields.payment_time,
            fields.strike,
        )
    }
}

impl GeneralizedCaplet {
    /// Creates a caplet.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency of the forward rate and of the payoff
    /// * `is_quanto` - Pay the foreign payoff in domestic units without FX
    ///   conversion; has no effect for a domestic caplet
    /// * `fixing_time` - Fixing of the forward rate, must equal `period_start`
    /// * `period_start` - Start `T1` of the accrual period
    /// * `period_end` - End `T2` of the accrual period
    /// * `payment_time` - Either `period_start` or `period_end`
    /// * `strike` - Strike rate (any finite value)
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if any of the rules above is violated.
    pub fn new(
        currency: Currency,
        is_quanto: bool,
        fixing_time: f64,
        period_start: f64,
        period_end: f64,
        payment_time: f64,
        strike: f64,
    ) -> Result<Self, CrossCurrencyError> {
        if !(period_start.is_finite() && period_start >= 0.0) {
            return Err(CrossCurrencyError::invalid(
                "period_start",
                format!("must be finite and non-negative, got {}", period_start),
            ));
        }
        if !(period_end.is_finite() && period_end > period_start) {
            return Err(CrossCurrencyError::invalid(
                "period_end",
                format!("must be after period start {}, got {}", period_start, period_end),
            ));
        }
        if !times_match(fixing_time, period_start) {
            return Err(CrossCurrencyError::invalid(
                "fixing_time",
                format!("must equal period start {}, got {}", period_start, fixing_time),
            ));
        }
        if !(times_match(payment_time, period_start) || times_match(payment_time, period_end)) {
            return Err(CrossCurrencyError::invalid(
                "payment_time",
                format!(
                    "must equal period start {} or period end {}, got {}",
                    period_start, period_end, payment_time
                ),
            ));
        }
        if !strike.is_finite() {
            return Err(CrossCurrencyError::invalid(
                "strike",
                format!("must be finite, got {}", strike),
            ));
        }

        if is_quanto && currency == Currency::Domestic {
            warn!("Quanto flag has no effect on a domestic caplet");
        }

        Ok(Self {
            currency,
            is_quanto,
            fixing_time,
            period_start,
            period_end,
            payment_time,
            strike,
        })
    }

    /// Creates a caplet fixing at `period_start` and paying as `timing` says.
    pub fn with_payment_timing(
        currency: Currency,
        is_quanto: bool,
        period_start: f64,
        period_end: f64,
        timing: PaymentTiming,
        strike: f64,
    ) -> Result<Self, CrossCurrencyError> {
        let payment_time = match timing {
            PaymentTiming::InAdvance => period_start,
            PaymentTiming::InArrears => period_end,
        };
        Self::new(
            currency,
            is_quanto,
            period_start,
            period_start,
            period_end,
            payment_time,
            strike,
        )
    }

    /// Currency of the underlying forward rate.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns `true` if the FX conversion is suppressed.
    #[inline]
    pub fn is_quanto(&self) -> bool {
        self.is_quanto
    }

    /// Fixing time of the forward rate.
    #[inline]
    pub fn fixing_time(&self) -> f64 {
        self.fixing_time
    }

    /// Start of the accrual period.
    #[inline]
    pub fn period_start(&self) -> f64 {
        self.period_start
    }

    /// End of the accrual period.
    #[inline]
    pub fn period_end(&self) -> f64 {
        self.period_end
    }

    /// Payment time.
    #[inline]
    pub fn payment_time(&self) -> f64 {
        self.payment_time
    }

    /// Strike rate.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Whether the caplet pays at the start or the end of the period.
    pub fn payment_timing(&self) -> PaymentTiming {
        if times_match(self.payment_time, self.period_start) {
            PaymentTiming::InAdvance
        } else {
            PaymentTiming::InArrears
        }
    }

    /// Descriptive name of the caplet variant.
    pub fn variant_name(&self) -> String {
        let base = match (self.currency, self.is_quanto) {
            (Currency::Domestic, _) => "Caplet Domestic",
            (Currency::Foreign, false) => "Caplet Foreign",
            (Currency::Foreign, true) => "Caplet Quanto",
        };
        match self.payment_timing() {
            PaymentTiming::InArrears => base.to_string(),
            PaymentTiming::InAdvance => format!("{} with In-Advance Payment", base),
        }
    }

    /// Undiscounted payoff at the payment time, in domestic units per path.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the caplet period differs from the model's.
    pub fn payoff<M: CrossCurrencyModel>(
        &self,
        model: &M,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        self.check_period(model)?;
        let forward_rate = model.forward_rate(self.currency, self.fixing_time)?;
        let intrinsic = forward_rate.sub_scalar(self.strike).floor(0.0);

        if self.is_quanto {
            return Ok(intrinsic);
        }
        let fx = model.fx_rate(self.currency, self.payment_time)?;
        Ok(intrinsic.mult(&fx)?)
    }

    /// Path-wise value at `evaluation_time`.
    ///
    /// Averaging over paths is left to the caller.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the caplet period differs from the model's
    /// - `UnsupportedTime` if `evaluation_time` is not a numeraire date
    /// - any error raised by the model queries
    pub fn value<M: CrossCurrencyModel>(
        &self,
        evaluation_time: f64,
        model: &M,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        let payoff = self.payoff(model)?;
        let numeraire_at_payment = model.numeraire(self.payment_time)?;
        let numeraire_at_evaluation = model.numeraire(evaluation_time)?;

        Ok(payoff
            .div(&numeraire_at_payment)?
            .mult(&numeraire_at_evaluation)?)
    }

    fn check_period<M: CrossCurrencyModel>(&self, model: &M) -> Result<(), CrossCurrencyError> {
        let (model_start, model_end) = model.period();
        if times_match(self.period_start, model_start) && times_match(self.period_end, model_end) {
            return Ok(());
        }
        Err(CrossCurrencyError::invalid(
            "period",
            format!(
                "caplet period [{}, {}] does not match model period [{}, {}]",
                self.period_start, self.period_end, model_start, model_end
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hybrid::test_support::FrozenModel;
    use approx::assert_relative_eq;

    fn caplet(currency: Currency, is_quanto: bool, timing: PaymentTiming) -> GeneralizedCaplet {
        GeneralizedCaplet::with_payment_timing(currency, is_quanto, 1.0, 2.0, timing, 0.03).unwrap()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_valid() {
        let caplet =
            GeneralizedCaplet::new(Currency::Foreign, false, 1.0, 1.0, 2.0, 1.0, -0.01).unwrap();
        assert_eq!(caplet.currency(), Currency::Foreign);
        assert!(!caplet.is_quanto());
        assert_eq!(caplet.fixing_time(), 1.0);
        assert_eq!(caplet.period_start(), 1.0);
        assert_eq!(caplet.period_end(), 2.0);
        assert_eq!(caplet.strike(), -0.01);
        assert_eq!(caplet.payment_timing(), PaymentTiming::InAdvance);
    }

    #[test]
    fn test_fixing_must_equal_period_start() {
        let err =
            GeneralizedCaplet::new(Currency::Domestic, false, 0.5, 1.0, 2.0, 2.0, 0.03).unwrap_err();
        assert!(matches!(
            err,
            CrossCurrencyError::InvalidParameter {
                name: "fixing_time",
                ..
            }
        ));
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_payment_must_be_period_boundary() {
        let err =
            GeneralizedCaplet::new(Currency::Domestic, false, 1.0, 1.0, 2.0, 1.5, 0.03).unwrap_err();
        assert!(matches!(
            err,
            CrossCurrencyError::InvalidParameter {
                name: "payment_time",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_period_and_strike() {
        assert!(GeneralizedCaplet::new(Currency::Domestic, false, 2.0, 2.0, 1.0, 1.0, 0.03).is_err());
        assert!(
            GeneralizedCaplet::new(Currency::Domestic, false, 1.0, 1.0, 2.0, 2.0, f64::NAN).is_err()
        );
    }

    #[test]
    fn test_variant_names() {
        use PaymentTiming::*;
        let cases = [
            (Currency::Domestic, false, InArrears, "Caplet Domestic"),
            (Currency::Foreign, false, InArrears, "Caplet Foreign"),
            (Currency::Foreign, true, InArrears, "Caplet Quanto"),
            (
                Currency::Domestic,
                false,
                InAdvance,
                "Caplet Domestic with In-Advance Payment",
            ),
            (
                Currency::Foreign,
                false,
                InAdvance,
                "Caplet Foreign with In-Advance Payment",
            ),
            (
                Currency::Foreign,
                true,
                InAdvance,
                "Caplet Quanto with In-Advance Payment",
            ),
        ];
        for (currency, is_quanto, timing, name) in cases {
            assert_eq!(caplet(currency, is_quanto, timing).variant_name(), name);
        }
    }

    // ========================================
    // Valuation Tests
    // ========================================

    #[test]
    fn test_domestic_deterministic_value() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        let value = caplet(Currency::Domestic, true, PaymentTiming::InArrears)
            .value(0.0, &model)
            .unwrap();
        assert_relative_eq!(value.get(0), 0.0196, epsilon = 1e-15);
    }

    #[test]
    fn test_domestic_quanto_equals_domestic() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        for timing in [PaymentTiming::InAdvance, PaymentTiming::InArrears] {
            let plain = caplet(Currency::Domestic, false, timing)
                .value(0.0, &model)
                .unwrap();
            let quanto = caplet(Currency::Domestic, true, timing)
                .value(0.0, &model)
                .unwrap();
            assert_eq!(plain, quanto);
        }
    }

    #[test]
    fn test_domestic_in_advance_discounts_to_fixing() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        let value = caplet(Currency::Domestic, false, PaymentTiming::InAdvance)
            .value(0.0, &model)
            .unwrap();
        // N(T1) = 1 / 1.05
        assert_relative_eq!(value.get(0), 0.02 * 1.05 * 0.98, epsilon = 1e-15);
    }

    #[test]
    fn test_foreign_value_converts_with_fx() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);

        let in_arrears = caplet(Currency::Foreign, false, PaymentTiming::InArrears)
            .value(0.0, &model)
            .unwrap();
        assert_relative_eq!(in_arrears.get(0), 0.01 * 1.2 * 0.98, epsilon = 1e-15);

        let in_advance = caplet(Currency::Foreign, false, PaymentTiming::InAdvance)
            .value(0.0, &model)
            .unwrap();
        let fx_at_fixing = 1.2 * 1.04 / 1.05;
        assert_relative_eq!(
            in_advance.get(0),
            0.01 * fx_at_fixing * 1.05 * 0.98,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_foreign_quanto_ignores_fx() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        let value = caplet(Currency::Foreign, true, PaymentTiming::InArrears)
            .value(0.0, &model)
            .unwrap();
        assert_relative_eq!(value.get(0), 0.01 * 0.98, epsilon = 1e-15);
    }

    #[test]
    fn test_out_of_the_money_is_zero() {
        let model = FrozenModel::new(0.98, 0.97, [0.01, 0.02, 1.2]);
        for currency in [Currency::Domestic, Currency::Foreign] {
            let value = caplet(currency, false, PaymentTiming::InArrears)
                .value(0.0, &model)
                .unwrap();
            assert_eq!(value.get(0), 0.0);
        }
    }

    #[test]
    fn test_value_at_payment_time_is_payoff() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        let caplet = caplet(Currency::Foreign, false, PaymentTiming::InArrears);
        let at_payment = caplet.value(2.0, &model).unwrap();
        let payoff = caplet.payoff(&model).unwrap();
        assert_relative_eq!(at_payment.get(0), payoff.get(0), epsilon = 1e-15);
    }

    #[test]
    fn test_unsupported_evaluation_time() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        let err = caplet(Currency::Domestic, false, PaymentTiming::InArrears)
            .value(0.37, &model)
            .unwrap_err();
        assert_eq!(err, CrossCurrencyError::UnsupportedTime { time: 0.37 });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let caplet = caplet(Currency::Foreign, true, PaymentTiming::InAdvance);
        let json = serde_json::to_string(&caplet).unwrap();
        assert_eq!(serde_json::from_str::<GeneralizedCaplet>(&json).unwrap(), caplet);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise_rejects_invalid_caplet() {
        let fixing_before_start = r#"{"currency":"Domestic","is_quanto":false,"fixing_time":0.5,
            "period_start":1.0,"period_end":2.0,"payment_time":2.0,"strike":0.03}"#;
        let err = serde_json::from_str::<GeneralizedCaplet>(fixing_before_start).unwrap_err();
        assert!(err.to_string().contains("fixing_time"));

        let payment_mid_period = r#"{"currency":"Foreign","is_quanto":true,"fixing_time":1.0,
            "period_start":1.0,"period_end":2.0,"payment_time":1.5,"strike":0.03}"#;
        assert!(serde_json::from_str::<GeneralizedCaplet>(payment_mid_period).is_err());
    }

    #[test]
    fn test_period_must_match_model() {
        let model = FrozenModel::new(0.98, 0.97, [0.05, 0.04, 1.2]);
        let longer = GeneralizedCaplet::new(Currency::Domestic, false, 1.0, 1.0, 3.0, 1.0, 0.03)
            .unwrap();
        assert!(matches!(
            longer.value(0.0, &model),
            Err(CrossCurrencyError::InvalidParameter { name: "period", .. })
        ));
        assert!(longer.payoff(&model).unwrap_err().is_domain_error());

        let within_tolerance =
            GeneralizedCaplet::new(Currency::Domestic, false, 1.0, 1.0, 2.0 + 1e-12, 2.0, 0.03)
                .unwrap();
        assert!(within_tolerance.value(0.0, &model).is_ok());
    }
}
