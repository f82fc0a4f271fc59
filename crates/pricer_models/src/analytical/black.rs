//! Black formula and the caplet prices it gives under the lognormal
//! cross-currency model.
//!
//! Prices are per unit notional and, like
//! [`GeneralizedCaplet`](crate::instruments::GeneralizedCaplet), exclude the
//! accrual factor.

use super::distributions::norm_cdf;
use crate::models::hybrid::{CrossCurrencyParams, Currency};

/// Undiscounted Black call on a lognormal forward.
///
/// Degenerate inputs fall back to the limit: a non-positive strike is
/// always exercised and zero total variance gives the intrinsic value.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_call;
///
/// // At the money: F (2Φ(σ√T / 2) - 1)
/// let price = black_call(0.05, 0.05, 0.2, 1.0);
/// assert!((price - 0.003_982_78).abs() < 1e-7);
/// ```
pub fn black_call(forward: f64, strike: f64, volatility: f64, expiry: f64) -> f64 {
    if strike <= 0.0 {
        return forward - strike;
    }
    let total_vol = volatility * expiry.max(0.0).sqrt();
    if total_vol <= 0.0 {
        return (forward - strike).max(0.0);
    }
    let d1 = ((forward / strike).ln() + 0.5 * total_vol * total_vol) / total_vol;
    let d2 = d1 - total_vol;
    forward * norm_cdf(d1) - strike * norm_cdf(d2)
}

/// Time-0 price of a caplet paid in arrears at `T2`.
///
/// `is_quanto` only affects foreign caplets.
///
/// # Examples
/// ```
/// use pricer_models::analytical::in_arrears_caplet_price;
/// use pricer_models::models::hybrid::{CrossCurrencyParams, Currency};
///
/// let params = CrossCurrencyParams::builder()
///     .period(1.0, 2.0)
///     .zero_bonds(0.98, 0.97)
///     .initial_forward_rates(0.05, 0.04)
///     .initial_fx_forward(1.2)
///     .volatilities(0.0, 0.0, 0.0)
///     .build()
///     .unwrap();
///
/// let price = in_arrears_caplet_price(&params, Currency::Domestic, false, 0.03);
/// assert!((price - 0.0196).abs() < 1e-15);
/// ```
pub fn in_arrears_caplet_price(
    params: &CrossCurrencyParams,
    currency: Currency,
    is_quanto: bool,
    strike: f64,
) -> f64 {
    let discount = params.domestic_zero_bond();
    let expiry = params.period_start();
    match currency {
        Currency::Domestic => {
            discount
                * black_call(
                    params.initial_domestic_forward_rate(),
                    strike,
                    params.domestic_volatility(),
                    expiry,
                )
        }
        Currency::Foreign if is_quanto => {
            let adjustment = params.foreign_volatility()
                * params.fx_forward_volatility()
                * params.correlations().fx_foreign
                * expiry;
            discount
                * black_call(
                    params.initial_foreign_forward_rate() * (-adjustment).exp(),
                    strike,
                    params.foreign_volatility(),
                    expiry,
                )
        }
        Currency::Foreign => {
            discount
                * params.initial_fx_forward()
                * black_call(
                    params.initial_foreign_forward_rate(),
                    strike,
                    params.foreign_volatility(),
                    expiry,
                )
        }
    }
}

/// Time-0 price of a domestic caplet paid in advance at `T1`.
///
/// Paying at `T1` multiplies the payoff by `1 + L_d τ`; the extra term is a
/// Black call on the forward `L_d(0) exp(σ_d² T1)`.
pub fn domestic_in_advance_caplet_price(params: &CrossCurrencyParams, strike: f64) -> f64 {
    let forward = params.initial_domestic_forward_rate();
    let volatility = params.domestic_volatility();
    let expiry = params.period_start();
    let convexity_forward = forward * (volatility * volatility * expiry).exp();

    params.domestic_zero_bond()
        * (black_call(forward, strike, volatility, expiry)
            + params.accrual()
                * forward
                * black_call(convexity_forward, strike, volatility, expiry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hybrid::CrossCurrencyCorrelations;
    use approx::assert_relative_eq;

    fn params(volatility: f64, rho_xf: f64) -> CrossCurrencyParams {
        CrossCurrencyParams::builder()
            .period(1.0, 2.0)
            .zero_bonds(0.98, 0.97)
            .initial_forward_rates(0.05, 0.04)
            .initial_fx_forward(1.2)
            .volatilities(volatility, volatility, volatility)
            .correlations(CrossCurrencyCorrelations::new(0.0, 0.0, rho_xf))
            .build()
            .unwrap()
    }

    #[test]
    fn test_black_call_limits() {
        assert_relative_eq!(black_call(0.05, 0.03, 0.0, 1.0), 0.02, epsilon = 1e-15);
        assert_eq!(black_call(0.03, 0.05, 0.0, 1.0), 0.0);
        assert_relative_eq!(black_call(0.05, -0.01, 0.3, 1.0), 0.06, epsilon = 1e-15);
        // Deep out of the money
        assert!(black_call(0.01, 1.0, 0.2, 1.0) < 1e-12);
    }

    #[test]
    fn test_black_call_put_call_parity_lower_bound() {
        for strike in [0.02, 0.04, 0.05, 0.07] {
            let price = black_call(0.05, strike, 0.3, 2.0);
            assert!(price >= (0.05 - strike).max(0.0));
            assert!(price <= 0.05);
        }
    }

    #[test]
    fn test_zero_volatility_prices() {
        let p = params(0.0, 0.0);
        assert_relative_eq!(
            in_arrears_caplet_price(&p, Currency::Foreign, false, 0.03),
            0.98 * 1.2 * 0.01,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            in_arrears_caplet_price(&p, Currency::Foreign, true, 0.03),
            0.98 * 0.01,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            domestic_in_advance_caplet_price(&p, 0.03),
            0.98 * 1.05 * 0.02,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_quanto_adjustment_sign() {
        let plain = in_arrears_caplet_price(&params(0.2, 0.0), Currency::Foreign, true, 0.04);
        let positive = in_arrears_caplet_price(&params(0.2, 0.5), Currency::Foreign, true, 0.04);
        let negative = in_arrears_caplet_price(&params(0.2, -0.5), Currency::Foreign, true, 0.04);
        assert!(positive < plain);
        assert!(negative > plain);
    }

    #[test]
    fn test_domestic_quanto_flag_ignored() {
        let p = params(0.2, 0.3);
        assert_eq!(
            in_arrears_caplet_price(&p, Currency::Domestic, true, 0.04),
            in_arrears_caplet_price(&p, Currency::Domestic, false, 0.04)
        );
    }

    #[test]
    fn test_in_advance_exceeds_in_arrears() {
        let p = params(0.2, 0.0);
        assert!(
            domestic_in_advance_caplet_price(&p, 0.04)
                > in_arrears_caplet_price(&p, Currency::Domestic, false, 0.04)
        );
    }
}
