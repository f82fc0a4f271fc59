//! Monte Carlo pricer for cross-currency caplets.
//!
//! The pricer simulates the model once per [`MonteCarloConfig`] and averages
//! the path-wise values of a [`GeneralizedCaplet`] into a [`PricingResult`].

use super::config::MonteCarloConfig;
use super::cross_currency::CrossCurrencySimulation;
use super::error::{ConfigError, PricerError};
use pricer_core::math::RandomVariable;
use pricer_models::instruments::GeneralizedCaplet;
use pricer_models::models::hybrid::{CrossCurrencyModel, CrossCurrencyParams};
use tracing::{info, info_span};

/// Result of a Monte Carlo valuation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 0.0196,
///     std_error: 0.0001,
///     n_paths: 10_000,
/// };
///
/// assert!((result.confidence_95() - 0.000196).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of paths averaged.
    pub n_paths: usize,
}

impl PricingResult {
    /// Averages path-wise values.
    pub fn from_values(values: &RandomVariable, n_paths: usize) -> Self {
        Self {
            price: values.average(),
            std_error: values.standard_error(),
            n_paths,
        }
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Monte Carlo pricing engine for generalised caplets.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{GeneralizedCaplet, PaymentTiming};
/// use pricer_models::models::hybrid::{CrossCurrencyParams, Currency};
/// use pricer_pricing::mc::{CrossCurrencyPricer, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10)
///     .n_steps(2)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = CrossCurrencyPricer::new(config).unwrap();
///
/// // Zero volatility: no Monte Carlo noise
/// let params = CrossCurrencyParams::builder()
///     .period(1.0, 2.0)
///     .zero_bonds(0.98, 0.97)
///     .initial_forward_rates(0.05, 0.04)
///     .initial_fx_forward(1.2)
///     .volatilities(0.0, 0.0, 0.0)
///     .build()
///     .unwrap();
/// let caplet = GeneralizedCaplet::with_payment_timing(
///     Currency::Domestic,
///     true,
///     1.0,
///     2.0,
///     PaymentTiming::InArrears,
///     0.03,
/// )
/// .unwrap();
///
/// let result = pricer.price(&params, &caplet).unwrap();
/// assert!((result.price - 0.0196).abs() < 1e-14);
/// assert_eq!(result.std_error, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct CrossCurrencyPricer {
    config: MonteCarloConfig,
}

impl CrossCurrencyPricer {
    /// Creates a pricer.
    ///
    /// # Errors
    ///
    /// `ConfigError` if the configuration does not validate.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Simulates the cross-currency model for `params`.
    pub fn simulate(&self, params: &CrossCurrencyParams) -> Result<CrossCurrencySimulation, PricerError> {
        CrossCurrencySimulation::new(params.clone(), &self.config)
    }

    /// Path-wise time-0 values of `caplet` on `model`.
    pub fn path_values<M: CrossCurrencyModel>(
        &self,
        model: &M,
        caplet: &GeneralizedCaplet,
    ) -> Result<RandomVariable, PricerError> {
        Ok(caplet.value(0.0, model)?)
    }

    /// Prices `caplet` on an existing simulation.
    ///
    /// Reusing one simulation for several caplets prices them on common
    /// random numbers.
    pub fn price_on<M: CrossCurrencyModel>(
        &self,
        model: &M,
        caplet: &GeneralizedCaplet,
    ) -> Result<PricingResult, PricerError> {
        let variant = caplet.variant_name();
        let span = info_span!("price_caplet", variant = %variant);
        let _guard = span.enter();

        let values = self.path_values(model, caplet)?;
        let result = PricingResult::from_values(&values, model.number_of_paths());

        info!(
            price = result.price,
            std_error = result.std_error,
            n_paths = result.n_paths,
            "Caplet priced"
        );
        Ok(result)
    }

    /// Simulates the model and prices `caplet` at time 0.
    pub fn price(
        &self,
        params: &CrossCurrencyParams,
        caplet: &GeneralizedCaplet,
    ) -> Result<PricingResult, PricerError> {
        let simulation = self.simulate(params)?;
        self.price_on(&simulation, caplet)
    }
}
