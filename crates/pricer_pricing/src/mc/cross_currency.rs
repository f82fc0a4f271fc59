//! Monte Carlo realisation of the cross-currency model.
//!
//! [`CrossCurrencySimulation`] binds a [`LognormalCrossCurrencyProcess`] to
//! its log-Euler simulation and answers the [`CrossCurrencyModel`] queries
//! products need. The simulation grid always contains `0`, `T1` and `T2`.

use super::brownian::BrownianMotion;
use super::config::MonteCarloConfig;
use super::error::PricerError;
use super::euler::EulerScheme;
use pricer_core::math::RandomVariable;
use pricer_core::types::TimeDiscretization;
use pricer_models::models::hybrid::{
    CrossCurrencyError, CrossCurrencyModel, CrossCurrencyParams, Currency,
    LognormalCrossCurrencyProcess,
};
use pricer_models::models::process::{LognormalProcessModel, SimulatedProcess};

/// Simulated three-factor cross-currency model.
///
/// # Examples
///
/// ```
/// use pricer_models::models::hybrid::{CrossCurrencyModel, CrossCurrencyParams, Currency};
/// use pricer_pricing::mc::{CrossCurrencySimulation, MonteCarloConfig};
///
/// let params = CrossCurrencyParams::builder()
///     .period(1.0, 2.0)
///     .zero_bonds(0.98, 0.97)
///     .initial_forward_rates(0.05, 0.04)
///     .initial_fx_forward(1.2)
///     .volatilities(0.2, 0.25, 0.1)
///     .build()
///     .unwrap();
/// let config = MonteCarloConfig::builder().n_paths(1000).n_steps(4).build().unwrap();
///
/// let simulation = CrossCurrencySimulation::new(params, &config).unwrap();
/// assert_eq!(simulation.numeraire(2.0).unwrap().get(0), 1.0);
/// assert!(simulation.fx_rate(Currency::Foreign, 0.37).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CrossCurrencySimulation {
    process: EulerScheme<LognormalCrossCurrencyProcess>,
}

impl CrossCurrencySimulation {
    /// Simulates the model on `config.n_steps()` uniform steps up to `T2`,
    /// with `T1` added to the grid.
    ///
    /// # Errors
    ///
    /// - `Model` for invalid parameters
    /// - `Config` for an invalid configuration
    pub fn new(params: CrossCurrencyParams, config: &MonteCarloConfig) -> Result<Self, PricerError> {
        config.validate()?;
        let model = LognormalCrossCurrencyProcess::new(params)?;
        let grid = Self::time_discretization_for(&model, config.n_steps())?;
        let brownian = BrownianMotion::new(
            grid,
            model.number_of_factors(),
            config.n_paths(),
            config.seed(),
        )?;
        Self::with_brownian_motion(model, &brownian)
    }

    /// Simulates `model` with an externally supplied driver.
    ///
    /// Sharing one driver between simulations gives common random numbers.
    ///
    /// # Errors
    ///
    /// `Simulation` if the driver's grid misses `0`, `T1` or `T2`, or has
    /// fewer than three factors.
    pub fn with_brownian_motion(
        model: LognormalCrossCurrencyProcess,
        brownian: &BrownianMotion,
    ) -> Result<Self, PricerError> {
        for time in model.observation_times() {
            brownian.time_discretization().time_index(time)?;
        }
        let process = EulerScheme::new(model, brownian)?;
        Ok(Self { process })
    }

    /// Uniform grid on `[0, T2]` with `T1` added.
    pub fn time_discretization_for(
        model: &LognormalCrossCurrencyProcess,
        n_steps: usize,
    ) -> Result<TimeDiscretization, PricerError> {
        let params = model.params();
        Ok(TimeDiscretization::uniform(params.period_end(), n_steps)?
            .with_points(&[params.period_start()])?)
    }

    /// The model specification.
    pub fn model(&self) -> &LognormalCrossCurrencyProcess {
        self.process.model()
    }

    /// The simulated process.
    pub fn process(&self) -> &EulerScheme<LognormalCrossCurrencyProcess> {
        &self.process
    }
}

impl CrossCurrencyModel for CrossCurrencySimulation {
    fn forward_rate(
        &self,
        currency: Currency,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        self.model().forward_rate(&self.process, currency, time)
    }

    fn fx_rate(&self, currency: Currency, time: f64) -> Result<RandomVariable, CrossCurrencyError> {
        self.model().fx_rate(&self.process, currency, time)
    }

    fn numeraire(&self, time: f64) -> Result<RandomVariable, CrossCurrencyError> {
        self.process.numeraire(time)
    }

    fn number_of_paths(&self) -> usize {
        self.process.number_of_paths()
    }

    fn period(&self) -> (f64, f64) {
        let params = self.model().params();
        (params.period_start(), params.period_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::models::hybrid::CrossCurrencyCorrelations;

    fn params(volatility: f64) -> CrossCurrencyParams {
        CrossCurrencyParams::builder()
            .period(1.0, 2.0)
            .zero_bonds(0.98, 0.97)
            .initial_forward_rates(0.05, 0.04)
            .initial_fx_forward(1.2)
            .volatilities(volatility, volatility, volatility)
            .correlations(CrossCurrencyCorrelations::new(0.3, 0.2, -0.1))
            .build()
            .unwrap()
    }

    fn config(n_paths: usize, n_steps: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .build()
            .unwrap()
    }

    #[test]
    fn test_grid_contains_observation_times() {
        // 3 uniform steps on [0, 2] do not hit T1 = 1
        let simulation = CrossCurrencySimulation::new(params(0.2), &config(10, 3)).unwrap();
        let grid = simulation.process().time_discretization();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.time_index(1.0).unwrap(), 2);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let simulation = CrossCurrencySimulation::new(params(0.0), &config(100, 4)).unwrap();
        let forward = simulation.forward_rate(Currency::Domestic, 1.0).unwrap();
        assert!(forward.is_deterministic());
        assert_relative_eq!(forward.get(0), 0.05, epsilon = 1e-15);

        let fx_end = simulation.fx_rate(Currency::Foreign, 2.0).unwrap();
        assert_relative_eq!(fx_end.get(0), 1.2, epsilon = 1e-14);
    }

    #[test]
    fn test_numeraire_at_supported_times() {
        let simulation = CrossCurrencySimulation::new(params(0.2), &config(50, 4)).unwrap();
        assert_eq!(simulation.numeraire(0.0).unwrap().get(0), 0.98);
        assert_eq!(simulation.numeraire(2.0).unwrap().get(0), 1.0);

        let at_fixing = simulation.numeraire(1.0).unwrap();
        let forward = simulation.forward_rate(Currency::Domestic, 1.0).unwrap();
        for path in 0..50 {
            assert_relative_eq!(
                at_fixing.get(path),
                1.0 / (1.0 + forward.get(path)),
                epsilon = 1e-15
            );
        }
        assert!(simulation
            .numeraire(0.5)
            .unwrap_err()
            .is_unsupported_time());
    }

    #[test]
    fn test_fx_rate_unsupported_time_even_on_grid() {
        // 0.5 is on the grid but not an FX observation time
        let simulation = CrossCurrencySimulation::new(params(0.2), &config(10, 4)).unwrap();
        let err = simulation.fx_rate(Currency::Foreign, 0.5).unwrap_err();
        assert_eq!(err, CrossCurrencyError::UnsupportedTime { time: 0.5 });
        // while the forward rate is available there
        assert!(simulation.forward_rate(Currency::Foreign, 0.5).is_ok());
    }

    #[test]
    fn test_forward_rate_off_grid_fails() {
        let simulation = CrossCurrencySimulation::new(params(0.2), &config(10, 4)).unwrap();
        let err = simulation
            .forward_rate(Currency::Domestic, 0.37)
            .unwrap_err();
        assert!(matches!(err, CrossCurrencyError::Simulation(_)));
    }

    #[test]
    fn test_shared_driver_reproduces_simulation() {
        let model = LognormalCrossCurrencyProcess::new(params(0.2)).unwrap();
        let grid = CrossCurrencySimulation::time_discretization_for(&model, 4).unwrap();
        let brownian = BrownianMotion::new(grid, 3, 200, 11).unwrap();

        let a = CrossCurrencySimulation::with_brownian_motion(model.clone(), &brownian).unwrap();
        let b = CrossCurrencySimulation::with_brownian_motion(model, &brownian).unwrap();
        assert_eq!(
            a.fx_rate(Currency::Foreign, 1.0).unwrap(),
            b.fx_rate(Currency::Foreign, 1.0).unwrap()
        );
        assert_eq!(a.number_of_paths(), 200);
    }

    #[test]
    fn test_driver_grid_must_contain_fixing() {
        let model = LognormalCrossCurrencyProcess::new(params(0.2)).unwrap();
        let grid = TimeDiscretization::uniform(2.0, 3).unwrap();
        let brownian = BrownianMotion::new(grid, 3, 10, 1).unwrap();
        let err = CrossCurrencySimulation::with_brownian_motion(model, &brownian).unwrap_err();
        assert!(matches!(err, PricerError::Simulation(_)));
    }
}
