//! Log-Euler discretisation of lognormal process models.
//!
//! For a [`LognormalProcessModel`] the scheme advances the log-state
//!
//! ```text
//! Y(t_{i+1}) = Y(t_i) + μ(i) Δt_i + Σ_k λ_k(i) ΔW_k(i),    Y(0) = ln X(0)
//! ```
//!
//! and stores `X = exp(Y)` for every grid point. Lognormal drift and
//! loadings are constant per step, so the scheme is exact in distribution on
//! every grid point.
//!
//! The whole path ensemble is simulated at construction; the result is
//! immutable and read through [`SimulatedProcess`].
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::TimeDiscretization;
//! use pricer_models::models::hybrid::{CrossCurrencyParams, LognormalCrossCurrencyProcess};
//! use pricer_models::models::process::SimulatedProcess;
//! use pricer_pricing::mc::{BrownianMotion, EulerScheme};
//!
//! let params = CrossCurrencyParams::builder()
//!     .period(1.0, 2.0)
//!     .zero_bonds(0.98, 0.97)
//!     .initial_forward_rates(0.05, 0.04)
//!     .initial_fx_forward(1.2)
//!     .volatilities(0.2, 0.25, 0.1)
//!     .build()
//!     .unwrap();
//! let model = LognormalCrossCurrencyProcess::new(params).unwrap();
//!
//! let grid = TimeDiscretization::uniform(2.0, 8).unwrap();
//! let brownian = BrownianMotion::new(grid, 3, 500, 42).unwrap();
//! let scheme = EulerScheme::new(model, &brownian).unwrap();
//!
//! let fx_at_end = scheme.value_at(2.0, 2).unwrap();
//! assert_eq!(fx_at_end.size(), 500);
//! ```

use super::brownian::BrownianMotion;
use pricer_core::math::RandomVariable;
use pricer_core::types::{SimulationError, TimeDiscretization};
use pricer_models::models::process::{LognormalProcessModel, SimulatedProcess};
use tracing::debug;

/// Simulated realisation of a lognormal process model.
#[derive(Clone, Debug)]
pub struct EulerScheme<M> {
    model: M,
    time_discretization: TimeDiscretization,
    n_paths: usize,
    /// `values[time_index][component]`
    values: Vec<Vec<RandomVariable>>,
}

impl<M: LognormalProcessModel> EulerScheme<M> {
    /// Simulates `model` driven by `brownian`, on the driver's grid.
    ///
    /// # Errors
    ///
    /// - `FactorOutOfRange` if the model needs more factors than the driver
    ///   provides
    /// - `ComponentOutOfRange` if the model's initial value, drift or
    ///   loadings do not cover every component
    pub fn new(model: M, brownian: &BrownianMotion) -> Result<Self, SimulationError> {
        let n_components = model.number_of_components();
        let n_factors = model.number_of_factors();
        if n_factors > brownian.number_of_factors() {
            return Err(SimulationError::FactorOutOfRange {
                factor: n_factors - 1,
                factors: brownian.number_of_factors(),
            });
        }

        let initial_value = model.initial_value();
        let initial_state = model.initial_state();
        if initial_value.len() != n_components || initial_state.len() != n_components {
            return Err(SimulationError::ComponentOutOfRange {
                component: initial_value.len().min(initial_state.len()),
                components: n_components,
            });
        }

        let time_discretization = brownian.time_discretization().clone();
        let n_steps = time_discretization.number_of_time_steps();

        let mut values = Vec::with_capacity(n_steps + 1);
        // Exact at t = 0
        values.push(
            initial_value
                .into_iter()
                .map(RandomVariable::deterministic)
                .collect::<Vec<_>>(),
        );

        let mut state: Vec<RandomVariable> = initial_state
            .into_iter()
            .map(RandomVariable::deterministic)
            .collect();

        for time_index in 0..n_steps {
            let dt = time_discretization.time_step(time_index)?;
            let drift = model.drift(time_index)?;

            let mut next = Vec::with_capacity(n_components);
            for (component, log_value) in state.iter().enumerate() {
                let mu = drift
                    .get(component)
                    .copied()
                    .ok_or(SimulationError::ComponentOutOfRange {
                        component,
                        components: drift.len(),
                    })?;

                let mut updated = log_value.add_scalar(mu * dt);
                let loadings = model.factor_loading(time_index, component)?;
                for (factor, &loading) in loadings.iter().enumerate().take(n_factors) {
                    if loading == 0.0 {
                        continue;
                    }
                    let dw = brownian.increment(time_index, factor)?;
                    updated = updated.apply_binary(dw, |y, w| y + loading * w)?;
                }
                next.push(updated);
            }

            values.push(next.iter().map(RandomVariable::exp).collect());
            state = next;
        }

        debug!(
            n_paths = brownian.number_of_paths(),
            n_steps,
            n_components,
            n_factors,
            "Euler simulation complete"
        );

        Ok(Self {
            model,
            time_discretization,
            n_paths: brownian.number_of_paths(),
            values,
        })
    }

    /// The simulated model.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Numeraire of the model on this realisation.
    pub fn numeraire(&self, time: f64) -> Result<RandomVariable, M::Error> {
        self.model.numeraire(self, time)
    }
}

impl<M: LognormalProcessModel> SimulatedProcess for EulerScheme<M> {
    fn time_discretization(&self) -> &TimeDiscretization {
        &self.time_discretization
    }

    fn number_of_paths(&self) -> usize {
        self.n_paths
    }

    fn number_of_components(&self) -> usize {
        self.model.number_of_components()
    }

    fn process_value(
        &self,
        time_index: usize,
        component: usize,
    ) -> Result<&RandomVariable, SimulationError> {
        let state = self
            .values
            .get(time_index)
            .ok_or(SimulationError::TimeIndexOutOfRange {
                index: time_index,
                len: self.values.len(),
            })?;
        state.get(component).ok_or(SimulationError::ComponentOutOfRange {
            component,
            components: state.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Two uncorrelated geometric Brownian motions with no drift correction.
    struct TwoAssets {
        volatilities: [f64; 2],
        loadings: [[f64; 2]; 2],
    }

    impl TwoAssets {
        fn new(sigma_a: f64, sigma_b: f64) -> Self {
            Self {
                volatilities: [sigma_a, sigma_b],
                loadings: [[sigma_a, 0.0], [0.0, sigma_b]],
            }
        }
    }

    impl LognormalProcessModel for TwoAssets {
        type Error = SimulationError;

        fn number_of_components(&self) -> usize {
            2
        }

        fn number_of_factors(&self) -> usize {
            2
        }

        fn initial_value(&self) -> Vec<f64> {
            vec![1.0, 2.0]
        }

        fn drift(&self, _time_index: usize) -> Result<Vec<f64>, SimulationError> {
            Ok(self
                .volatilities
                .iter()
                .map(|sigma| -0.5 * sigma * sigma)
                .collect())
        }

        fn factor_loading(
            &self,
            _time_index: usize,
            component: usize,
        ) -> Result<&[f64], SimulationError> {
            self.loadings
                .get(component)
                .map(|row| row.as_slice())
                .ok_or(SimulationError::ComponentOutOfRange {
                    component,
                    components: 2,
                })
        }

        fn numeraire<P: SimulatedProcess>(
            &self,
            _process: &P,
            _time: f64,
        ) -> Result<RandomVariable, SimulationError> {
            Ok(RandomVariable::deterministic(1.0))
        }
    }

    fn grid() -> TimeDiscretization {
        TimeDiscretization::uniform(1.0, 4).unwrap()
    }

    #[test]
    fn test_initial_value_is_exact() {
        let brownian = BrownianMotion::new(grid(), 2, 10, 1).unwrap();
        let scheme = EulerScheme::new(TwoAssets::new(0.2, 0.3), &brownian).unwrap();
        assert_eq!(scheme.process_value(0, 0).unwrap().get(0), 1.0);
        assert_eq!(scheme.process_value(0, 1).unwrap().get(5), 2.0);
        assert_eq!(scheme.number_of_paths(), 10);
        assert_eq!(scheme.number_of_components(), 2);
    }

    #[test]
    fn test_zero_volatility_stays_deterministic() {
        let brownian = BrownianMotion::new(grid(), 2, 10, 1).unwrap();
        let scheme = EulerScheme::new(TwoAssets::new(0.0, 0.0), &brownian).unwrap();
        let end = scheme.value_at(1.0, 1).unwrap();
        assert!(end.is_deterministic());
        assert_relative_eq!(end.get(0), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_path_follows_increments() {
        let brownian = BrownianMotion::new(grid(), 2, 3, 5).unwrap();
        let scheme = EulerScheme::new(TwoAssets::new(0.2, 0.0), &brownian).unwrap();

        for path in 0..3 {
            let mut log_value = 0.0;
            for step in 0..4 {
                let dw = brownian.increment(step, 0).unwrap().get(path);
                log_value += -0.5 * 0.04 * 0.25 + 0.2 * dw;
                let simulated = scheme.process_value(step + 1, 0).unwrap().get(path);
                assert_relative_eq!(simulated, log_value.exp(), epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_martingale_in_expectation() {
        let brownian = BrownianMotion::new(grid(), 2, 100_000, 2024).unwrap();
        let scheme = EulerScheme::new(TwoAssets::new(0.3, 0.1), &brownian).unwrap();
        let a = scheme.value_at(1.0, 0).unwrap();
        let b = scheme.value_at(1.0, 1).unwrap();
        assert_abs_diff_eq!(a.average(), 1.0, epsilon = 4.0 * a.standard_error());
        assert_abs_diff_eq!(b.average(), 2.0, epsilon = 4.0 * b.standard_error());
    }

    #[test]
    fn test_lookup_errors() {
        let brownian = BrownianMotion::new(grid(), 2, 10, 1).unwrap();
        let scheme = EulerScheme::new(TwoAssets::new(0.2, 0.3), &brownian).unwrap();
        assert!(matches!(
            scheme.process_value(5, 0),
            Err(SimulationError::TimeIndexOutOfRange { index: 5, len: 5 })
        ));
        assert!(matches!(
            scheme.process_value(1, 2),
            Err(SimulationError::ComponentOutOfRange { component: 2, .. })
        ));
        assert_eq!(
            scheme.value_at(0.3, 0),
            Err(SimulationError::TimeNotInGrid { time: 0.3 })
        );
    }

    #[test]
    fn test_driver_with_too_few_factors() {
        let brownian = BrownianMotion::new(grid(), 1, 10, 1).unwrap();
        let result = EulerScheme::new(TwoAssets::new(0.2, 0.3), &brownian);
        assert!(matches!(
            result,
            Err(SimulationError::FactorOutOfRange {
                factor: 1,
                factors: 1
            })
        ));
    }

    #[test]
    fn test_numeraire_delegates_to_model() {
        let brownian = BrownianMotion::new(grid(), 2, 10, 1).unwrap();
        let scheme = EulerScheme::new(TwoAssets::new(0.2, 0.3), &brownian).unwrap();
        assert_eq!(scheme.numeraire(0.5).unwrap().get(0), 1.0);
    }
}
