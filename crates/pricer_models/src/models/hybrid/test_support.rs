//! Frozen simulated process and model for unit tests.

use super::{
    CrossCurrencyError, CrossCurrencyModel, CrossCurrencyParams, Currency,
    LognormalCrossCurrencyProcess,
};
use crate::models::process::{LognormalProcessModel, SimulatedProcess};
use pricer_core::math::RandomVariable;
use pricer_core::types::{SimulationError, TimeDiscretization};

/// Process whose components keep the same value at every grid point.
pub(crate) struct FrozenProcess {
    grid: TimeDiscretization,
    components: Vec<RandomVariable>,
}

impl FrozenProcess {
    /// Deterministic (domestic rate, foreign rate, forward FX).
    pub(crate) fn new(times: &[f64], values: [f64; 3]) -> Self {
        Self {
            grid: TimeDiscretization::new(times.to_vec()).unwrap(),
            components: values
                .iter()
                .map(|&v| RandomVariable::deterministic(v))
                .collect(),
        }
    }

    /// Path-wise domestic rate with deterministic foreign rate and FX.
    pub(crate) fn with_paths(times: &[f64], domestic: Vec<f64>, foreign: f64, fx: f64) -> Self {
        Self {
            grid: TimeDiscretization::new(times.to_vec()).unwrap(),
            components: vec![
                RandomVariable::from_values(domestic),
                RandomVariable::deterministic(foreign),
                RandomVariable::deterministic(fx),
            ],
        }
    }
}

impl SimulatedProcess for FrozenProcess {
    fn time_discretization(&self) -> &TimeDiscretization {
        &self.grid
    }

    fn number_of_paths(&self) -> usize {
        self.components.iter().map(RandomVariable::size).max().unwrap_or(1)
    }

    fn number_of_components(&self) -> usize {
        self.components.len()
    }

    fn process_value(
        &self,
        time_index: usize,
        component: usize,
    ) -> Result<&RandomVariable, SimulationError> {
        self.grid.time(time_index)?;
        self.components
            .get(component)
            .ok_or(SimulationError::ComponentOutOfRange {
                component,
                components: self.components.len(),
            })
    }
}

/// Zero-volatility cross-currency model over `[1, 2]` on a frozen process.
pub(crate) struct FrozenModel {
    model: LognormalCrossCurrencyProcess,
    process: FrozenProcess,
}

impl FrozenModel {
    /// Zero bonds plus frozen (domestic rate, foreign rate, forward FX).
    pub(crate) fn new(domestic_bond: f64, foreign_bond: f64, values: [f64; 3]) -> Self {
        let params = CrossCurrencyParams::builder()
            .period(1.0, 2.0)
            .zero_bonds(domestic_bond, foreign_bond)
            .initial_forward_rates(values[0], values[1])
            .initial_fx_forward(values[2])
            .volatilities(0.0, 0.0, 0.0)
            .build()
            .unwrap();
        Self {
            model: LognormalCrossCurrencyProcess::new(params).unwrap(),
            process: FrozenProcess::new(&[0.0, 1.0, 2.0], values),
        }
    }
}

impl CrossCurrencyModel for FrozenModel {
    fn forward_rate(
        &self,
        currency: Currency,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        self.model.forward_rate(&self.process, currency, time)
    }

    fn fx_rate(&self, currency: Currency, time: f64) -> Result<RandomVariable, CrossCurrencyError> {
        self.model.fx_rate(&self.process, currency, time)
    }

    fn numeraire(&self, time: f64) -> Result<RandomVariable, CrossCurrencyError> {
        self.model.numeraire(&self.process, time)
    }

    fn number_of_paths(&self) -> usize {
        self.process.number_of_paths()
    }

    fn period(&self) -> (f64, f64) {
        let params = self.model.params();
        (params.period_start(), params.period_end())
    }
}
