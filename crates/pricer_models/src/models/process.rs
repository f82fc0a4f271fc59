//! Process model abstractions for path simulation.
//!
//! Two traits separate *what* is simulated from *how* it is discretised:
//!
//! - [`LognormalProcessModel`]: a multi-component process
//!   `dX_i = X_i (μ_i dt + Σ_k λ_ik dW_k)` described by its initial value,
//!   the drift and factor loadings of `ln X`, and a numeraire.
//! - [`SimulatedProcess`]: a discretised realisation of such a model on a
//!   [`TimeDiscretization`], delivering path-wise values per time index and
//!   component.
//!
//! Models and schemes are combined through generics, so a model is always
//! paired with a scheme at compile time.
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::RandomVariable;
//! use pricer_core::types::{SimulationError, TimeDiscretization};
//! use pricer_models::models::process::SimulatedProcess;
//!
//! // A frozen process: every component keeps its initial value
//! struct Frozen {
//!     grid: TimeDiscretization,
//!     values: Vec<RandomVariable>,
//! }
//!
//! impl SimulatedProcess for Frozen {
//!     fn time_discretization(&self) -> &TimeDiscretization {
//!         &self.grid
//!     }
//!     fn number_of_paths(&self) -> usize {
//!         1
//!     }
//!     fn number_of_components(&self) -> usize {
//!         self.values.len()
//!     }
//!     fn process_value(
//!         &self,
//!         time_index: usize,
//!         component: usize,
//!     ) -> Result<&RandomVariable, SimulationError> {
//!         self.grid.time(time_index)?;
//!         self.values.get(component).ok_or(SimulationError::ComponentOutOfRange {
//!             component,
//!             components: self.values.len(),
//!         })
//!     }
//! }
//!
//! let process = Frozen {
//!     grid: TimeDiscretization::uniform(1.0, 4).unwrap(),
//!     values: vec![RandomVariable::deterministic(0.05)],
//! };
//! assert_eq!(process.value_at(0.5, 0).unwrap().get(0), 0.05);
//! assert!(process.value_at(0.6, 0).is_err());
//! ```

use pricer_core::math::RandomVariable;
use pricer_core::types::{SimulationError, TimeDiscretization};

/// Discretised realisation of a multi-component process.
pub trait SimulatedProcess {
    /// Grid on which the process was simulated.
    fn time_discretization(&self) -> &TimeDiscretization;

    /// Number of simulated paths.
    fn number_of_paths(&self) -> usize;

    /// Number of state components.
    fn number_of_components(&self) -> usize;

    /// Path-wise value of `component` at grid point `time_index`.
    ///
    /// # Errors
    ///
    /// `TimeIndexOutOfRange` or `ComponentOutOfRange` for indices outside the
    /// simulated state.
    fn process_value(
        &self,
        time_index: usize,
        component: usize,
    ) -> Result<&RandomVariable, SimulationError>;

    /// Path-wise value of `component` at `time`.
    ///
    /// # Errors
    ///
    /// `TimeNotInGrid` if `time` is not a point of the discretisation.
    fn value_at(&self, time: f64, component: usize) -> Result<&RandomVariable, SimulationError> {
        let time_index = self.time_discretization().time_index(time)?;
        self.process_value(time_index, component)
    }
}

/// Multi-component lognormal process.
///
/// The model is stated in terms of the log-state `Y = ln X`:
///
/// ```text
/// dY_i = μ_i dt + Σ_k λ_ik dW_k,    Y_i(0) = ln X_i(0)
/// ```
///
/// where `W_k` are independent Brownian motions. Implementations must keep
/// `initial_value`, `drift` and every `factor_loading` row of length
/// `number_of_components` and `number_of_factors` respectively.
pub trait LognormalProcessModel {
    /// Error raised by model-specific observations such as the numeraire.
    type Error: From<SimulationError>;

    /// Number of state components `X_i`.
    fn number_of_components(&self) -> usize;

    /// Number of independent Brownian drivers `W_k`.
    fn number_of_factors(&self) -> usize;

    /// Initial value `X(0)`, one entry per component.
    fn initial_value(&self) -> Vec<f64>;

    /// Initial log-state `Y(0) = ln X(0)`.
    fn initial_state(&self) -> Vec<f64> {
        self.initial_value().into_iter().map(f64::ln).collect()
    }

    /// Drift `μ` of the log-state on the step starting at `time_index`.
    fn drift(&self, time_index: usize) -> Result<Vec<f64>, SimulationError>;

    /// Loadings `λ_i·` of component `i` on every factor, for the step
    /// starting at `time_index`.
    fn factor_loading(&self, time_index: usize, component: usize)
        -> Result<&[f64], SimulationError>;

    /// Numeraire `N(t)` observed on a simulated realisation of this model.
    fn numeraire<P: SimulatedProcess>(
        &self,
        process: &P,
        time: f64,
    ) -> Result<RandomVariable, Self::Error>;
}
