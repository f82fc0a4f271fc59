//! Three-factor lognormal cross-currency model.
//!
//! The simulated state is
//!
//! | component | asset |
//! |-----------|-------|
//! | 0 | domestic forward rate `L_d(T1, T2; t)` |
//! | 1 | foreign forward rate `L_f(T1, T2; t)` |
//! | 2 | forward FX `FFX(T2; t)` |
//!
//! each following a lognormal process under the domestic `T2`-forward
//! measure. The log-state `Y_i = ln X_i` has constant drift
//!
//! ```text
//! μ_d = -σ_d² / 2
//! μ_f = -σ_f² / 2 - σ_f σ_x ρ_xf
//! μ_x = -σ_x² / 2
//! ```
//!
//! where the extra foreign term is the quanto adjustment moving the foreign
//! forward rate from its own measure to the domestic one. The factor
//! loadings of component `i` are `σ_i` times row `i` of the correlation
//! decomposition, so the three log-drivers carry the prescribed pairwise
//! correlations while the simulator only sees independent increments.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::hybrid::{
//!     CrossCurrencyCorrelations, CrossCurrencyParams, LognormalCrossCurrencyProcess,
//! };
//! use pricer_models::models::process::LognormalProcessModel;
//!
//! let params = CrossCurrencyParams::builder()
//!     .period(1.0, 2.0)
//!     .zero_bonds(0.98, 0.97)
//!     .initial_forward_rates(0.05, 0.04)
//!     .initial_fx_forward(1.2)
//!     .volatilities(0.2, 0.3, 0.1)
//!     .correlations(CrossCurrencyCorrelations::new(0.0, 0.0, 0.5))
//!     .build()
//!     .unwrap();
//!
//! let model = LognormalCrossCurrencyProcess::new(params).unwrap();
//! let drift = model.drift(0).unwrap();
//!
//! assert!((drift[0] + 0.02).abs() < 1e-15);
//! assert!((drift[1] + 0.045 + 0.015).abs() < 1e-15);
//! assert!((drift[2] + 0.005).abs() < 1e-15);
//! ```

use super::correlated::{DOMESTIC, FOREIGN, FX_FORWARD};
use super::error::CrossCurrencyError;
use super::model::Currency;
use super::numeraire::{zero_bond_from_forward, DomesticBondNumeraire};
use super::params::{CrossCurrencyParams, ObservationTime};
use crate::models::process::{LognormalProcessModel, SimulatedProcess};
use pricer_core::math::RandomVariable;
use pricer_core::types::SimulationError;
use tracing::debug;

/// Number of simulated assets and of independent drivers.
pub const NUMBER_OF_COMPONENTS: usize = 3;

/// Lognormal drift and factor-loading specification of the cross-currency
/// model, together with its numeraire and FX reconstruction.
#[derive(Clone, Debug)]
pub struct LognormalCrossCurrencyProcess {
    params: CrossCurrencyParams,
    drift: [f64; NUMBER_OF_COMPONENTS],
    loadings: [[f64; NUMBER_OF_COMPONENTS]; NUMBER_OF_COMPONENTS],
    numeraire: DomesticBondNumeraire,
}

impl LognormalCrossCurrencyProcess {
    /// Builds the model from validated parameters.
    ///
    /// # Errors
    ///
    /// `Correlation` if the correlations cannot be decomposed. This cannot
    /// happen for parameters produced by the builder, but deserialised
    /// parameters are checked again here.
    pub fn new(params: CrossCurrencyParams) -> Result<Self, CrossCurrencyError> {
        params.validate()?;
        let decomposition = params.correlations().decompose()?;

        let sigma_d = params.domestic_volatility();
        let sigma_f = params.foreign_volatility();
        let sigma_x = params.fx_forward_volatility();
        let rho_xf = params.correlations().fx_foreign;

        let drift = [
            -0.5 * sigma_d * sigma_d,
            -0.5 * sigma_f * sigma_f - sigma_f * sigma_x * rho_xf,
            -0.5 * sigma_x * sigma_x,
        ];

        let volatilities = [sigma_d, sigma_f, sigma_x];
        let mut loadings = [[0.0; NUMBER_OF_COMPONENTS]; NUMBER_OF_COMPONENTS];
        for (component, row) in loadings.iter_mut().enumerate() {
            for (factor, loading) in row.iter_mut().enumerate() {
                *loading = volatilities[component] * decomposition.get(component, factor);
            }
        }

        debug!(
            sigma_d,
            sigma_f,
            sigma_x,
            rho_df = params.correlations().domestic_foreign,
            rho_xd = params.correlations().fx_domestic,
            rho_xf,
            ?drift,
            ?loadings,
            "Cross-currency model constructed"
        );

        let numeraire = DomesticBondNumeraire::new(&params);
        Ok(Self {
            params,
            drift,
            loadings,
            numeraire,
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &CrossCurrencyParams {
        &self.params
    }

    /// Times every simulation grid of this model must contain.
    pub fn observation_times(&self) -> [f64; 3] {
        [0.0, self.params.period_start(), self.params.period_end()]
    }

    /// Simulated forward rate of `currency` at `time`.
    ///
    /// # Errors
    ///
    /// `Simulation` if `time` is not on the simulation grid.
    pub fn forward_rate<P: SimulatedProcess>(
        &self,
        process: &P,
        currency: Currency,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        let component = match currency {
            Currency::Domestic => DOMESTIC,
            Currency::Foreign => FOREIGN,
        };
        Ok(process.value_at(time, component)?.clone())
    }

    /// Units of domestic currency per unit of `currency` at `time`.
    ///
    /// Always `1` for the domestic currency. For the foreign currency:
    ///
    /// ```text
    /// FX(0)  = FFX(T2; 0) P_d(T2; 0) / P_f(T2; 0)
    /// FX(T1) = FFX(T2; T1) (1 + L_f τ) / (1 + L_d τ)
    /// FX(T2) = FFX(T2; T2)
    /// ```
    ///
    /// # Errors
    ///
    /// `UnsupportedTime` for a foreign query at any other time.
    pub fn fx_rate<P: SimulatedProcess>(
        &self,
        process: &P,
        currency: Currency,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        if currency == Currency::Domestic {
            return Ok(RandomVariable::deterministic(1.0));
        }

        match self.params.observation(time)? {
            ObservationTime::Valuation => {
                let bond_ratio = self.params.domestic_zero_bond() / self.params.foreign_zero_bond();
                Ok(process.value_at(time, FX_FORWARD)?.mult_scalar(bond_ratio))
            }
            ObservationTime::PeriodStart => {
                let accrual = self.params.accrual();
                let fx_forward = process.value_at(time, FX_FORWARD)?;
                let domestic_bond =
                    zero_bond_from_forward(process.value_at(time, DOMESTIC)?, accrual);
                let foreign_bond =
                    zero_bond_from_forward(process.value_at(time, FOREIGN)?, accrual);
                Ok(fx_forward.mult(&domestic_bond)?.div(&foreign_bond)?)
            }
            ObservationTime::PeriodEnd => Ok(process.value_at(time, FX_FORWARD)?.clone()),
        }
    }
}

impl LognormalProcessModel for LognormalCrossCurrencyProcess {
    type Error = CrossCurrencyError;

    fn number_of_components(&self) -> usize {
        NUMBER_OF_COMPONENTS
    }

    fn number_of_factors(&self) -> usize {
        NUMBER_OF_COMPONENTS
    }

    fn initial_value(&self) -> Vec<f64> {
        vec![
            self.params.initial_domestic_forward_rate(),
            self.params.initial_foreign_forward_rate(),
            self.params.initial_fx_forward(),
        ]
    }

    // Time-homogeneous: the same drift and loadings on every step
    fn drift(&self, _time_index: usize) -> Result<Vec<f64>, SimulationError> {
        Ok(self.drift.to_vec())
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
                components: NUMBER_OF_COMPONENTS,
            })
    }

    fn numeraire<P: SimulatedProcess>(
        &self,
        process: &P,
        time: f64,
    ) -> Result<RandomVariable, CrossCurrencyError> {
        self.numeraire.at(process, time)
    }
}
