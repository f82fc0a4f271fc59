//! Multi-factor Brownian driver.
//!
//! [`BrownianMotion`] holds the increments
//!
//! ```text
//! ΔW_k(t_i) = W_k(t_{i+1}) - W_k(t_i) ~ N(0, t_{i+1} - t_i)
//! ```
//!
//! of `n_factors` independent Brownian motions for every step of a
//! [`TimeDiscretization`] and every path. All increments are drawn up front
//! from one seeded [`PricerRng`], step by step and factor by factor, so a
//! seed reproduces the driver exactly.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::TimeDiscretization;
//! use pricer_pricing::mc::BrownianMotion;
//!
//! let grid = TimeDiscretization::uniform(1.0, 4).unwrap();
//! let brownian = BrownianMotion::new(grid, 3, 1000, 42).unwrap();
//!
//! let dw = brownian.increment(0, 2).unwrap();
//! assert_eq!(dw.size(), 1000);
//! ```

use super::config::MAX_PATHS;
use super::error::ConfigError;
use crate::rng::PricerRng;
use pricer_core::math::RandomVariable;
use pricer_core::types::{SimulationError, TimeDiscretization};
use tracing::debug;

/// Independent Brownian increments on a time grid.
#[derive(Clone, Debug)]
pub struct BrownianMotion {
    time_discretization: TimeDiscretization,
    n_factors: usize,
    n_paths: usize,
    seed: u64,
    /// `increments[time_index][factor]`
    increments: Vec<Vec<RandomVariable>>,
}

impl BrownianMotion {
    /// Draws the increments of `n_factors` independent Brownian motions.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `n_factors` is zero
    /// - `InvalidPathCount` if `n_paths` is outside [1, 10_000_000]
    pub fn new(
        time_discretization: TimeDiscretization,
        n_factors: usize,
        n_paths: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if n_factors == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "n_factors",
                value: "must be positive".to_string(),
            });
        }
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(n_paths));
        }

        let mut rng = PricerRng::from_seed(seed);
        let n_steps = time_discretization.number_of_time_steps();
        let increments = time_discretization
            .times()
            .windows(2)
            .map(|step| {
                let std_dev = (step[1] - step[0]).sqrt();
                (0..n_factors)
                    .map(|_| {
                        let mut values = vec![0.0; n_paths];
                        rng.fill_normal_scaled(&mut values, std_dev);
                        RandomVariable::from_values(values)
                    })
                    .collect()
            })
            .collect();

        debug!(
            n_paths,
            n_factors,
            n_steps,
            seed = rng.seed(),
            "Brownian increments generated"
        );

        Ok(Self {
            time_discretization,
            n_factors,
            n_paths,
            seed,
            increments,
        })
    }

    /// Grid of the driver.
    #[inline]
    pub fn time_discretization(&self) -> &TimeDiscretization {
        &self.time_discretization
    }

    /// Number of independent factors.
    #[inline]
    pub fn number_of_factors(&self) -> usize {
        self.n_factors
    }

    /// Number of paths.
    #[inline]
    pub fn number_of_paths(&self) -> usize {
        self.n_paths
    }

    /// Seed the increments were drawn with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Increment of `factor` over the step starting at `time_index`.
    ///
    /// # Errors
    ///
    /// `TimeIndexOutOfRange` or `FactorOutOfRange` for indices outside the
    /// driver.
    pub fn increment(
        &self,
        time_index: usize,
        factor: usize,
    ) -> Result<&RandomVariable, SimulationError> {
        let step = self
            .increments
            .get(time_index)
            .ok_or(SimulationError::TimeIndexOutOfRange {
                index: time_index,
                len: self.increments.len(),
            })?;
        step.get(factor).ok_or(SimulationError::FactorOutOfRange {
            factor,
            factors: self.n_factors,
        })
    }
}
