//! Path-wise random variables for Monte Carlo simulation.
//!
//! A [`RandomVariable`] holds either a single deterministic value or one
//! value per simulated path. All arithmetic is elementwise; deterministic
//! operands broadcast against stochastic ones, so model constants (zero bond
//! prices, unit FX factors) mix freely with simulated quantities.
//!
//! Each path is independent of every other path, so elementwise kernels over
//! large path ensembles are evaluated in parallel with Rayon.
//!
//! # Examples
//!
//! ```
//! use pricer_core::math::RandomVariable;
//!
//! let rates = RandomVariable::from_values(vec![0.01, 0.03, 0.04]);
//! let payoff = rates.sub_scalar(0.02).floor(0.0);
//!
//! assert_eq!(payoff.get(0), 0.0);
//! assert!((payoff.average() - 0.01).abs() < 1e-12);
//!
//! // Deterministic values broadcast
//! let discounted = payoff.mult(&RandomVariable::deterministic(0.98)).unwrap();
//! assert!((discounted.get(2) - 0.0196).abs() < 1e-12);
//! ```

use rayon::prelude::*;

use crate::types::SimulationError;

/// Path count above which elementwise kernels run on the Rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Deterministic or path-wise stochastic value.
#[derive(Clone, Debug, PartialEq)]
pub enum RandomVariable {
    /// The same value on every path.
    Deterministic(f64),
    /// One value per path.
    Stochastic(Vec<f64>),
}

impl RandomVariable {
    /// Creates a deterministic random variable.
    #[inline]
    pub fn deterministic(value: f64) -> Self {
        RandomVariable::Deterministic(value)
    }

    /// Creates a stochastic random variable from per-path values.
    #[inline]
    pub fn from_values(values: Vec<f64>) -> Self {
        RandomVariable::Stochastic(values)
    }

    /// Returns `true` if the value does not depend on the path.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        matches!(self, RandomVariable::Deterministic(_))
    }

    /// Number of stored realisations (1 for deterministic values).
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            RandomVariable::Deterministic(_) => 1,
            RandomVariable::Stochastic(values) => values.len(),
        }
    }

    /// Value on `path`. Deterministic values are returned for every path.
    ///
    /// # Panics
    ///
    /// Panics if the variable is stochastic and `path >= size()`.
    #[inline]
    pub fn get(&self, path: usize) -> f64 {
        match self {
            RandomVariable::Deterministic(value) => *value,
            RandomVariable::Stochastic(values) => values[path],
        }
    }

    /// Per-path values, or `None` for a deterministic variable.
    #[inline]
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            RandomVariable::Deterministic(_) => None,
            RandomVariable::Stochastic(values) => Some(values),
        }
    }

    /// Expands the variable to exactly `n_paths` realisations.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::PathCountMismatch` if the variable is
    /// stochastic with a different number of paths.
    pub fn to_vec(&self, n_paths: usize) -> Result<Vec<f64>, SimulationError> {
        match self {
            RandomVariable::Deterministic(value) => Ok(vec![*value; n_paths]),
            RandomVariable::Stochastic(values) if values.len() == n_paths => Ok(values.clone()),
            RandomVariable::Stochastic(values) => Err(SimulationError::PathCountMismatch {
                expected: n_paths,
                got: values.len(),
            }),
        }
    }

    /// Applies `f` to every realisation.
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            RandomVariable::Deterministic(value) => RandomVariable::Deterministic(f(*value)),
            RandomVariable::Stochastic(values) => {
                let mapped = if values.len() >= PARALLEL_THRESHOLD {
                    values.par_iter().map(|&x| f(x)).collect()
                } else {
                    values.iter().map(|&x| f(x)).collect()
                };
                RandomVariable::Stochastic(mapped)
            }
        }
    }

    /// Combines two random variables path by path.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::PathCountMismatch` if both operands are
    /// stochastic with different path counts.
    pub fn apply_binary<F>(&self, other: &Self, f: F) -> Result<Self, SimulationError>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        use RandomVariable::{Deterministic, Stochastic};

        let result = match (self, other) {
            (Deterministic(a), Deterministic(b)) => Deterministic(f(*a, *b)),
            (Deterministic(a), Stochastic(_)) => other.apply(|y| f(*a, y)),
            (Stochastic(_), Deterministic(b)) => self.apply(|x| f(x, *b)),
            (Stochastic(xs), Stochastic(ys)) => {
                if xs.len() != ys.len() {
                    return Err(SimulationError::PathCountMismatch {
                        expected: xs.len(),
                        got: ys.len(),
                    });
                }
                let combined = if xs.len() >= PARALLEL_THRESHOLD {
                    xs.par_iter()
                        .zip(ys.par_iter())
                        .map(|(&x, &y)| f(x, y))
                        .collect()
                } else {
                    xs.iter().zip(ys.iter()).map(|(&x, &y)| f(x, y)).collect()
                };
                Stochastic(combined)
            }
        };
        Ok(result)
    }

    /// Elementwise `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self, SimulationError> {
        self.apply_binary(other, |x, y| x + y)
    }

    /// Elementwise `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self, SimulationError> {
        self.apply_binary(other, |x, y| x - y)
    }

    /// Elementwise `self * other`.
    pub fn mult(&self, other: &Self) -> Result<Self, SimulationError> {
        self.apply_binary(other, |x, y| x * y)
    }

    /// Elementwise `self / other`.
    pub fn div(&self, other: &Self) -> Result<Self, SimulationError> {
        self.apply_binary(other, |x, y| x / y)
    }

    /// `self + value`.
    pub fn add_scalar(&self, value: f64) -> Self {
        self.apply(|x| x + value)
    }

    /// `self - value`.
    pub fn sub_scalar(&self, value: f64) -> Self {
        self.apply(|x| x - value)
    }

    /// `self * value`.
    pub fn mult_scalar(&self, value: f64) -> Self {
        self.apply(|x| x * value)
    }

    /// `max(self, floor)`.
    pub fn floor(&self, floor: f64) -> Self {
        self.apply(|x| x.max(floor))
    }

    /// `exp(self)`.
    pub fn exp(&self) -> Self {
        self.apply(f64::exp)
    }

    /// `ln(self)`.
    pub fn log(&self) -> Self {
        self.apply(f64::ln)
    }

    /// `1 / self`.
    pub fn invert(&self) -> Self {
        self.apply(|x| 1.0 / x)
    }

    /// Arithmetic mean over paths.
    pub fn average(&self) -> f64 {
        match self {
            RandomVariable::Deterministic(value) => *value,
            RandomVariable::Stochastic(values) if values.is_empty() => f64::NAN,
            RandomVariable::Stochastic(values) => sum(values) / values.len() as f64,
        }
    }

    /// Population variance over paths (0 for deterministic values).
    pub fn variance(&self) -> f64 {
        match self {
            RandomVariable::Deterministic(_) => 0.0,
            RandomVariable::Stochastic(values) if values.is_empty() => f64::NAN,
            RandomVariable::Stochastic(values) => {
                squared_deviations(values, self.average()) / values.len() as f64
            }
        }
    }

    /// Unbiased sample variance over paths (0 for deterministic values or a
    /// single path).
    pub fn sample_variance(&self) -> f64 {
        match self {
            RandomVariable::Stochastic(values) if values.len() > 1 => {
                squared_deviations(values, self.average()) / (values.len() - 1) as f64
            }
            _ => 0.0,
        }
    }

    /// Standard error of the mean, `sqrt(sample_variance / n)`.
    pub fn standard_error(&self) -> f64 {
        match self {
            RandomVariable::Stochastic(values) if values.len() > 1 => {
                (self.sample_variance() / values.len() as f64).sqrt()
            }
            _ => 0.0,
        }
    }
}

impl From<f64> for RandomVariable {
    fn from(value: f64) -> Self {
        RandomVariable::Deterministic(value)
    }
}

impl From<Vec<f64>> for RandomVariable {
    fn from(values: Vec<f64>) -> Self {
        RandomVariable::Stochastic(values)
    }
}

fn sum(values: &[f64]) -> f64 {
    if values.len() >= PARALLEL_THRESHOLD {
        values.par_iter().sum()
    } else {
        values.iter().sum()
    }
}

fn squared_deviations(values: &[f64], mean: f64) -> f64 {
    if values.len() >= PARALLEL_THRESHOLD {
        values.par_iter().map(|&x| (x - mean) * (x - mean)).sum()
    } else {
        values.iter().map(|&x| (x - mean) * (x - mean)).sum()
    }
}
