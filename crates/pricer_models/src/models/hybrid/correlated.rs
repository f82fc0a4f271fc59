//! Correlation structures for multi-factor lognormal models.
//!
//! This module turns prescribed pairwise correlations into factor loadings
//! on independent Brownian drivers.
//!
//! ## Mathematical Background
//!
//! Given `n` independent Brownian motions `W = [W1, ..., Wn]`, correlated
//! drivers `B = [B1, ..., Bn]` are obtained as
//!
//! ```text
//! B = L * W
//! ```
//!
//! where `L` is a square root of the correlation matrix `C`:
//! ```text
//! C = L * L^T
//! ```
//!
//! Each row of `L` must have unit Euclidean norm so that every `B_i` is
//! itself a standard Brownian motion.
//!
//! ## Cross-Currency Convention
//!
//! For the three drivers (domestic rate, foreign rate, forward FX) the
//! loadings are fixed to the lower-triangular choice
//!
//! ```text
//! L = | 1        0                0        |
//!     | ρ_df     sqrt(1 - ρ_df²)  0        |
//!     | ρ_xd     a                sqrt(1 - ρ_xd² - a²) |
//!
//! a = (ρ_xf - ρ_df ρ_xd) / sqrt(1 - ρ_df²)
//! ```
//!
//! Any other square root of `C` would do; this one is kept as the fixed
//! convention of the library.
//!
//! ## Usage
//!
//! ```
//! use pricer_models::models::hybrid::CrossCurrencyCorrelations;
//!
//! let correlations = CrossCurrencyCorrelations::new(0.3_f64, -0.2, 0.1);
//! let loadings = correlations.decompose().unwrap();
//!
//! // Every row has unit norm
//! for i in 0..3 {
//!     assert!((loadings.row_norm(i) - 1.0).abs() < 1e-12);
//! }
//!
//! // L * L^T reproduces the correlation matrix
//! let matrix = correlations.matrix().unwrap();
//! assert!(loadings.max_reconstruction_error(&matrix) < 1e-12);
//! ```

use pricer_core::traits::Float;
use thiserror::Error;

/// Component index of the domestic forward rate.
pub const DOMESTIC: usize = 0;
/// Component index of the foreign forward rate.
pub const FOREIGN: usize = 1;
/// Component index of the forward FX rate.
pub const FX_FORWARD: usize = 2;

/// Error types for correlation operations.
///
/// Every variant is a domain error: invalid correlation input is rejected
/// at construction, before any simulation takes place.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CorrelationError {
    /// Matrix is not positive definite
    #[error("Correlation matrix is not positive definite")]
    NotPositiveDefinite,

    /// Pairwise correlations admit no valid loading matrix
    #[error("Correlations are not jointly consistent: third loading radicand is {radicand}")]
    NotPositiveSemiDefinite {
        /// Value of `1 - ρ_xd² - a²`
        radicand: f64,
    },

    /// Domestic/foreign correlation of exactly ±1
    #[error("Degenerate domestic/foreign correlation {value}: must satisfy |ρ| < 1")]
    DegenerateCorrelation {
        /// The degenerate correlation value
        value: f64,
    },

    /// Matrix dimensions are invalid
    #[error("Invalid matrix dimensions: expected {expected} elements, got {got}")]
    InvalidDimensions {
        /// Expected number of elements
        expected: usize,
        /// Number of elements provided
        got: usize,
    },

    /// Diagonal elements are not 1.0
    #[error("Diagonal element at index {index} is {value}, expected 1.0")]
    InvalidDiagonal {
        /// Diagonal index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Matrix is not symmetric
    #[error("Matrix is not symmetric at ({i}, {j})")]
    NotSymmetric {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
    },

    /// Correlation value out of range [-1, 1]
    #[error("Correlation at ({i}, {j}) is {value}, must be in [-1, 1]")]
    OutOfRange {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
        /// Offending value
        value: f64,
    },
}

/// Correlation matrix with validation and Cholesky decomposition.
///
/// A correlation matrix must satisfy:
/// - Square and symmetric
/// - Diagonal elements equal to 1.0
/// - Off-diagonal elements in [-1, 1]
/// - Positive semi-definite (for Cholesky: positive definite)
#[derive(Clone, Debug)]
pub struct CorrelationMatrix<T: Float> {
    /// Matrix elements in row-major order
    data: Vec<T>,
    /// Matrix dimension (n x n)
    dim: usize,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Create a new correlation matrix from flat array (row-major).
    ///
    /// # Arguments
    ///
    /// * `data` - Matrix elements in row-major order (n*n elements)
    /// * `dim` - Matrix dimension (n)
    ///
    /// # Validation
    ///
    /// - Must have exactly dim*dim elements
    /// - Diagonal elements must be 1.0
    /// - Must be symmetric
    /// - Off-diagonal elements must be in [-1, 1]
    pub fn new(data: &[T], dim: usize) -> Result<Self, CorrelationError> {
        let expected = dim * dim;
        if data.len() != expected {
            return Err(CorrelationError::InvalidDimensions {
                expected,
                got: data.len(),
            });
        }

        let one = T::one();
        let epsilon = T::from(1e-10).unwrap_or(T::zero());

        for i in 0..dim {
            let diag = data[i * dim + i];
            if (diag - one).abs() > epsilon {
                return Err(CorrelationError::InvalidDiagonal {
                    index: i,
                    value: diag.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        for i in 0..dim {
            for j in (i + 1)..dim {
                let val_ij = data[i * dim + j];
                let val_ji = data[j * dim + i];

                if (val_ij - val_ji).abs() > epsilon {
                    return Err(CorrelationError::NotSymmetric { i, j });
                }

                if !in_unit_range(val_ij) {
                    return Err(CorrelationError::OutOfRange {
                        i,
                        j,
                        value: val_ij.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Get matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get element at (i, j).
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.dim + j]
    }

    /// Compute Cholesky decomposition (lower triangular L where C = L * L^T).
    ///
    /// # Returns
    ///
    /// `Ok(CholeskyFactor)` if decomposition succeeds (matrix is positive definite),
    /// `Err(CorrelationError::NotPositiveDefinite)` otherwise.
    pub fn cholesky(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let n = self.dim;
        let mut lower = vec![T::zero(); n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::zero();

                if j == i {
                    for k in 0..j {
                        let l_jk = lower[j * n + k];
                        sum = sum + l_jk * l_jk;
                    }
                    let diag = self.get(j, j) - sum;
                    if diag <= T::zero() {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[j * n + j] = diag.sqrt();
                } else {
                    for k in 0..j {
                        sum = sum + lower[i * n + k] * lower[j * n + k];
                    }
                    let l_jj = lower[j * n + j];
                    if l_jj <= T::zero() {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[i * n + j] = (self.get(i, j) - sum) / l_jj;
                }
            }
        }

        Ok(CholeskyFactor { data: lower, dim: n })
    }
}

/// Lower triangular square root of a correlation matrix.
///
/// Rows are indexed by asset, columns by independent driver.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor<T: Float> {
    /// Lower triangular matrix elements (row-major)
    data: Vec<T>,
    /// Matrix dimension
    dim: usize,
}

impl<T: Float> CholeskyFactor<T> {
    /// Get matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get element at (i, j).
    ///
    /// Returns zero for upper triangular elements (j > i).
    pub fn get(&self, i: usize, j: usize) -> T {
        if j > i {
            T::zero()
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Loadings of asset `i` on every independent driver.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Euclidean norm of row `i`.
    pub fn row_norm(&self, i: usize) -> T {
        self.row(i)
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Largest absolute entry of `L * L^T - C`.
    pub fn max_reconstruction_error(&self, matrix: &CorrelationMatrix<T>) -> T {
        let n = self.dim.min(matrix.dim());
        let mut max_error = T::zero();
        for i in 0..n {
            for j in 0..n {
                let reconstructed = self
                    .row(i)
                    .iter()
                    .zip(self.row(j))
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
                max_error = max_error.max((reconstructed - matrix.get(i, j)).abs());
            }
        }
        max_error
    }
}

/// Pairwise correlations of the three cross-currency drivers.
///
/// * `domestic_foreign` - between the domestic and foreign rate drivers
/// * `fx_domestic` - between the forward FX and domestic rate drivers
/// * `fx_foreign` - between the forward FX and foreign rate drivers
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossCurrencyCorrelations<T: Float> {
    /// Correlation between the domestic and foreign rate drivers
    pub domestic_foreign: T,
    /// Correlation between the forward FX and domestic rate drivers
    pub fx_domestic: T,
    /// Correlation between the forward FX and foreign rate drivers
    pub fx_foreign: T,
}

impl<T: Float> CrossCurrencyCorrelations<T> {
    /// Creates the correlation triple without validation.
    pub fn new(domestic_foreign: T, fx_domestic: T, fx_foreign: T) -> Self {
        Self {
            domestic_foreign,
            fx_domestic,
            fx_foreign,
        }
    }

    /// Uncorrelated drivers.
    pub fn uncorrelated() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// The implied 3x3 correlation matrix, ordered (domestic, foreign, FX).
    pub fn matrix(&self) -> Result<CorrelationMatrix<T>, CorrelationError> {
        let one = T::one();
        #[rustfmt::skip]
        let data = [
            one,                   self.domestic_foreign, self.fx_domestic,
            self.domestic_foreign, one,                   self.fx_foreign,
            self.fx_domestic,      self.fx_foreign,       one,
        ];
        CorrelationMatrix::new(&data, 3)
    }

    /// Decomposes the correlations into unit-norm loadings on three
    /// independent drivers (see the module documentation for the convention).
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if any correlation lies outside [-1, 1]
    /// - `DegenerateCorrelation` if `|domestic_foreign| = 1`
    /// - `NotPositiveSemiDefinite` if the third row cannot be normalised
    pub fn decompose(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let pairs = [
            (DOMESTIC, FOREIGN, self.domestic_foreign),
            (DOMESTIC, FX_FORWARD, self.fx_domestic),
            (FOREIGN, FX_FORWARD, self.fx_foreign),
        ];
        for (i, j, value) in pairs {
            if !in_unit_range(value) {
                return Err(CorrelationError::OutOfRange {
                    i,
                    j,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let zero = T::zero();
        let one = T::one();
        let rho_df = self.domestic_foreign;
        let rho_xd = self.fx_domestic;
        let rho_xf = self.fx_foreign;

        let foreign_diag_sq = one - rho_df * rho_df;
        if foreign_diag_sq <= zero {
            return Err(CorrelationError::DegenerateCorrelation {
                value: rho_df.to_f64().unwrap_or(f64::NAN),
            });
        }
        let foreign_diag = foreign_diag_sq.sqrt();

        let fx_on_foreign = (rho_xf - rho_df * rho_xd) / foreign_diag;
        let radicand = one - rho_xd * rho_xd - fx_on_foreign * fx_on_foreign;
        let tolerance = T::from(1e-12).unwrap_or(zero);
        if radicand < -tolerance {
            return Err(CorrelationError::NotPositiveSemiDefinite {
                radicand: radicand.to_f64().unwrap_or(f64::NAN),
            });
        }
        // Rounding noise around a singular matrix
        let fx_diag = radicand.max(zero).sqrt();

        #[rustfmt::skip]
        let data = vec![
            one,    zero,          zero,
            rho_df, foreign_diag,  zero,
            rho_xd, fx_on_foreign, fx_diag,
        ];

        Ok(CholeskyFactor { data, dim: 3 })
    }
}

fn in_unit_range<T: Float>(value: T) -> bool {
    value >= -T::one() && value <= T::one()
}
