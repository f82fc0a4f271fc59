//! Time discretisation for Monte Carlo simulation.
//!
//! A [`TimeDiscretization`] is a strictly increasing sequence of times
//! (in years) starting at the valuation date `t = 0`. Simulated processes are
//! only observable on the points of their grid; lookups for any other time
//! fail with [`SimulationError::TimeNotInGrid`] instead of interpolating.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::TimeDiscretization;
//!
//! // Ten uniform steps up to T2 = 2.0, with the fixing date T1 = 1.05 added
//! let grid = TimeDiscretization::uniform(2.0, 10)
//!     .unwrap()
//!     .with_points(&[1.05])
//!     .unwrap();
//!
//! assert_eq!(grid.len(), 12);
//! assert_eq!(grid.time_index(1.05).unwrap(), 6);
//! assert!(grid.time_index(0.37).is_err());
//! ```

use super::error::SimulationError;

/// Absolute tolerance used when comparing model times.
pub const TIME_TOLERANCE: f64 = 1e-10;

/// Returns `true` if two times coincide within [`TIME_TOLERANCE`].
#[inline]
pub fn times_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIME_TOLERANCE
}

/// Strictly increasing simulation time grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDiscretization {
    times: Vec<f64>,
}

impl TimeDiscretization {
    /// Creates a grid from explicit times.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidGrid` if the grid is empty, does not
    /// start at zero, contains non-finite values or is not strictly
    /// increasing.
    pub fn new(times: Vec<f64>) -> Result<Self, SimulationError> {
        let first = *times
            .first()
            .ok_or_else(|| SimulationError::InvalidGrid("grid is empty".to_string()))?;

        if !times_match(first, 0.0) {
            return Err(SimulationError::InvalidGrid(format!(
                "grid must start at 0, got {}",
                first
            )));
        }

        if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
            return Err(SimulationError::InvalidGrid(format!(
                "non-finite time {}",
                bad
            )));
        }

        for (i, pair) in times.windows(2).enumerate() {
            if pair[1] - pair[0] <= TIME_TOLERANCE {
                return Err(SimulationError::InvalidGrid(format!(
                    "times not strictly increasing at index {}",
                    i + 1
                )));
            }
        }

        Ok(Self { times })
    }

    /// Creates a uniform grid `0, dt, 2dt, ..., end` with `n_steps` steps.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidGrid` if `end` is not positive or
    /// `n_steps` is zero.
    pub fn uniform(end: f64, n_steps: usize) -> Result<Self, SimulationError> {
        if !(end > 0.0 && end.is_finite()) {
            return Err(SimulationError::InvalidGrid(format!(
                "end time must be positive, got {}",
                end
            )));
        }
        if n_steps == 0 {
            return Err(SimulationError::InvalidGrid(
                "number of steps must be positive".to_string(),
            ));
        }

        let dt = end / n_steps as f64;
        let mut times: Vec<f64> = (0..n_steps).map(|i| i as f64 * dt).collect();
        // Pin the last point so that `end` is found exactly
        times.push(end);

        Self::new(times)
    }

    /// Returns a new grid containing all current points plus `points`.
    ///
    /// Points already on the grid (within [`TIME_TOLERANCE`]) are not
    /// duplicated.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidGrid` if a point is negative or not
    /// finite.
    pub fn with_points(&self, points: &[f64]) -> Result<Self, SimulationError> {
        let mut times = self.times.clone();
        for &point in points {
            if !point.is_finite() || point < 0.0 {
                return Err(SimulationError::InvalidGrid(format!(
                    "cannot add time {}",
                    point
                )));
            }
            if !times.iter().any(|&t| times_match(t, point)) {
                times.push(point);
            }
        }
        times.sort_by(f64::total_cmp);

        Self::new(times)
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the grid has no points (never true for a valid grid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of time steps (`len() - 1`).
    #[inline]
    pub fn number_of_time_steps(&self) -> usize {
        self.times.len().saturating_sub(1)
    }

    /// All grid points.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Last point of the grid.
    #[inline]
    pub fn last_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Time at `index`.
    pub fn time(&self, index: usize) -> Result<f64, SimulationError> {
        self.times
            .get(index)
            .copied()
            .ok_or(SimulationError::TimeIndexOutOfRange {
                index,
                len: self.times.len(),
            })
    }

    /// Length of the step starting at `index`, i.e. `t[index + 1] - t[index]`.
    pub fn time_step(&self, index: usize) -> Result<f64, SimulationError> {
        if index + 1 >= self.times.len() {
            return Err(SimulationError::TimeIndexOutOfRange {
                index,
                len: self.number_of_time_steps(),
            });
        }
        Ok(self.times[index + 1] - self.times[index])
    }

    /// Index of `time` on the grid.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::TimeNotInGrid` if no grid point lies within
    /// [`TIME_TOLERANCE`] of `time`.
    pub fn time_index(&self, time: f64) -> Result<usize, SimulationError> {
        let candidate = self.times.partition_point(|&t| t < time - TIME_TOLERANCE);
        match self.times.get(candidate) {
            Some(&t) if times_match(t, time) => Ok(candidate),
            _ => Err(SimulationError::TimeNotInGrid { time }),
        }
    }
}
