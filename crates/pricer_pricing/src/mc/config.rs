//! Monte Carlo simulation configuration.
//!
//! # Examples
//!
//! ```
//! use pricer_pricing::mc::MonteCarloConfig;
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(20)
//!     .seed(3141)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.n_paths(), 10_000);
//! assert_eq!(config.seed(), 3141);
//! ```

use super::error::ConfigError;

/// Maximum number of simulated paths.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of uniform time steps.
pub const MAX_STEPS: usize = 10_000;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 3141;

/// Monte Carlo engine configuration.
///
/// * `n_paths` - number of simulated paths, in [1, 10_000_000]
/// * `n_steps` - number of uniform Euler steps up to the last observation
///   time, in [1, 10_000]; mandatory observation times are added on top
/// * `seed` - seed of the Brownian driver
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl MonteCarloConfig {
    /// Returns a builder; `n_paths` and `n_steps` are required.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of uniform time steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Seed of the Brownian driver.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates path and step counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of uniform time steps.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed (default [`DEFAULT_SEED`]).
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;
        let n_steps = self.n_steps.ok_or(ConfigError::InvalidParameter {
            name: "n_steps",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };
        config.validate()?;
        Ok(config)
    }
}
