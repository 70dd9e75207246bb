//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for Monte Carlo
//! pricing simulations.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// How normal draws are generated across paths.
///
/// - `Antithetic`: the first half of the paths is drawn, the second half
///   reuses the negated draws
/// - `Plain`: every path is drawn independently
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Antithetic variates.
    #[default]
    Antithetic,
    /// Independent draws.
    Plain,
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances. The number of time
/// steps is not configured here; it follows from the trading schedule of the
/// priced note.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloConfig, Sampling};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_001)
///     .sampling(Sampling::Antithetic)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// // odd counts are rounded up to keep antithetic pairs whole
/// assert_eq!(config.n_paths(), 10_002);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths, always even.
    n_paths: usize,
    /// Seed of the path generator.
    seed: u64,
    /// Draw generation scheme.
    sampling: Sampling,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::{MonteCarloConfig, DEFAULT_SEED};
    ///
    /// let config = MonteCarloConfig::builder().n_paths(1000).build().unwrap();
    /// assert_eq!(config.seed(), DEFAULT_SEED);
    /// ```
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the sampling scheme.
    #[inline]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_paths` is odd
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_paths % 2 != 0 {
            return Err(ConfigError::InvalidParameter {
                name: "n_paths",
                value: format!("{} must be even", self.n_paths),
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloConfig, Sampling};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .sampling(Sampling::Plain)
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    sampling: Sampling,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]; odd values are
    ///   rounded up
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the sampling scheme.
    #[inline]
    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` not set or outside [1, 10_000_000]
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let requested = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;
        if requested == 0 || requested > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(requested));
        }

        let n_paths = if requested % 2 == 1 {
            let rounded = requested + 1;
            warn!(requested, rounded, "odd path count rounded up");
            rounded
        } else {
            requested
        };

        let config = MonteCarloConfig {
            n_paths,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            sampling: self.sampling,
        };

        config.validate()?;
        Ok(config)
    }
}
