//! Finite-difference configuration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Default number of spatial nodes.
pub const DEFAULT_SPACE_NODES: usize = 401;
/// Default number of time nodes.
pub const DEFAULT_TIME_NODES: usize = 401;
/// Default upper spot boundary as a multiple of the strike.
pub const DEFAULT_S_MAX_MULTIPLIER: f64 = 4.0;

/// Time discretisation scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiniteDifferenceScheme {
    /// Backward Euler in time; unconditionally stable.
    #[default]
    FullyImplicit,
    /// Trapezoidal rule in time. Accepted by configuration but rejected by
    /// the solver.
    CrankNicolson,
}

impl FiniteDifferenceScheme {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            FiniteDifferenceScheme::FullyImplicit => "fully implicit",
            FiniteDifferenceScheme::CrankNicolson => "Crank-Nicolson",
        }
    }
}

/// Grid resolution and scheme for [`FdVanillaEngine`](super::FdVanillaEngine).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::fd::{FdConfig, FiniteDifferenceScheme};
///
/// let config = FdConfig::builder()
///     .n_space(201)
///     .n_time(201)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_space(), 201);
/// assert_eq!(config.s_max_multiplier(), 4.0);
/// assert_eq!(config.scheme(), FiniteDifferenceScheme::FullyImplicit);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FdConfig {
    n_space: usize,
    n_time: usize,
    s_max_multiplier: f64,
    scheme: FiniteDifferenceScheme,
}

impl FdConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> FdConfigBuilder {
        FdConfigBuilder::default()
    }

    /// Spatial node count.
    #[inline]
    pub fn n_space(&self) -> usize {
        self.n_space
    }

    /// Time node count.
    #[inline]
    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// Upper spot boundary as a multiple of the strike.
    #[inline]
    pub fn s_max_multiplier(&self) -> f64 {
        self.s_max_multiplier
    }

    /// Time discretisation scheme.
    #[inline]
    pub fn scheme(&self) -> FiniteDifferenceScheme {
        self.scheme
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `n_space` below 3 (no interior node)
    /// - `n_time` below 2
    /// - `s_max_multiplier` not strictly above 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_space < 3 {
            return Err(ConfigError::InvalidGridSize {
                axis: "space",
                nodes: self.n_space,
                min: 3,
            });
        }
        if self.n_time < 2 {
            return Err(ConfigError::InvalidGridSize {
                axis: "time",
                nodes: self.n_time,
                min: 2,
            });
        }
        if !(self.s_max_multiplier.is_finite() && self.s_max_multiplier > 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "s_max_multiplier",
                value: format!("{} must be finite and exceed 1", self.s_max_multiplier),
            });
        }
        Ok(())
    }
}

impl Default for FdConfig {
    fn default() -> Self {
        Self {
            n_space: DEFAULT_SPACE_NODES,
            n_time: DEFAULT_TIME_NODES,
            s_max_multiplier: DEFAULT_S_MAX_MULTIPLIER,
            scheme: FiniteDifferenceScheme::FullyImplicit,
        }
    }
}

/// Builder for [`FdConfig`]; unset fields take the defaults.
#[derive(Clone, Debug, Default)]
pub struct FdConfigBuilder {
    n_space: Option<usize>,
    n_time: Option<usize>,
    s_max_multiplier: Option<f64>,
    scheme: FiniteDifferenceScheme,
}

impl FdConfigBuilder {
    /// Sets the spatial node count.
    #[inline]
    pub fn n_space(mut self, n_space: usize) -> Self {
        self.n_space = Some(n_space);
        self
    }

    /// Sets the time node count.
    #[inline]
    pub fn n_time(mut self, n_time: usize) -> Self {
        self.n_time = Some(n_time);
        self
    }

    /// Sets the upper boundary multiple of the strike.
    #[inline]
    pub fn s_max_multiplier(mut self, multiplier: f64) -> Self {
        self.s_max_multiplier = Some(multiplier);
        self
    }

    /// Sets the time discretisation scheme.
    #[inline]
    pub fn scheme(mut self, scheme: FiniteDifferenceScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<FdConfig, ConfigError> {
        let config = FdConfig {
            n_space: self.n_space.unwrap_or(DEFAULT_SPACE_NODES),
            n_time: self.n_time.unwrap_or(DEFAULT_TIME_NODES),
            s_max_multiplier: self.s_max_multiplier.unwrap_or(DEFAULT_S_MAX_MULTIPLIER),
            scheme: self.scheme,
        };
        config.validate()?;
        Ok(config)
    }
}
