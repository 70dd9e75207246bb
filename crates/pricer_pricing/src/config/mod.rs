//! Engine configuration management.
//!
//! [`EngineSettings`] collects the calendar and the resolution of every
//! numerical engine in one serde document, loaded from TOML. Every section is
//! optional; missing keys take the engine defaults.
//!
//! ```toml
//! [calendar]
//! annual_trading_days = 244
//! holidays = ["2024-10-01", "2024-10-02"]
//!
//! [lattice]
//! num_steps = 800
//!
//! [finite_difference]
//! n_space = 201
//! n_time = 201
//! s_max_multiplier = 4.0
//! scheme = "fully_implicit"
//!
//! [monte_carlo]
//! n_paths = 200000
//! seed = 7
//! sampling = "antithetic"
//! ```

mod error;

use std::path::Path;

use pricer_core::calendar::{CalendarSettings, HolidayCalendar};
use pricer_core::types::CalendarError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{ConfigError, SettingsError};

use crate::fd::{
    FdConfig, FiniteDifferenceScheme, DEFAULT_SPACE_NODES, DEFAULT_S_MAX_MULTIPLIER,
    DEFAULT_TIME_NODES,
};
use crate::lattice::{LatticeConfig, DEFAULT_LATTICE_STEPS};
use crate::mc::{MonteCarloConfig, Sampling, DEFAULT_SEED};

/// Default Monte Carlo path count of [`MonteCarloSettings`].
pub const DEFAULT_PATHS: usize = 100_000;

/// `[lattice]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeSettings {
    /// Number of tree steps.
    pub num_steps: usize,
}

impl Default for LatticeSettings {
    fn default() -> Self {
        Self {
            num_steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

impl LatticeSettings {
    /// Validated lattice configuration.
    pub fn to_config(&self) -> Result<LatticeConfig, ConfigError> {
        LatticeConfig::new(self.num_steps)
    }
}

/// `[finite_difference]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FdSettings {
    /// Spatial node count.
    pub n_space: usize,
    /// Time node count.
    pub n_time: usize,
    /// Upper spot boundary as a multiple of the strike.
    pub s_max_multiplier: f64,
    /// Time discretisation scheme.
    pub scheme: FiniteDifferenceScheme,
}

impl Default for FdSettings {
    fn default() -> Self {
        Self {
            n_space: DEFAULT_SPACE_NODES,
            n_time: DEFAULT_TIME_NODES,
            s_max_multiplier: DEFAULT_S_MAX_MULTIPLIER,
            scheme: FiniteDifferenceScheme::default(),
        }
    }
}

impl FdSettings {
    /// Validated grid configuration.
    pub fn to_config(&self) -> Result<FdConfig, ConfigError> {
        FdConfig::builder()
            .n_space(self.n_space)
            .n_time(self.n_time)
            .s_max_multiplier(self.s_max_multiplier)
            .scheme(self.scheme)
            .build()
    }
}

/// `[monte_carlo]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    /// Number of paths; odd values are rounded up.
    pub n_paths: usize,
    /// Generator seed.
    pub seed: u64,
    /// Sampling scheme.
    pub sampling: Sampling,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: DEFAULT_SEED,
            sampling: Sampling::default(),
        }
    }
}

impl MonteCarloSettings {
    /// Validated simulation configuration.
    pub fn to_config(&self) -> Result<MonteCarloConfig, ConfigError> {
        MonteCarloConfig::builder()
            .n_paths(self.n_paths)
            .seed(self.seed)
            .sampling(self.sampling)
            .build()
    }
}

/// Calendar and engine settings.
///
/// # Example
///
/// ```rust
/// use pricer_pricing::config::EngineSettings;
///
/// let settings = EngineSettings::from_toml_str(r#"
///     [lattice]
///     num_steps = 200
///
///     [monte_carlo]
///     n_paths = 5001
/// "#).unwrap();
///
/// assert_eq!(settings.lattice.to_config().unwrap().num_steps(), 200);
/// assert_eq!(settings.monte_carlo.to_config().unwrap().n_paths(), 5002);
/// assert_eq!(settings.finite_difference.n_space, 401);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Trading calendar.
    pub calendar: CalendarSettings,
    /// Binomial lattice.
    pub lattice: LatticeSettings,
    /// Finite-difference grid.
    pub finite_difference: FdSettings,
    /// Monte Carlo simulation.
    pub monte_carlo: MonteCarloSettings,
}

impl EngineSettings {
    /// Parses settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded engine settings");
        Ok(settings)
    }

    /// Builds the trading calendar.
    pub fn calendar(&self) -> Result<HolidayCalendar, CalendarError> {
        HolidayCalendar::from_settings(&self.calendar)
    }

    /// Validates every engine section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lattice.to_config()?;
        self.finite_difference.to_config()?;
        self.monte_carlo.to_config()?;
        Ok(())
    }
}
