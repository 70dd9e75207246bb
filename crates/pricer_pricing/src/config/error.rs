//! Error types for engine configuration.

use std::fmt;
use std::path::PathBuf;

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::mc::MAX_PATHS;

/// Configuration error for pricing engines.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, MAX_PATHS].
    InvalidPathCount(usize),
    /// Lattice with too few time steps.
    InvalidStepCount(usize),
    /// Finite-difference grid axis with too few nodes.
    InvalidGridSize {
        /// Axis name ("space" or "time").
        axis: &'static str,
        /// Requested node count.
        nodes: usize,
        /// Smallest admissible node count.
        min: usize,
    },
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, {}]",
                    count, MAX_PATHS
                )
            }
            Self::InvalidStepCount(count) => {
                write!(f, "Invalid step count {}: need at least 2", count)
            }
            Self::InvalidGridSize { axis, nodes, min } => {
                write!(
                    f,
                    "Invalid {} grid of {} nodes: need at least {}",
                    axis, nodes, min
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

/// Failure to load [`EngineSettings`](super::EngineSettings).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("cannot read settings file {path}: {source}")]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for the settings schema.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidGridSize {
            axis: "space",
            nodes: 2,
            min: 3,
        };
        assert_eq!(err.to_string(), "Invalid space grid of 2 nodes: need at least 3");

        let err = ConfigError::InvalidParameter {
            name: "s_max_multiplier",
            value: "must exceed 1".to_string(),
        };
        assert!(err.to_string().contains("s_max_multiplier"));
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = ConfigError::InvalidStepCount(1).into();
        assert!(matches!(err, PricingError::InvalidArgument(_)));
    }
}
