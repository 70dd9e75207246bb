//! Binomial lattice configuration.

use crate::config::ConfigError;

/// Default number of lattice time steps.
pub const DEFAULT_LATTICE_STEPS: usize = 500;

/// Lattice resolution.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::LatticeConfig;
///
/// let config = LatticeConfig::new(200).unwrap();
/// assert_eq!(config.num_steps(), 200);
/// assert!(LatticeConfig::new(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeConfig {
    num_steps: usize,
}

impl LatticeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidStepCount` for fewer than 2 steps; gamma and theta
    /// are read off the second level of the tree.
    pub fn new(num_steps: usize) -> Result<Self, ConfigError> {
        let config = Self { num_steps };
        config.validate()?;
        Ok(config)
    }

    /// Number of time steps N.
    #[inline]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_steps < 2 {
            return Err(ConfigError::InvalidStepCount(self.num_steps));
        }
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            num_steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_shallow_trees() {
        assert_eq!(LatticeConfig::new(0), Err(ConfigError::InvalidStepCount(0)));
        assert!(LatticeConfig::new(2).is_ok());
    }

    #[test]
    fn test_default() {
        assert_eq!(LatticeConfig::default().num_steps(), DEFAULT_LATTICE_STEPS);
        assert!(LatticeConfig::default().validate().is_ok());
    }
}
