//! Instrument error types.
//!
//! This module provides structured error handling for contract
//! construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidBarriers`: Knock-in barrier does not lie below the autocall barrier
/// - `InvalidSchedule`: Observation dates are empty, unordered or past maturity
/// - `MissingField`: A required builder field was not set
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Knock-in barrier at or above the autocall barrier.
    #[error("Invalid barriers: knock-in {knock_in} must lie below autocall {autocall}")]
    InvalidBarriers {
        /// Knock-in level
        knock_in: f64,
        /// Autocall level
        autocall: f64,
    },

    /// Malformed observation schedule.
    #[error("Invalid observation schedule: {0}")]
    InvalidSchedule(String),

    /// A required field was not provided to a builder.
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = InstrumentError::InvalidBarriers {
            knock_in: 1.1,
            autocall: 1.0,
        };
        assert!(err.to_string().contains("knock-in 1.1"));
        assert_eq!(
            InstrumentError::MissingField("terms").to_string(),
            "Missing field: terms"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = InstrumentError::InvalidStrike { strike: 0.0 }.into();
        assert!(matches!(err, PricingError::InvalidArgument(msg) if msg.contains("K = 0")));
    }
}
