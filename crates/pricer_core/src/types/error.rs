//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by contracts and pricing engines
//! - `DateError`: Errors from date construction and parsing
//! - `CalendarError`: Errors from trading calendar construction
//! - `InterpolationError`: Errors from interpolation operations
//! - `LinalgError`: Errors from banded linear solves

use thiserror::Error;

use crate::traits::Greek;

/// Categorised pricing errors.
///
/// Every fallible operation on a contract or engine reports one of these.
/// Numerical degeneracies (zero volatility, zero time to maturity) are not
/// errors; they propagate through the arithmetic as NaN or infinity.
///
/// # Variants
/// - `InvalidArgument`: An engine or contract was constructed from incompatible inputs
/// - `InvalidOperation`: The requested operation is not valid in the current state
/// - `UnsupportedGreek`: The engine does not provide the requested sensitivity
/// - `NumericalInstability`: A numerical routine could not produce a result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("exercise must be European".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: exercise must be European");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Construction-time validation fault.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid-state or unsupported-operation fault.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The engine does not implement this Greek.
    #[error("{greek} is not supported by {engine}")]
    UnsupportedGreek {
        /// The requested sensitivity
        greek: Greek,
        /// Name of the engine that was asked
        engine: &'static str,
    },

    /// A numerical routine broke down (e.g. singular pivot).
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Calendar construction failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Interpolation of engine state failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// Date construction failed.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl PricingError {
    /// Returns true if this error signals an unsupported Greek.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::traits::Greek;
    /// use pricer_core::types::PricingError;
    ///
    /// let err = PricingError::UnsupportedGreek { greek: Greek::Vanna, engine: "lattice" };
    /// assert!(err.is_unsupported());
    /// ```
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PricingError::UnsupportedGreek { .. })
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic left the representable range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Trading calendar errors.
///
/// # Examples
/// ```
/// use pricer_core::types::CalendarError;
///
/// let err = CalendarError::InvalidAnnualTradingDays(0);
/// assert!(format!("{}", err).contains("annual trading days"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The annual trading day count must be positive.
    #[error("Invalid annual trading days: {0}")]
    InvalidAnnualTradingDays(u32),
}

/// Interpolation-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Abscissae are not strictly increasing.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors from the tridiagonal solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Band lengths are inconsistent with the system size.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A pivot vanished during forward elimination.
    #[error("Singular tridiagonal system at row {row}")]
    Singular {
        /// Row where the zero pivot appeared
        row: usize,
    },
}

impl From<LinalgError> for PricingError {
    fn from(err: LinalgError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // Display formatting
    // ==========================================================

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidOperation("pricing engine not set".to_string());
        assert_eq!(err.to_string(), "Invalid operation: pricing engine not set");

        let err = PricingError::UnsupportedGreek {
            greek: Greek::Charm,
            engine: "finite-difference",
        };
        assert_eq!(err.to_string(), "Charm is not supported by finite-difference");
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad");
    }

    #[test]
    fn test_interpolation_error_display() {
        let err = InterpolationError::InsufficientData { got: 1, need: 2 };
        assert!(err.to_string().contains("got 1"));
    }

    // ==========================================================
    // Conversions into PricingError
    // ==========================================================

    #[test]
    fn test_linalg_error_maps_to_numerical_instability() {
        let err: PricingError = LinalgError::Singular { row: 3 }.into();
        assert!(matches!(err, PricingError::NumericalInstability(ref m) if m.contains("row 3")));
    }

    #[test]
    fn test_interpolation_error_is_transparent() {
        let inner = InterpolationError::OutOfBounds {
            x: -1.0,
            min: 0.0,
            max: 1.0,
        };
        let err: PricingError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_calendar_error_conversion() {
        let err: PricingError = CalendarError::InvalidAnnualTradingDays(0).into();
        assert!(matches!(err, PricingError::Calendar(_)));
        assert!(!err.is_unsupported());
    }
}
