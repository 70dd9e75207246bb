//! Core date and error types.
//!
//! This module provides:
//! - `time`: [`Date`] and [`DayCountConvention`]
//! - `error`: Structured error types for pricing, dates, calendars, interpolation and linear algebra
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod time;

pub use error::{CalendarError, DateError, InterpolationError, LinalgError, PricingError};
pub use time::{Date, DayCountConvention};
