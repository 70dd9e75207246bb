//! Core traits shared across the workspace.
//!
//! - [`PricingEngine`]: the eight spot-dependent valuation operations
//! - [`Greek`]: identifiers for those operations
//! - [`Float`]: generic floating-point bound used by numerical helpers

pub use num_traits::Float;

mod engine;

pub use engine::{Greek, PricingEngine};
