//! # pricer_core: Foundation Layer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricing workspace, providing:
//! - Date and day count types (`types::time`)
//! - Error types: `PricingError`, `DateError`, `CalendarError`, ... (`types::error`)
//! - The trading calendar service (`calendar`)
//! - Linear interpolation and tridiagonal solves (`math`)
//! - The `PricingEngine` trait and `Greek` identifiers (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::calendar::{HolidayCalendar, TradingCalendar};
//! use pricer_core::types::Date;
//!
//! let calendar = HolidayCalendar::weekends_only(252).unwrap();
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 12, 31).unwrap();
//!
//! let t = calendar.years_between(start, end);
//! assert!(t > 1.0 && t < 1.1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, Greek and calendar settings

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod math;
pub mod traits;
pub mod types;
