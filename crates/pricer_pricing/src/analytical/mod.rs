//! Closed-form valuation of European vanilla options.
//!
//! [`AnalyticEuropeanEngine`] evaluates the generalised Black-Scholes-Merton
//! formulas of `pricer_models::analytical` with the time to maturity taken
//! from the trading calendar. It provides all eight valuation quantities and
//! serves as the reference for the numerical engines.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::calendar::HolidayCalendar;
//! use pricer_core::traits::PricingEngine;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{ContractTerms, ExerciseType, OptionType, VanillaContract};
//! use pricer_pricing::analytical::AnalyticEuropeanEngine;
//! use pricer_pricing::context::ValuationContext;
//!
//! let calendar = Arc::new(HolidayCalendar::weekends_only(262).unwrap());
//! let context = ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), calendar);
//! let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
//! let call = VanillaContract::new(terms, OptionType::Call, 100.0, ExerciseType::European).unwrap();
//!
//! let engine = AnalyticEuropeanEngine::new(call, context).unwrap();
//! assert!((engine.delta_at(100.0).unwrap() - 0.6368).abs() < 1e-4);
//! ```

mod engine;

pub use engine::AnalyticEuropeanEngine;
