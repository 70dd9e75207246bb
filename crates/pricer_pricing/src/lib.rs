//! # pricer_pricing: Engine Layer
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns the contracts of `pricer_models` into prices and
//! Greeks. Four independent methods implement the
//! [`PricingEngine`](pricer_core::traits::PricingEngine) trait:
//!
//! | Engine | Contract | Greeks |
//! |--------|----------|--------|
//! | [`analytical::AnalyticEuropeanEngine`] | European vanilla | all eight |
//! | [`lattice::CrrBinomialEngine`] | European / American vanilla | value to rho |
//! | [`fd::FdVanillaEngine`] | European vanilla | value, delta, gamma, theta |
//! | [`mc::McSnowballEngine`] | autocallable note | value, delta, gamma |
//!
//! Greeks an engine does not provide return
//! `PricingError::UnsupportedGreek`.
//!
//! ## Time to Maturity
//!
//! Every engine takes a [`context::ValuationContext`]: the valuation date and
//! a shared trading calendar. Year fractions are trading days divided by the
//! calendar's annual trading day count.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::calendar::HolidayCalendar;
//! use pricer_core::traits::{Greek, PricingEngine};
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{ContractTerms, ExerciseType, OptionType, VanillaContract};
//! use pricer_pricing::context::ValuationContext;
//! use pricer_pricing::instrument::PricedContract;
//! use pricer_pricing::lattice::{CrrBinomialEngine, LatticeConfig};
//!
//! let calendar = Arc::new(HolidayCalendar::weekends_only(262).unwrap());
//! let context = ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), calendar);
//! let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
//! let put = VanillaContract::new(terms, OptionType::Put, 100.0, ExerciseType::American).unwrap();
//!
//! let mut priced = PricedContract::new(put.clone());
//! priced.bind_engine(CrrBinomialEngine::new(put, context, LatticeConfig::new(200).unwrap()).unwrap());
//!
//! assert!(priced.value_at(100.0).unwrap() > 6.0);
//! assert!(priced.greek_or_nan(Greek::Vanna, 100.0).unwrap().is_nan());
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (lazy state builds at `debug`, per
//! valuation at `trace`) and never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod config;
pub mod context;
pub mod fd;
pub mod instrument;
pub mod lattice;
pub mod mc;
pub mod pool;
pub mod rng;
