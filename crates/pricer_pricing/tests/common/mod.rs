//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pricer_core::calendar::HolidayCalendar;
use pricer_core::types::Date;
use pricer_models::instruments::{ContractTerms, ExerciseType, OptionType, VanillaContract};
use pricer_pricing::context::ValuationContext;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Weekends-only calendar with 262 trading days a year, valued on Monday
/// 2024-01-01, so that 2025-01-01 is exactly one year out.
pub fn context() -> ValuationContext {
    let calendar = HolidayCalendar::weekends_only(262).unwrap();
    ValuationContext::new(date(2024, 1, 1), Arc::new(calendar))
}

/// One-year terms: σ = 20%, r = 5%, q = 0.
pub fn terms() -> ContractTerms {
    ContractTerms::new(date(2025, 1, 1), 0.2, 0.05, 0.0)
}

pub fn vanilla(option_type: OptionType, exercise: ExerciseType) -> VanillaContract {
    VanillaContract::new(terms(), option_type, 100.0, exercise).unwrap()
}

/// First trading day of each month, Feb 2024 to Jan 2025.
pub fn monthly_observations() -> Vec<Date> {
    vec![
        date(2024, 2, 1),
        date(2024, 3, 1),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 6, 3),
        date(2024, 7, 1),
        date(2024, 8, 1),
        date(2024, 9, 2),
        date(2024, 10, 1),
        date(2024, 11, 1),
        date(2024, 12, 2),
        date(2025, 1, 1),
    ]
}
