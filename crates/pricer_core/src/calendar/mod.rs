//! Trading calendar service.
//!
//! Engines convert calendar dates into year fractions by counting trading
//! days, i.e. days that are neither weekends nor listed holidays, and
//! dividing by the calendar's annual trading day count.
//!
//! - [`TradingCalendar`]: trait with provided counting and enumeration methods
//! - [`HolidayCalendar`]: concrete calendar over an explicit holiday set
//! - [`CalendarSettings`]: serialisable description of a holiday calendar
//!
//! Calendars are plain values. Construct one explicitly and share it
//! read-only (typically behind an `Arc`) with every engine that needs it.
//!
//! # Examples
//!
//! ```
//! use pricer_core::calendar::{HolidayCalendar, TradingCalendar};
//! use pricer_core::types::Date;
//!
//! let new_year = Date::from_ymd(2024, 1, 1).unwrap();
//! let calendar = HolidayCalendar::new([new_year], 252).unwrap();
//!
//! let start = Date::from_ymd(2023, 12, 29).unwrap(); // Friday
//! let end = Date::from_ymd(2024, 1, 5).unwrap(); // Friday
//!
//! assert!(!calendar.is_trading_day(new_year));
//! assert_eq!(calendar.count_trading_days(start, end), 4);
//! assert_eq!(calendar.trading_days(start, end).len(), 5);
//! ```

mod holiday;

pub use holiday::{CalendarSettings, HolidayCalendar};

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::ops::Bound::{Excluded, Included};

use crate::types::Date;

/// Source of trading-day information.
///
/// Implementors supply the holiday set and the annual trading day count;
/// everything else is derived.
pub trait TradingCalendar: Debug + Send + Sync {
    /// Non-weekend closures of the market.
    fn holidays(&self) -> &BTreeSet<Date>;

    /// Number of trading days that make up one year.
    fn annual_trading_days(&self) -> u32;

    /// Returns true if `date` is neither a weekend nor a holiday.
    fn is_trading_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays().contains(&date)
    }

    /// Counts trading days `d` with `start < d <= end`.
    ///
    /// The count is negated when `end` precedes `start`.
    fn count_trading_days(&self, start: Date, end: Date) -> i64 {
        if end < start {
            return -self.count_trading_days(end, start);
        }

        let span = end - start;
        let full_weeks = span / 7;
        let first_weekday = i64::from(start.weekday().num_days_from_monday());

        let tail = (1..=span % 7)
            .filter(|offset| (first_weekday + offset) % 7 < 5)
            .count() as i64;

        let closed = self
            .holidays()
            .range((Excluded(start), Included(end)))
            .filter(|d| !d.is_weekend())
            .count() as i64;

        full_weeks * 5 + tail - closed
    }

    /// All trading days in `[start, end]`, ascending, both ends included.
    fn trading_days(&self, start: Date, end: Date) -> Vec<Date> {
        start
            .days_through(end)
            .filter(|d| self.is_trading_day(*d))
            .collect()
    }

    /// Trading-day year fraction between two dates.
    #[inline]
    fn years_between(&self, start: Date, end: Date) -> f64 {
        self.count_trading_days(start, end) as f64 / f64::from(self.annual_trading_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn weekends_only() -> HolidayCalendar {
        HolidayCalendar::weekends_only(252).unwrap()
    }

    // ==========================================================
    // Trading day predicate
    // ==========================================================

    #[test]
    fn test_is_trading_day() {
        let cal = HolidayCalendar::new([date(2024, 12, 25)], 252).unwrap();
        assert!(cal.is_trading_day(date(2024, 12, 24)));
        assert!(!cal.is_trading_day(date(2024, 12, 25)));
        assert!(!cal.is_trading_day(date(2024, 12, 28)));
    }

    // ==========================================================
    // Counting
    // ==========================================================

    #[test]
    fn test_count_same_week() {
        // Monday to Friday excludes the Monday itself
        assert_eq!(weekends_only().count_trading_days(date(2024, 1, 1), date(2024, 1, 5)), 4);
    }

    #[test]
    fn test_count_over_weekend() {
        // Saturday to Monday counts only the Monday
        assert_eq!(weekends_only().count_trading_days(date(2024, 1, 6), date(2024, 1, 8)), 1);
        // Sunday to Saturday counts the five weekdays between
        assert_eq!(weekends_only().count_trading_days(date(2024, 1, 7), date(2024, 1, 13)), 5);
    }

    #[test]
    fn test_count_full_year() {
        assert_eq!(weekends_only().count_trading_days(date(2024, 1, 1), date(2025, 1, 1)), 262);
    }

    #[test]
    fn test_count_ignores_weekend_holidays() {
        let cal = HolidayCalendar::new([date(2024, 1, 6), date(2024, 1, 3)], 252).unwrap();
        assert_eq!(cal.count_trading_days(date(2024, 1, 1), date(2024, 1, 8)), 4);
    }

    #[test]
    fn test_count_excludes_holiday_on_start() {
        let cal = HolidayCalendar::new([date(2024, 1, 1)], 252).unwrap();
        assert_eq!(cal.count_trading_days(date(2024, 1, 1), date(2024, 1, 5)), 4);
    }

    #[test]
    fn test_count_reversed_is_negative() {
        let cal = weekends_only();
        assert_eq!(cal.count_trading_days(date(2024, 1, 5), date(2024, 1, 1)), -4);
        assert_eq!(cal.count_trading_days(date(2024, 1, 5), date(2024, 1, 5)), 0);
    }

    // ==========================================================
    // Enumeration and year fractions
    // ==========================================================

    #[test]
    fn test_trading_days_inclusive() {
        let days = weekends_only().trading_days(date(2024, 1, 5), date(2024, 1, 8));
        assert_eq!(days, vec![date(2024, 1, 5), date(2024, 1, 8)]);
    }

    #[test]
    fn test_years_between() {
        let cal = HolidayCalendar::weekends_only(262).unwrap();
        assert_relative_eq!(cal.years_between(date(2024, 1, 1), date(2025, 1, 1)), 1.0);
    }

    // ==========================================================
    // Property tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_count_matches_enumeration(
            offset in 0u64..2000,
            span in 0u64..800,
            holiday_offsets in proptest::collection::vec(0u64..2800, 0..30),
        ) {
            let base = date(2020, 1, 1);
            let holidays: Vec<Date> = holiday_offsets
                .iter()
                .map(|o| base.add_days(*o).unwrap())
                .collect();
            let cal = HolidayCalendar::new(holidays, 252).unwrap();

            let start = base.add_days(offset).unwrap();
            let end = start.add_days(span).unwrap();
            let enumerated = cal.trading_days(start, end).len() as i64;
            let start_counts = i64::from(cal.is_trading_day(start));

            prop_assert_eq!(cal.count_trading_days(start, end), enumerated - start_counts);
        }
    }
}
