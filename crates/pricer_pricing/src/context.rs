//! Valuation context shared by engines.
//!
//! A [`ValuationContext`] fixes the valuation date and the trading calendar
//! used to turn calendar dates into year fractions. It is cheap to clone:
//! the calendar is shared behind an `Arc`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::calendar::HolidayCalendar;
//! use pricer_core::types::Date;
//! use pricer_pricing::context::ValuationContext;
//!
//! let calendar = Arc::new(HolidayCalendar::weekends_only(262).unwrap());
//! let context = ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), calendar);
//!
//! let t = context.years_to_maturity(Date::from_ymd(2025, 1, 1).unwrap());
//! assert!((t - 1.0).abs() < 1e-12);
//! ```

use std::sync::Arc;

use pricer_core::calendar::TradingCalendar;
use pricer_core::types::Date;

/// Valuation date plus trading calendar.
#[derive(Debug, Clone)]
pub struct ValuationContext {
    valuation_date: Date,
    calendar: Arc<dyn TradingCalendar>,
}

impl ValuationContext {
    /// Creates a context.
    pub fn new(valuation_date: Date, calendar: Arc<dyn TradingCalendar>) -> Self {
        Self {
            valuation_date,
            calendar,
        }
    }

    /// Valuation date.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Trading calendar.
    #[inline]
    pub fn calendar(&self) -> &dyn TradingCalendar {
        self.calendar.as_ref()
    }

    /// Trading-day year fraction from the valuation date to `maturity`.
    ///
    /// Negative when `maturity` precedes the valuation date.
    #[inline]
    pub fn years_to_maturity(&self, maturity: Date) -> f64 {
        self.calendar.years_between(self.valuation_date, maturity)
    }

    /// Trading days from the valuation date to `maturity`, both included.
    pub fn trading_schedule(&self, maturity: Date) -> Vec<Date> {
        self.calendar.trading_days(self.valuation_date, maturity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::calendar::HolidayCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_years_to_maturity_counts_trading_days() {
        let calendar = HolidayCalendar::new([date(2024, 1, 3)], 250).unwrap();
        let context = ValuationContext::new(date(2024, 1, 1), Arc::new(calendar));

        // Jan 2 .. Jan 5 minus the Jan 3 holiday
        assert_eq!(context.years_to_maturity(date(2024, 1, 5)), 3.0 / 250.0);
        assert!(context.years_to_maturity(date(2023, 12, 29)) < 0.0);
    }

    #[test]
    fn test_schedule_includes_both_ends() {
        let calendar = HolidayCalendar::weekends_only(252).unwrap();
        let context = ValuationContext::new(date(2024, 1, 1), Arc::new(calendar));

        let schedule = context.trading_schedule(date(2024, 1, 8));
        assert_eq!(schedule.first(), Some(&date(2024, 1, 1)));
        assert_eq!(schedule.last(), Some(&date(2024, 1, 8)));
        assert_eq!(schedule.len(), 6);
    }
}
