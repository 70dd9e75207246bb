//! Holiday-set calendar.

use std::collections::BTreeSet;

use super::TradingCalendar;
use crate::types::{CalendarError, Date};

/// Trading calendar defined by an explicit holiday set.
///
/// Weekends are always closed; `holidays` lists the additional closures.
///
/// # Examples
///
/// ```
/// use pricer_core::calendar::{HolidayCalendar, TradingCalendar};
/// use pricer_core::types::Date;
///
/// let calendar = HolidayCalendar::weekends_only(244)
///     .unwrap()
///     .with_holiday(Date::from_ymd(2024, 10, 1).unwrap());
///
/// assert_eq!(calendar.annual_trading_days(), 244);
/// assert_eq!(calendar.holidays().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeSet<Date>,
    annual_trading_days: u32,
}

impl HolidayCalendar {
    /// Creates a calendar from a holiday collection.
    ///
    /// Duplicate holidays are collapsed.
    ///
    /// # Errors
    /// `CalendarError::InvalidAnnualTradingDays` when `annual_trading_days` is zero.
    pub fn new<I>(holidays: I, annual_trading_days: u32) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = Date>,
    {
        if annual_trading_days == 0 {
            return Err(CalendarError::InvalidAnnualTradingDays(annual_trading_days));
        }
        Ok(Self {
            holidays: holidays.into_iter().collect(),
            annual_trading_days,
        })
    }

    /// Creates a calendar whose only closures are weekends.
    pub fn weekends_only(annual_trading_days: u32) -> Result<Self, CalendarError> {
        Self::new(std::iter::empty(), annual_trading_days)
    }

    /// Returns the calendar with one more holiday.
    #[must_use]
    pub fn with_holiday(mut self, date: Date) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Builds a calendar from its settings description.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::calendar::{CalendarSettings, HolidayCalendar, TradingCalendar};
    /// use pricer_core::types::Date;
    ///
    /// let settings = CalendarSettings {
    ///     annual_trading_days: 250,
    ///     holidays: vec![Date::from_ymd(2024, 12, 25).unwrap()],
    /// };
    /// let calendar = HolidayCalendar::from_settings(&settings).unwrap();
    /// assert_eq!(calendar.annual_trading_days(), 250);
    /// ```
    pub fn from_settings(settings: &CalendarSettings) -> Result<Self, CalendarError> {
        Self::new(settings.holidays.iter().copied(), settings.annual_trading_days)
    }
}

impl TradingCalendar for HolidayCalendar {
    #[inline]
    fn holidays(&self) -> &BTreeSet<Date> {
        &self.holidays
    }

    #[inline]
    fn annual_trading_days(&self) -> u32 {
        self.annual_trading_days
    }
}

/// Serialisable calendar description.
///
/// Deserialises from e.g. TOML:
///
/// ```toml
/// annual_trading_days = 244
/// holidays = ["2024-10-01", "2024-10-02"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarSettings {
    /// Trading days per year used for year fractions.
    pub annual_trading_days: u32,
    /// Market closures in addition to weekends.
    pub holidays: Vec<Date>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            annual_trading_days: 252,
            holidays: Vec::new(),
        }
    }
}
