//! Autocallable ("snowball") note.
//!
//! The note pays an accruing monthly coupon if the underlying closes above
//! the autocall barrier on an observation date. If it never autocalls and
//! the underlying trades below the knock-in barrier at any time, the holder
//! bears the loss on the final level, floored at `min_nav`. Otherwise the
//! final coupon is paid at maturity. Margin financing at
//! `margin_interest_rate` on `initial_margin` is charged against coupons and
//! non-autocalled payoffs.
//!
//! Barriers and levels are quoted relative to the initial fixing, so a spot
//! of `1.0` corresponds to the trade date level.

use std::cmp::Ordering;

use pricer_core::types::Date;

use super::error::InstrumentError;
use super::terms::{Contract, ContractTerms};

/// Autocallable note contract.
///
/// Construct through [`AutocallableNote::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct AutocallableNote {
    terms: ContractTerms,
    annual_coupon_rate: f64,
    autocall_barrier: f64,
    knock_in_barrier: f64,
    initial_margin: f64,
    margin_interest_rate: f64,
    min_nav: f64,
    observation_dates: Vec<Date>,
    skip_months: usize,
}

impl AutocallableNote {
    /// Creates a new builder.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{AutocallableNote, ContractTerms};
    /// use pricer_core::types::Date;
    ///
    /// let maturity = Date::from_ymd(2025, 1, 1).unwrap();
    /// let note = AutocallableNote::builder()
    ///     .terms(ContractTerms::new(maturity, 0.25, 0.03, 0.0))
    ///     .annual_coupon_rate(0.15)
    ///     .autocall_barrier(1.03)
    ///     .knock_in_barrier(0.75)
    ///     .observation_dates(vec![
    ///         Date::from_ymd(2024, 7, 1).unwrap(),
    ///         Date::from_ymd(2024, 12, 31).unwrap(),
    ///     ])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(note.observation_dates().len(), 2);
    /// assert_eq!(note.skip_months(), 0);
    /// ```
    #[inline]
    pub fn builder() -> AutocallableNoteBuilder {
        AutocallableNoteBuilder::default()
    }

    /// Annual coupon rate.
    #[inline]
    pub fn annual_coupon_rate(&self) -> f64 {
        self.annual_coupon_rate
    }

    /// Level above which the note redeems early.
    #[inline]
    pub fn autocall_barrier(&self) -> f64 {
        self.autocall_barrier
    }

    /// Level below which the note knocks in.
    #[inline]
    pub fn knock_in_barrier(&self) -> f64 {
        self.knock_in_barrier
    }

    /// Margin posted by the holder.
    #[inline]
    pub fn initial_margin(&self) -> f64 {
        self.initial_margin
    }

    /// Financing rate charged on the margin.
    #[inline]
    pub fn margin_interest_rate(&self) -> f64 {
        self.margin_interest_rate
    }

    /// Floor on the final level after knock-in.
    #[inline]
    pub fn min_nav(&self) -> f64 {
        self.min_nav
    }

    /// Autocall observation dates, strictly increasing.
    #[inline]
    pub fn observation_dates(&self) -> &[Date] {
        &self.observation_dates
    }

    /// Number of leading coupon periods excluded from payout.
    #[inline]
    pub fn skip_months(&self) -> usize {
        self.skip_months
    }

    /// Coupon rate net of margin financing, `ACR - MIR * IM`.
    #[inline]
    pub fn net_coupon_rate(&self) -> f64 {
        self.annual_coupon_rate - self.margin_interest_rate * self.initial_margin
    }
}

impl Contract for AutocallableNote {
    #[inline]
    fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    fn with_terms(&self, terms: ContractTerms) -> Self {
        Self {
            terms,
            ..self.clone()
        }
    }
}

/// Builder for [`AutocallableNote`].
///
/// `terms`, `annual_coupon_rate`, both barriers and the observation dates are
/// required. Margin and financing default to zero, `min_nav` to zero (full
/// loss possible) and `skip_months` to zero.
#[derive(Clone, Debug, Default)]
pub struct AutocallableNoteBuilder {
    terms: Option<ContractTerms>,
    annual_coupon_rate: Option<f64>,
    autocall_barrier: Option<f64>,
    knock_in_barrier: Option<f64>,
    initial_margin: f64,
    margin_interest_rate: f64,
    min_nav: f64,
    observation_dates: Option<Vec<Date>>,
    skip_months: usize,
}

impl AutocallableNoteBuilder {
    /// Sets maturity and market parameters.
    #[inline]
    pub fn terms(mut self, terms: ContractTerms) -> Self {
        self.terms = Some(terms);
        self
    }

    /// Sets the annual coupon rate.
    #[inline]
    pub fn annual_coupon_rate(mut self, rate: f64) -> Self {
        self.annual_coupon_rate = Some(rate);
        self
    }

    /// Sets the autocall barrier.
    #[inline]
    pub fn autocall_barrier(mut self, level: f64) -> Self {
        self.autocall_barrier = Some(level);
        self
    }

    /// Sets the knock-in barrier.
    #[inline]
    pub fn knock_in_barrier(mut self, level: f64) -> Self {
        self.knock_in_barrier = Some(level);
        self
    }

    /// Sets the initial margin.
    #[inline]
    pub fn initial_margin(mut self, margin: f64) -> Self {
        self.initial_margin = margin;
        self
    }

    /// Sets the margin financing rate.
    #[inline]
    pub fn margin_interest_rate(mut self, rate: f64) -> Self {
        self.margin_interest_rate = rate;
        self
    }

    /// Sets the floor on the final level after knock-in.
    #[inline]
    pub fn min_nav(mut self, min_nav: f64) -> Self {
        self.min_nav = min_nav;
        self
    }

    /// Sets the observation dates.
    #[inline]
    pub fn observation_dates(mut self, dates: Vec<Date>) -> Self {
        self.observation_dates = Some(dates);
        self
    }

    /// Sets the number of leading coupon periods to skip.
    #[inline]
    pub fn skip_months(mut self, months: usize) -> Self {
        self.skip_months = months;
        self
    }

    /// Builds the note.
    ///
    /// # Errors
    ///
    /// - `InstrumentError::MissingField` if a required field is not set
    /// - `InstrumentError::InvalidBarriers` unless `knock_in_barrier < autocall_barrier`
    /// - `InstrumentError::InvalidSchedule` if the observation dates are
    ///   empty, not strictly increasing, or extend past maturity
    pub fn build(self) -> Result<AutocallableNote, InstrumentError> {
        let terms = self.terms.ok_or(InstrumentError::MissingField("terms"))?;
        let annual_coupon_rate = self
            .annual_coupon_rate
            .ok_or(InstrumentError::MissingField("annual_coupon_rate"))?;
        let autocall = self
            .autocall_barrier
            .ok_or(InstrumentError::MissingField("autocall_barrier"))?;
        let knock_in = self
            .knock_in_barrier
            .ok_or(InstrumentError::MissingField("knock_in_barrier"))?;
        let observation_dates = self
            .observation_dates
            .ok_or(InstrumentError::MissingField("observation_dates"))?;

        // NaN barriers fail here too
        if knock_in.partial_cmp(&autocall) != Some(Ordering::Less) {
            return Err(InstrumentError::InvalidBarriers { knock_in, autocall });
        }

        let Some(last) = observation_dates.last() else {
            return Err(InstrumentError::InvalidSchedule(
                "no observation dates".to_string(),
            ));
        };
        if let Some(pair) = observation_dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(InstrumentError::InvalidSchedule(format!(
                "{} does not follow {}",
                pair[1], pair[0]
            )));
        }
        if *last > terms.maturity() {
            return Err(InstrumentError::InvalidSchedule(format!(
                "{} is after maturity {}",
                last,
                terms.maturity()
            )));
        }

        Ok(AutocallableNote {
            terms,
            annual_coupon_rate,
            autocall_barrier: autocall,
            knock_in_barrier: knock_in,
            initial_margin: self.initial_margin,
            margin_interest_rate: self.margin_interest_rate,
            min_nav: self.min_nav,
            observation_dates,
            skip_months: self.skip_months,
        })
    }
}
