//! Valuation inputs shared by every contract.

use pricer_core::types::Date;

/// Maturity and market parameters of a contract.
///
/// Values are not validated: a zero or negative volatility is accepted and
/// shows up downstream as NaN or infinite results.
///
/// The `with_*` helpers return modified copies, which is how engines bump
/// a parameter for finite-difference sensitivities.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractTerms;
/// use pricer_core::types::Date;
///
/// let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
/// let bumped = terms.with_volatility(0.2001);
///
/// assert_eq!(terms.volatility(), 0.2);
/// assert_eq!(bumped.volatility(), 0.2001);
/// assert_eq!(bumped.risk_free_rate(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractTerms {
    maturity: Date,
    volatility: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
}

impl ContractTerms {
    /// Creates contract terms.
    ///
    /// # Arguments
    /// * `maturity` - Final date of the contract
    /// * `volatility` - Lognormal volatility σ (annualised)
    /// * `risk_free_rate` - Continuously compounded rate r
    /// * `dividend_yield` - Continuous dividend yield q
    pub fn new(maturity: Date, volatility: f64, risk_free_rate: f64, dividend_yield: f64) -> Self {
        Self {
            maturity,
            volatility,
            risk_free_rate,
            dividend_yield,
        }
    }

    /// Final date of the contract.
    #[inline]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Risk-free rate r.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Dividend yield q.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Cost of carry b = r - q.
    #[inline]
    pub fn cost_of_carry(&self) -> f64 {
        self.risk_free_rate - self.dividend_yield
    }

    /// Copy with a different volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Copy with a different risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }

    /// Copy with a different dividend yield.
    #[must_use]
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }
}

/// A priceable contract.
///
/// Contracts are immutable values. Engines that need a bumped parameter
/// clone the contract through [`Contract::with_terms`] and price the copy.
pub trait Contract: Clone + Send + Sync {
    /// Valuation inputs of the contract.
    fn terms(&self) -> &ContractTerms;

    /// Copy of the contract with replaced terms.
    #[must_use]
    fn with_terms(&self, terms: ContractTerms) -> Self;

    /// Final date of the contract.
    #[inline]
    fn maturity(&self) -> Date {
        self.terms().maturity()
    }

    /// Copy with volatility replaced.
    #[must_use]
    fn with_volatility(&self, volatility: f64) -> Self {
        self.with_terms(self.terms().with_volatility(volatility))
    }

    /// Copy with risk-free rate replaced.
    #[must_use]
    fn with_risk_free_rate(&self, risk_free_rate: f64) -> Self {
        self.with_terms(self.terms().with_risk_free_rate(risk_free_rate))
    }

    /// Copy with dividend yield replaced.
    #[must_use]
    fn with_dividend_yield(&self, dividend_yield: f64) -> Self {
        self.with_terms(self.terms().with_dividend_yield(dividend_yield))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> ContractTerms {
        ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.01)
    }

    #[test]
    fn test_cost_of_carry() {
        assert!((terms().cost_of_carry() - 0.04).abs() < 1e-15);
    }

    #[test]
    fn test_overrides_leave_receiver_untouched() {
        let base = terms();
        let bumped = base
            .with_risk_free_rate(0.06)
            .with_dividend_yield(0.0);
        assert_eq!(base.risk_free_rate(), 0.05);
        assert_eq!(base.dividend_yield(), 0.01);
        assert_eq!(bumped.risk_free_rate(), 0.06);
        assert_eq!(bumped.dividend_yield(), 0.0);
        assert_eq!(bumped.maturity(), base.maturity());
    }
}
