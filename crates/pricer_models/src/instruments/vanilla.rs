//! Vanilla option definitions.
//!
//! This module combines contract terms, option type, strike and exercise
//! style into a complete vanilla option contract.

use super::error::InstrumentError;
use super::exercise::ExerciseType;
use super::payoff::OptionType;
use super::terms::{Contract, ContractTerms};

/// Vanilla option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{
///     Contract, ContractTerms, ExerciseType, OptionType, VanillaContract,
/// };
/// use pricer_core::types::Date;
///
/// let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
/// let option = VanillaContract::new(terms, OptionType::Call, 100.0, ExerciseType::European).unwrap();
///
/// assert_eq!(option.strike(), 100.0);
/// assert_eq!(option.payoff(110.0), 10.0);
/// assert_eq!(option.with_volatility(0.3).terms().volatility(), 0.3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VanillaContract {
    terms: ContractTerms,
    option_type: OptionType,
    strike: f64,
    exercise: ExerciseType,
}

impl VanillaContract {
    /// Creates a new vanilla option.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` when the strike is not a positive finite number.
    pub fn new(
        terms: ContractTerms,
        option_type: OptionType,
        strike: f64,
        exercise: ExerciseType,
    ) -> Result<Self, InstrumentError> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            terms,
            option_type,
            strike,
            exercise,
        })
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Exercise style.
    #[inline]
    pub fn exercise(&self) -> &ExerciseType {
        &self.exercise
    }

    /// Payoff at exercise for the given spot.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.option_type.intrinsic(spot, self.strike)
    }
}

impl Contract for VanillaContract {
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

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::Date;

    fn terms() -> ContractTerms {
        ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0)
    }

    #[test]
    fn test_rejects_bad_strikes() {
        for strike in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = VanillaContract::new(terms(), OptionType::Put, strike, ExerciseType::American);
            assert!(matches!(result, Err(InstrumentError::InvalidStrike { .. })));
        }
    }

    #[test]
    fn test_with_terms_keeps_economics() {
        let option =
            VanillaContract::new(terms(), OptionType::Put, 95.0, ExerciseType::American).unwrap();
        let bumped = option.with_risk_free_rate(0.0501);

        assert_eq!(option.terms().risk_free_rate(), 0.05);
        assert_eq!(bumped.terms().risk_free_rate(), 0.0501);
        assert_eq!(bumped.strike(), 95.0);
        assert_eq!(bumped.option_type(), OptionType::Put);
        assert!(bumped.exercise().is_american());
    }

    #[test]
    fn test_payoff() {
        let put = VanillaContract::new(terms(), OptionType::Put, 100.0, ExerciseType::European).unwrap();
        assert_eq!(put.payoff(80.0), 20.0);
        assert_eq!(put.payoff(120.0), 0.0);
    }
}
