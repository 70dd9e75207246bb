//! Analytic European engine.

use pricer_core::traits::PricingEngine;
use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholesMerton;
use pricer_models::instruments::{Contract, OptionType, VanillaContract};
use tracing::trace;

use crate::context::ValuationContext;

/// Generalised Black-Scholes-Merton engine for European vanilla options.
#[derive(Debug, Clone)]
pub struct AnalyticEuropeanEngine {
    contract: VanillaContract,
    context: ValuationContext,
    model: BlackScholesMerton,
    expiry: f64,
}

impl AnalyticEuropeanEngine {
    /// Engine identifier.
    pub const NAME: &'static str = "analytic-european";

    /// Creates the engine.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` unless the contract has European exercise.
    pub fn new(contract: VanillaContract, context: ValuationContext) -> Result<Self, PricingError> {
        if !contract.exercise().is_european() {
            return Err(PricingError::InvalidArgument(format!(
                "{} requires European exercise, got {}",
                Self::NAME,
                contract.exercise().name()
            )));
        }

        let terms = contract.terms();
        let model = BlackScholesMerton::new(
            terms.risk_free_rate(),
            terms.dividend_yield(),
            terms.volatility(),
        );
        let expiry = context.years_to_maturity(terms.maturity());

        Ok(Self {
            contract,
            context,
            model,
            expiry,
        })
    }

    /// The priced contract.
    #[inline]
    pub fn contract(&self) -> &VanillaContract {
        &self.contract
    }

    /// The valuation context.
    #[inline]
    pub fn context(&self) -> &ValuationContext {
        &self.context
    }

    /// Trading-day time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    #[inline]
    fn option_type(&self) -> OptionType {
        self.contract.option_type()
    }

    #[inline]
    fn strike(&self) -> f64 {
        self.contract.strike()
    }
}

impl PricingEngine for AnalyticEuropeanEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
        trace!(engine = Self::NAME, spot, expiry = self.expiry, "valuation");
        Ok(self.model.price(self.option_type(), spot, self.strike(), self.expiry))
    }

    fn delta_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.delta(self.option_type(), spot, self.strike(), self.expiry))
    }

    fn gamma_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.gamma(spot, self.strike(), self.expiry))
    }

    fn theta_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.theta(self.option_type(), spot, self.strike(), self.expiry))
    }

    fn vega_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.vega(spot, self.strike(), self.expiry))
    }

    fn rho_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.rho(self.option_type(), spot, self.strike(), self.expiry))
    }

    fn vanna_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.vanna(spot, self.strike(), self.expiry))
    }

    fn charm_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.model.charm(self.option_type(), spot, self.strike(), self.expiry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::calendar::HolidayCalendar;
    use pricer_core::traits::Greek;
    use pricer_core::types::Date;
    use pricer_models::instruments::{ContractTerms, ExerciseType};
    use std::sync::Arc;

    fn context() -> ValuationContext {
        let calendar = HolidayCalendar::weekends_only(262).unwrap();
        ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), Arc::new(calendar))
    }

    fn contract(option_type: OptionType, exercise: ExerciseType) -> VanillaContract {
        let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
        VanillaContract::new(terms, option_type, 100.0, exercise).unwrap()
    }

    #[test]
    fn test_rejects_non_european() {
        for exercise in [ExerciseType::American, ExerciseType::bermudan(Vec::new())] {
            let result = AnalyticEuropeanEngine::new(contract(OptionType::Call, exercise), context());
            assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_atm_call() {
        let engine =
            AnalyticEuropeanEngine::new(contract(OptionType::Call, ExerciseType::European), context())
                .unwrap();
        assert_relative_eq!(engine.expiry(), 1.0);
        assert_relative_eq!(engine.value_at(100.0).unwrap(), 10.4506, epsilon = 1e-4);
        assert_relative_eq!(engine.delta_at(100.0).unwrap(), 0.6368, epsilon = 1e-4);
    }

    #[test]
    fn test_every_greek_supported() {
        let engine =
            AnalyticEuropeanEngine::new(contract(OptionType::Put, ExerciseType::European), context())
                .unwrap();
        for greek in Greek::ALL {
            let value = engine.greek(greek, 95.0).unwrap();
            assert!(value.is_finite(), "{} = {}", greek, value);
        }
    }

    #[test]
    fn test_expired_contract_degenerates() {
        let terms = ContractTerms::new(Date::from_ymd(2024, 1, 1).unwrap(), 0.2, 0.05, 0.0);
        let call = VanillaContract::new(terms, OptionType::Call, 100.0, ExerciseType::European).unwrap();
        let engine = AnalyticEuropeanEngine::new(call, context()).unwrap();
        // t = 0 is not validated
        assert!(!engine.gamma_at(100.0).unwrap().is_finite());
    }
}
