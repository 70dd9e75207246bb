//! Contracts with a bound pricing engine.
//!
//! [`PricedContract`] pairs a contract with the engine chosen to value it.
//! Until an engine is bound, every valuation fails with
//! `PricingError::InvalidOperation`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricer_core::calendar::HolidayCalendar;
//! use pricer_core::traits::PricingEngine;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{ContractTerms, ExerciseType, OptionType, VanillaContract};
//! use pricer_pricing::analytical::AnalyticEuropeanEngine;
//! use pricer_pricing::context::ValuationContext;
//! use pricer_pricing::instrument::PricedContract;
//!
//! let calendar = Arc::new(HolidayCalendar::weekends_only(262).unwrap());
//! let context = ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), calendar);
//! let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
//! let call = VanillaContract::new(terms, OptionType::Call, 100.0, ExerciseType::European).unwrap();
//!
//! let mut priced = PricedContract::new(call.clone());
//! assert!(priced.value_at(100.0).is_err());
//!
//! priced.bind_engine(AnalyticEuropeanEngine::new(call, context).unwrap());
//! assert!((priced.value_at(100.0).unwrap() - 10.4506).abs() < 1e-4);
//! ```

use pricer_core::traits::PricingEngine;
use pricer_core::types::PricingError;
use pricer_models::instruments::Contract;

/// A contract and, optionally, the engine bound to it.
///
/// Implements [`PricingEngine`] by delegation, so the provided
/// `greek`/`greek_or_nan` helpers work on the bound engine.
pub struct PricedContract<C: Contract> {
    contract: C,
    engine: Option<Box<dyn PricingEngine + Send + Sync>>,
}

impl<C: Contract> PricedContract<C> {
    /// Wraps a contract with no engine bound.
    pub fn new(contract: C) -> Self {
        Self {
            contract,
            engine: None,
        }
    }

    /// The contract.
    #[inline]
    pub fn contract(&self) -> &C {
        &self.contract
    }

    /// Binds `engine`, replacing any previously bound engine.
    pub fn bind_engine<E>(&mut self, engine: E)
    where
        E: PricingEngine + Send + Sync + 'static,
    {
        tracing::debug!(engine = engine.name(), "engine bound");
        self.engine = Some(Box::new(engine));
    }

    /// Returns whether an engine is bound.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.engine.is_some()
    }

    fn engine(&self) -> Result<&(dyn PricingEngine + Send + Sync), PricingError> {
        self.engine
            .as_deref()
            .ok_or_else(|| PricingError::InvalidOperation("pricing engine not set".to_string()))
    }
}

impl<C: Contract> PricingEngine for PricedContract<C> {
    fn name(&self) -> &'static str {
        self.engine.as_deref().map_or("unbound", |engine| engine.name())
    }

    fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.value_at(spot)
    }

    fn delta_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.delta_at(spot)
    }

    fn gamma_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.gamma_at(spot)
    }

    fn theta_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.theta_at(spot)
    }

    fn vega_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.vega_at(spot)
    }

    fn rho_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.rho_at(spot)
    }

    fn vanna_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.vanna_at(spot)
    }

    fn charm_at(&self, spot: f64) -> Result<f64, PricingError> {
        self.engine()?.charm_at(spot)
    }
}

impl<C: Contract + std::fmt::Debug> std::fmt::Debug for PricedContract<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricedContract")
            .field("contract", &self.contract)
            .field("engine", &self.name())
            .finish()
    }
}
