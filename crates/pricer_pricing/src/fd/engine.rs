//! Finite-difference engine for European vanilla options.

use std::sync::OnceLock;

use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
use pricer_core::traits::PricingEngine;
use pricer_core::types::PricingError;
use pricer_models::instruments::{Contract, OptionType, VanillaContract};
use tracing::{debug, trace};

use super::config::FdConfig;
use super::grid::FdGrid;
use super::solver::BsmPdeSolver;
use crate::context::ValuationContext;

/// Interpolated first two time columns of a solved grid.
#[derive(Debug, Clone)]
struct FdSolution {
    ds: f64,
    dt: f64,
    now: LinearInterpolator<f64>,
    next: LinearInterpolator<f64>,
}

/// Fully implicit finite-difference engine.
///
/// The grid spans [0, multiplier × K] in spot and [0, T] in time. It is
/// solved once, on the first valuation, and only the t = 0 and t = dt
/// columns are kept.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pricer_core::calendar::HolidayCalendar;
/// use pricer_core::traits::PricingEngine;
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{ContractTerms, ExerciseType, OptionType, VanillaContract};
/// use pricer_pricing::context::ValuationContext;
/// use pricer_pricing::fd::{FdConfig, FdVanillaEngine};
///
/// let calendar = Arc::new(HolidayCalendar::weekends_only(262).unwrap());
/// let context = ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), calendar);
/// let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
/// let call = VanillaContract::new(terms, OptionType::Call, 100.0, ExerciseType::European).unwrap();
///
/// let config = FdConfig::builder().n_space(201).n_time(201).build().unwrap();
/// let engine = FdVanillaEngine::new(call, context, config).unwrap();
/// assert!((engine.value_at(100.0).unwrap() - 10.4506).abs() < 0.02);
/// ```
#[derive(Debug, Clone)]
pub struct FdVanillaEngine {
    contract: VanillaContract,
    context: ValuationContext,
    config: FdConfig,
    solution: OnceLock<FdSolution>,
}

impl FdVanillaEngine {
    /// Engine identifier.
    pub const NAME: &'static str = "fd-implicit";

    /// Creates the engine. The grid is not solved until first use.
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` unless the contract has European exercise
    /// - `PricingError::InvalidArgument` if `config` fails validation
    pub fn new(
        contract: VanillaContract,
        context: ValuationContext,
        config: FdConfig,
    ) -> Result<Self, PricingError> {
        config.validate()?;
        if !contract.exercise().is_european() {
            return Err(PricingError::InvalidArgument(format!(
                "{} requires European exercise, got {}",
                Self::NAME,
                contract.exercise().name()
            )));
        }
        Ok(Self {
            contract,
            context,
            config,
            solution: OnceLock::new(),
        })
    }

    /// The grid configuration.
    #[inline]
    pub fn config(&self) -> &FdConfig {
        &self.config
    }

    /// Upper spot boundary of the grid.
    #[inline]
    pub fn s_max(&self) -> f64 {
        self.config.s_max_multiplier() * self.contract.strike()
    }

    fn solution(&self) -> Result<&FdSolution, PricingError> {
        if let Some(solution) = self.solution.get() {
            return Ok(solution);
        }
        let built = self.solve()?;
        Ok(self.solution.get_or_init(|| built))
    }

    fn solve(&self) -> Result<FdSolution, PricingError> {
        let terms = self.contract.terms();
        let strike = self.contract.strike();
        let r = terms.risk_free_rate();
        let q = terms.dividend_yield();
        let expiry = self.context.years_to_maturity(terms.maturity());
        let (n_space, n_time) = (self.config.n_space(), self.config.n_time());
        let (s_min, s_max) = (0.0, self.s_max());

        debug!(
            engine = Self::NAME,
            n_space,
            n_time,
            s_max,
            expiry,
            scheme = self.config.scheme().name(),
            "building finite-difference grid"
        );

        let mut grid = FdGrid::uniform(s_min, s_max, n_space, expiry, n_time);
        let option_type = self.contract.option_type();

        for i in 0..n_space {
            let payoff = option_type.intrinsic(grid.spots()[i], strike);
            grid.set(i, n_time - 1, payoff);
        }
        for j in 0..n_time {
            let tau = expiry - grid.times()[j];
            let (lower, upper) = match option_type {
                OptionType::Call => (0.0, s_max * (-q * tau).exp() - strike * (-r * tau).exp()),
                OptionType::Put => (strike * (-r * tau).exp() - s_min * (-q * tau).exp(), 0.0),
            };
            grid.set(0, j, lower);
            grid.set(n_space - 1, j, upper);
        }

        BsmPdeSolver::new(self.config.scheme()).solve(
            &mut grid,
            terms.volatility(),
            r,
            q,
        )?;

        let spots = grid.spots().to_vec();
        Ok(FdSolution {
            ds: grid.ds(),
            dt: grid.dt(),
            now: LinearInterpolator::new(spots.clone(), grid.column(0))?,
            next: LinearInterpolator::new(spots, grid.column(1))?,
        })
    }
}

impl PricingEngine for FdVanillaEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
        trace!(engine = Self::NAME, spot, "valuation");
        Ok(self.solution()?.now.interpolate(spot)?)
    }

    fn delta_at(&self, spot: f64) -> Result<f64, PricingError> {
        let solution = self.solution()?;
        let ds = solution.ds;
        let up = solution.now.interpolate(spot + ds)?;
        let down = solution.now.interpolate(spot - ds)?;
        Ok((up - down) / (2.0 * ds))
    }

    fn gamma_at(&self, spot: f64) -> Result<f64, PricingError> {
        let solution = self.solution()?;
        let ds = solution.ds;
        let up = solution.now.interpolate(spot + ds)?;
        let mid = solution.now.interpolate(spot)?;
        let down = solution.now.interpolate(spot - ds)?;
        Ok((up - 2.0 * mid + down) / (ds * ds))
    }

    fn theta_at(&self, spot: f64) -> Result<f64, PricingError> {
        let solution = self.solution()?;
        let next = solution.next.interpolate(spot)?;
        let now = solution.now.interpolate(spot)?;
        Ok((next - now) / solution.dt)
    }
}
