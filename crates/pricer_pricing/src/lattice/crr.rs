//! Cox-Ross-Rubinstein binomial engine.

use pricer_core::traits::PricingEngine;
use pricer_core::types::PricingError;
use pricer_models::instruments::{Contract, ExerciseType, VanillaContract};
use tracing::trace;

use super::config::LatticeConfig;
use crate::context::ValuationContext;

/// Parameter bump used for vega and rho.
const PARAMETER_BUMP: f64 = 1.0e-4;

/// Option values on the first three levels of a swept tree.
#[derive(Debug, Clone, Copy)]
struct LatticeLevels {
    root: f64,
    level1: [f64; 2],
    level2: [f64; 3],
    up: f64,
    down: f64,
    dt: f64,
}

/// CRR binomial engine for European and American vanilla options.
///
/// The tree is rebuilt for every query. Vega and rho reprice bumped copies
/// of the contract; the engine's own contract is never modified.
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
/// use pricer_pricing::lattice::{CrrBinomialEngine, LatticeConfig};
///
/// let calendar = Arc::new(HolidayCalendar::weekends_only(262).unwrap());
/// let context = ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), calendar);
/// let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
/// let put = VanillaContract::new(terms, OptionType::Put, 100.0, ExerciseType::American).unwrap();
///
/// let engine = CrrBinomialEngine::new(put, context, LatticeConfig::new(200).unwrap()).unwrap();
/// let value = engine.value_at(100.0).unwrap();
/// assert!(value > 5.5735); // early exercise premium over the European put
/// ```
#[derive(Debug, Clone)]
pub struct CrrBinomialEngine {
    contract: VanillaContract,
    context: ValuationContext,
    config: LatticeConfig,
}

impl CrrBinomialEngine {
    /// Engine identifier.
    pub const NAME: &'static str = "crr-binomial";

    /// Creates the engine.
    ///
    /// # Errors
    /// - `PricingError::InvalidOperation` for Bermudan exercise
    /// - `PricingError::InvalidArgument` if `config` fails validation
    pub fn new(
        contract: VanillaContract,
        context: ValuationContext,
        config: LatticeConfig,
    ) -> Result<Self, PricingError> {
        config.validate()?;
        if let ExerciseType::Bermudan { .. } = contract.exercise() {
            return Err(PricingError::InvalidOperation(format!(
                "{} cannot price {} exercise",
                Self::NAME,
                contract.exercise().name()
            )));
        }
        Ok(Self {
            contract,
            context,
            config,
        })
    }

    /// The lattice configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    /// Backward induction over the full tree for `contract` at `spot`.
    fn sweep(&self, contract: &VanillaContract, spot: f64) -> LatticeLevels {
        let terms = contract.terms();
        let n = self.config.num_steps();
        let t = self.context.years_to_maturity(terms.maturity());
        let sigma = terms.volatility();
        let r = terms.risk_free_rate();
        let strike = contract.strike();
        let option_type = contract.option_type();
        let american = contract.exercise().is_american();

        let dt = t / n as f64;
        let up = (sigma * dt.sqrt()).exp();
        let down = 1.0 / up;
        let p = ((terms.cost_of_carry() * dt).exp() - down) / (up - down);
        let df = (-r * dt).exp();

        // Node (j, i): i up-moves after j steps, level S u^i d^(j-i) = S u^(2i-j)
        let level = |j: usize, i: usize| spot * up.powi(2 * i as i32 - j as i32);

        let mut values: Vec<f64> = (0..=n)
            .map(|i| option_type.intrinsic(level(n, i), strike))
            .collect();

        let mut level1 = [0.0; 2];
        let mut level2 = [0.0; 3];

        for j in (0..n).rev() {
            for i in 0..=j {
                let continuation = df * (p * values[i + 1] + (1.0 - p) * values[i]);
                values[i] = if american {
                    continuation.max(option_type.intrinsic(level(j, i), strike))
                } else {
                    continuation
                };
            }
            match j {
                2 => level2.copy_from_slice(&values[..3]),
                1 => level1.copy_from_slice(&values[..2]),
                _ => {}
            }
        }

        LatticeLevels {
            root: values[0],
            level1,
            level2,
            up,
            down,
            dt,
        }
    }
}

impl PricingEngine for CrrBinomialEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
        trace!(engine = Self::NAME, spot, steps = self.config.num_steps(), "valuation");
        Ok(self.sweep(&self.contract, spot).root)
    }

    fn delta_at(&self, spot: f64) -> Result<f64, PricingError> {
        let tree = self.sweep(&self.contract, spot);
        Ok((tree.level1[1] - tree.level1[0]) / (spot * tree.up - spot * tree.down))
    }

    fn gamma_at(&self, spot: f64) -> Result<f64, PricingError> {
        let tree = self.sweep(&self.contract, spot);
        let [v_dd, v_ud, v_uu] = tree.level2;
        let s_uu = spot * tree.up * tree.up;
        let s_dd = spot * tree.down * tree.down;
        let upper = (v_uu - v_ud) / (s_uu - spot);
        let lower = (v_ud - v_dd) / (spot - s_dd);
        Ok((upper - lower) / (0.5 * (s_uu - s_dd)))
    }

    fn theta_at(&self, spot: f64) -> Result<f64, PricingError> {
        let tree = self.sweep(&self.contract, spot);
        Ok((tree.level2[1] - tree.root) / (2.0 * tree.dt))
    }

    fn vega_at(&self, spot: f64) -> Result<f64, PricingError> {
        let sigma = self.contract.terms().volatility();
        let up = self.sweep(&self.contract.with_volatility(sigma + PARAMETER_BUMP), spot);
        let down = self.sweep(&self.contract.with_volatility(sigma - PARAMETER_BUMP), spot);
        Ok((up.root - down.root) / (2.0 * PARAMETER_BUMP))
    }

    fn rho_at(&self, spot: f64) -> Result<f64, PricingError> {
        let r = self.contract.terms().risk_free_rate();
        let up = self.sweep(&self.contract.with_risk_free_rate(r + PARAMETER_BUMP), spot);
        let down = self.sweep(&self.contract.with_risk_free_rate(r - PARAMETER_BUMP), spot);
        Ok((up.root - down.root) / (2.0 * PARAMETER_BUMP))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_core::calendar::HolidayCalendar;
    use pricer_core::traits::Greek;
    use pricer_core::types::Date;
    use pricer_models::analytical::BlackScholesMerton;
    use pricer_models::instruments::{ContractTerms, OptionType};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn context() -> ValuationContext {
        let calendar = HolidayCalendar::weekends_only(262).unwrap();
        ValuationContext::new(Date::from_ymd(2024, 1, 1).unwrap(), Arc::new(calendar))
    }

    fn engine(option_type: OptionType, exercise: ExerciseType, steps: usize) -> CrrBinomialEngine {
        let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
        let contract = VanillaContract::new(terms, option_type, 100.0, exercise).unwrap();
        CrrBinomialEngine::new(contract, context(), LatticeConfig::new(steps).unwrap()).unwrap()
    }

    // ==========================================================
    // Construction
    // ==========================================================

    #[test]
    fn test_bermudan_rejected() {
        let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
        let contract = VanillaContract::new(
            terms,
            OptionType::Put,
            100.0,
            ExerciseType::bermudan(vec![Date::from_ymd(2024, 7, 1).unwrap()]),
        )
        .unwrap();
        let result = CrrBinomialEngine::new(contract, context(), LatticeConfig::default());
        assert!(matches!(result, Err(PricingError::InvalidOperation(_))));
    }

    // ==========================================================
    // Convergence to closed form
    // ==========================================================

    #[test]
    fn test_european_call_converges() {
        let bsm = BlackScholesMerton::new(0.05, 0.0, 0.2);
        let exact = bsm.price(OptionType::Call, 100.0, 100.0, 1.0);

        let coarse = engine(OptionType::Call, ExerciseType::European, 200).value_at(100.0).unwrap();
        let fine = engine(OptionType::Call, ExerciseType::European, 500).value_at(100.0).unwrap();

        assert!((fine - exact).abs() < (coarse - exact).abs());
        assert!((fine - exact).abs() < 5e-3);
    }

    #[test]
    fn test_lattice_greeks_near_closed_form() {
        let bsm = BlackScholesMerton::new(0.05, 0.0, 0.2);
        let crr = engine(OptionType::Call, ExerciseType::European, 500);

        assert_relative_eq!(
            crr.delta_at(100.0).unwrap(),
            bsm.delta(OptionType::Call, 100.0, 100.0, 1.0),
            epsilon = 2e-3
        );
        assert_relative_eq!(crr.gamma_at(100.0).unwrap(), bsm.gamma(100.0, 100.0, 1.0), epsilon = 5e-4);
        assert_relative_eq!(
            crr.theta_at(100.0).unwrap(),
            bsm.theta(OptionType::Call, 100.0, 100.0, 1.0),
            epsilon = 2e-2
        );
        assert_relative_eq!(crr.vega_at(100.0).unwrap(), bsm.vega(100.0, 100.0, 1.0), epsilon = 0.1);
        assert_relative_eq!(
            crr.rho_at(100.0).unwrap(),
            bsm.rho(OptionType::Call, 100.0, 100.0, 1.0),
            epsilon = 0.1
        );
    }

    #[test]
    fn test_gamma_matches_delta_difference() {
        let crr = engine(OptionType::Call, ExerciseType::European, 500);
        let gamma = crr.gamma_at(100.0).unwrap();
        for h in [0.5, 1.0, 2.0] {
            let external = (crr.delta_at(100.0 + h).unwrap() - crr.delta_at(100.0 - h).unwrap()) / (2.0 * h);
            assert_abs_diff_eq!(gamma, external, epsilon = 2e-4);
        }
    }

    #[test]
    fn test_american_put_dominates_european() {
        let bsm = BlackScholesMerton::new(0.05, 0.0, 0.2);
        let european = bsm.price(OptionType::Put, 100.0, 100.0, 1.0);
        let american = engine(OptionType::Put, ExerciseType::American, 200).value_at(100.0).unwrap();
        assert!(american >= european);
        assert_relative_eq!(american, 6.0864, epsilon = 1e-3);
    }

    #[test]
    fn test_american_call_without_dividends_is_european() {
        let american = engine(OptionType::Call, ExerciseType::American, 300).value_at(100.0).unwrap();
        let european = engine(OptionType::Call, ExerciseType::European, 300).value_at(100.0).unwrap();
        assert_relative_eq!(american, european, epsilon = 1e-10);
    }

    #[test]
    fn test_bumps_leave_contract_unchanged() {
        let crr = engine(OptionType::Call, ExerciseType::European, 50);
        let before = crr.contract.clone();
        crr.vega_at(100.0).unwrap();
        crr.rho_at(100.0).unwrap();
        assert_eq!(crr.contract, before);
    }

    #[test]
    fn test_cross_greeks_unsupported() {
        let crr = engine(OptionType::Call, ExerciseType::European, 50);
        assert!(crr.vanna_at(100.0).unwrap_err().is_unsupported());
        assert!(crr.greek_or_nan(Greek::Charm, 100.0).unwrap().is_nan());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_delta_bounds(spot in 50.0..150.0_f64, american in any::<bool>()) {
            let exercise = if american { ExerciseType::American } else { ExerciseType::European };
            let call = engine(OptionType::Call, exercise.clone(), 100).delta_at(spot).unwrap();
            let put = engine(OptionType::Put, exercise, 100).delta_at(spot).unwrap();
            // deep ITM American puts sit exactly on -1 up to rounding
            let tol = 1e-12;
            prop_assert!(call >= -tol && call <= 1.0 + tol, "call delta {}", call);
            prop_assert!(put >= -1.0 - tol && put <= tol, "put delta {}", put);
        }
    }
}
