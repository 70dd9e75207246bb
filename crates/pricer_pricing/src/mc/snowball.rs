//! Monte Carlo engine for autocallable notes.

use std::sync::OnceLock;

use pricer_core::traits::PricingEngine;
use pricer_core::types::{DayCountConvention, PricingError};
use pricer_models::instruments::{AutocallableNote, Contract};
use tracing::{debug, trace};

use super::config::MonteCarloConfig;
use super::simulation::{Estimate, GbmParams, MonteCarloSimulation};
use crate::context::ValuationContext;
use crate::fd::linspace;

/// Spot bump for delta and gamma.
const SPOT_BUMP: f64 = 0.001;

/// Discount factors accrue on calendar days.
const DISCOUNT_DAY_COUNT: DayCountConvention = DayCountConvention::Actual365Fixed;

/// Schedule-derived state, built on first valuation.
#[derive(Debug, Clone)]
struct SnowballState {
    simulation: MonteCarloSimulation,
    ttm: f64,
    observation_index: Vec<usize>,
    coupons: Vec<f64>,
    discount_factors: Vec<f64>,
    final_coupon: f64,
    final_discount: f64,
    margin_cost: f64,
}

/// Monte Carlo engine for [`AutocallableNote`].
///
/// Paths are simulated on every trading day from the valuation date to
/// maturity. Per path, in order:
///
/// 1. the first observation date closing above the autocall barrier pays
///    that date's coupon, discounted;
/// 2. failing that, any close below the knock-in barrier pays the final
///    return floored at `min_nav - 1` and capped at zero, less the margin
///    cost, discounted from the last observation date;
/// 3. otherwise the final coupon less the margin cost is paid, discounted
///    from the last observation date.
///
/// The draws are generated once; bumped valuations reuse them.
#[derive(Debug, Clone)]
pub struct McSnowballEngine {
    note: AutocallableNote,
    context: ValuationContext,
    config: MonteCarloConfig,
    state: OnceLock<SnowballState>,
}

impl McSnowballEngine {
    /// Engine identifier.
    pub const NAME: &'static str = "mc-snowball";

    /// Creates the engine. The schedule and draws are built on first use.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if `config` fails validation.
    pub fn new(
        note: AutocallableNote,
        context: ValuationContext,
        config: MonteCarloConfig,
    ) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self {
            note,
            context,
            config,
            state: OnceLock::new(),
        })
    }

    /// The priced note.
    #[inline]
    pub fn note(&self) -> &AutocallableNote {
        &self.note
    }

    /// The simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Present value at `spot` together with its Monte Carlo standard error.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if the schedule cannot be built:
    /// fewer than two trading days to maturity, an observation date that is
    /// not a trading day, or a coupon count that does not match the
    /// observation dates.
    pub fn value_with_error(&self, spot: f64) -> Result<Estimate, PricingError> {
        let state = self.state()?;
        let terms = self.note.terms();
        let params = GbmParams::new(
            terms.cost_of_carry(),
            terms.volatility(),
            state.ttm,
        );

        let autocall = self.note.autocall_barrier();
        let knock_in = self.note.knock_in_barrier();
        let loss_floor = self.note.min_nav() - 1.0;

        let payoff = |path: &[f64]| -> f64 {
            for (k, &idx) in state.observation_index.iter().enumerate() {
                if spot * path[idx] > autocall {
                    return state.coupons[k] * state.discount_factors[k];
                }
            }
            if path.iter().any(|&level| spot * level < knock_in) {
                let final_return = spot * path[path.len() - 1] - 1.0;
                // floor then cap, the floor may lie above zero
                let loss = final_return.max(loss_floor).min(0.0);
                (loss - state.margin_cost) * state.final_discount
            } else {
                (state.final_coupon - state.margin_cost) * state.final_discount
            }
        };

        let estimate = state.simulation.estimate(params, payoff);
        trace!(
            engine = Self::NAME,
            spot,
            value = estimate.mean,
            std_error = estimate.std_error,
            "valuation"
        );
        Ok(estimate)
    }

    fn state(&self) -> Result<&SnowballState, PricingError> {
        if let Some(state) = self.state.get() {
            return Ok(state);
        }
        let built = self.build_state()?;
        Ok(self.state.get_or_init(|| built))
    }

    fn build_state(&self) -> Result<SnowballState, PricingError> {
        let terms = self.note.terms();
        let maturity = terms.maturity();
        let valuation_date = self.context.valuation_date();

        let schedule = self.context.trading_schedule(maturity);
        if schedule.len() < 2 {
            return Err(PricingError::InvalidArgument(format!(
                "need at least 2 trading days between {} and {}, found {}",
                valuation_date,
                maturity,
                schedule.len()
            )));
        }

        let observation_index = self
            .note
            .observation_dates()
            .iter()
            .map(|date| {
                schedule.binary_search(date).map_err(|_| {
                    PricingError::InvalidArgument(format!(
                        "observation date {} is not a trading day between {} and {}",
                        date, valuation_date, maturity
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ttm = self.context.years_to_maturity(maturity);
        let net_rate = self.note.net_coupon_rate();
        let n_coupons = (12.0 * ttm).round_ties_even().max(0.0) as usize;
        let coupons: Vec<f64> = linspace(net_rate / 12.0, net_rate * ttm, n_coupons)
            .into_iter()
            .skip(self.note.skip_months())
            .collect();
        if coupons.len() != observation_index.len() {
            return Err(PricingError::InvalidArgument(format!(
                "{} coupons after skipping {} months but {} observation dates",
                coupons.len(),
                self.note.skip_months(),
                observation_index.len()
            )));
        }

        let r = terms.risk_free_rate();
        let discount_factors: Vec<f64> = self
            .note
            .observation_dates()
            .iter()
            .map(|&date| (-r * DISCOUNT_DAY_COUNT.year_fraction(valuation_date, date)).exp())
            .collect();

        let (final_coupon, final_discount) = match (coupons.last(), discount_factors.last()) {
            (Some(&coupon), Some(&discount)) => (coupon, discount),
            _ => {
                return Err(PricingError::InvalidArgument(
                    "note has no observation dates".to_string(),
                ))
            }
        };

        let margin_cost = self.note.margin_interest_rate() * self.note.initial_margin() * ttm;

        debug!(
            engine = Self::NAME,
            n_paths = self.config.n_paths(),
            schedule_len = schedule.len(),
            observations = observation_index.len(),
            ttm,
            "building snowball simulation"
        );
        let simulation = MonteCarloSimulation::generate(&self.config, schedule.len())?;

        Ok(SnowballState {
            simulation,
            ttm,
            observation_index,
            coupons,
            discount_factors,
            final_coupon,
            final_discount,
            margin_cost,
        })
    }
}

impl PricingEngine for McSnowballEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
        Ok(self.value_with_error(spot)?.mean)
    }

    fn delta_at(&self, spot: f64) -> Result<f64, PricingError> {
        let up = self.value_at(spot + SPOT_BUMP)?;
        let down = self.value_at(spot - SPOT_BUMP)?;
        Ok((up - down) / (2.0 * SPOT_BUMP))
    }

    fn gamma_at(&self, spot: f64) -> Result<f64, PricingError> {
        let up = self.value_at(spot + SPOT_BUMP)?;
        let mid = self.value_at(spot)?;
        let down = self.value_at(spot - SPOT_BUMP)?;
        Ok((up - 2.0 * mid + down) / (SPOT_BUMP * SPOT_BUMP))
    }
}
