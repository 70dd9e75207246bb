//! Generalised Black-Scholes-Merton model for European options.
//!
//! ## Mathematical Formulas
//!
//! With cost of carry b = r - q:
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Inputs are not validated. A zero volatility or zero expiry yields NaN
//! or infinite intermediate terms, which propagate to the result.

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::OptionType;

/// Full set of closed-form outputs for one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// Present value
    pub value: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// -∂V/∂T
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂r
    pub rho: f64,
    /// ∂²V/∂S∂σ
    pub vanna: f64,
    /// -∂²V/∂S∂T
    pub charm: f64,
}

/// Generalised Black-Scholes-Merton model.
///
/// Holds the market parameters; every method takes the option type, spot,
/// strike and time to expiry in years.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesMerton;
/// use pricer_models::instruments::OptionType;
///
/// let bsm = BlackScholesMerton::new(0.05, 0.0, 0.2);
/// let call = bsm.price(OptionType::Call, 100.0, 100.0, 1.0);
/// let put = bsm.price(OptionType::Put, 100.0, 100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesMerton {
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
}

impl BlackScholesMerton {
    /// Creates the model.
    ///
    /// # Arguments
    /// * `rate` - Risk-free rate r (continuously compounded)
    /// * `dividend_yield` - Continuous dividend yield q
    /// * `volatility` - Lognormal volatility σ
    pub fn new(rate: f64, dividend_yield: f64, volatility: f64) -> Self {
        Self {
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Cost of carry b = r - q.
    #[inline]
    pub fn cost_of_carry(&self) -> f64 {
        self.rate - self.dividend_yield
    }

    /// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, spot: f64, strike: f64, expiry: f64) -> f64 {
        let sigma = self.volatility;
        ((spot / strike).ln() + (self.cost_of_carry() + 0.5 * sigma * sigma) * expiry)
            / (sigma * expiry.sqrt())
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, spot: f64, strike: f64, expiry: f64) -> f64 {
        self.d1(spot, strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// e^((b-r)T), the dividend discount on the spot leg.
    #[inline]
    fn carry_discount(&self, expiry: f64) -> f64 {
        ((self.cost_of_carry() - self.rate) * expiry).exp()
    }

    /// Option price.
    pub fn price(&self, option_type: OptionType, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let spot_leg = spot * self.carry_discount(expiry);
        let strike_leg = strike * (-self.rate * expiry).exp();
        match option_type {
            OptionType::Call => spot_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionType::Put => strike_leg * norm_cdf(-d2) - spot_leg * norm_cdf(-d1),
        }
    }

    /// Delta, ∂V/∂S.
    pub fn delta(&self, option_type: OptionType, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        let carry = self.carry_discount(expiry);
        match option_type {
            OptionType::Call => carry * norm_cdf(d1),
            OptionType::Put => carry * (norm_cdf(d1) - 1.0),
        }
    }

    /// Gamma, ∂²V/∂S². Identical for calls and puts.
    pub fn gamma(&self, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        norm_pdf(d1) * self.carry_discount(expiry) / (spot * self.volatility * expiry.sqrt())
    }

    /// Theta, -∂V/∂T.
    pub fn theta(&self, option_type: OptionType, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let carry = self.carry_discount(expiry);
        let b_minus_r = self.cost_of_carry() - self.rate;
        let discounted_strike = strike * (-self.rate * expiry).exp();

        let decay = -spot * norm_pdf(d1) * self.volatility * carry / (2.0 * expiry.sqrt());
        match option_type {
            OptionType::Call => {
                decay - b_minus_r * spot * carry * norm_cdf(d1)
                    - self.rate * discounted_strike * norm_cdf(d2)
            }
            OptionType::Put => {
                decay
                    + b_minus_r * spot * carry * norm_cdf(-d1)
                    + self.rate * discounted_strike * norm_cdf(-d2)
            }
        }
    }

    /// Vega, ∂V/∂σ. Identical for calls and puts.
    pub fn vega(&self, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        spot * expiry.sqrt() * norm_pdf(d1) * self.carry_discount(expiry)
    }

    /// Rho, ∂V/∂r.
    pub fn rho(&self, option_type: OptionType, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d2 = self.d2(spot, strike, expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();
        match option_type {
            OptionType::Call => discounted_strike * expiry * norm_cdf(d2),
            OptionType::Put => -discounted_strike * expiry * norm_cdf(-d2),
        }
    }

    /// Vanna, ∂²V/∂S∂σ. Identical for calls and puts.
    pub fn vanna(&self, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        -self.carry_discount(expiry) * norm_pdf(d1) * d2 / self.volatility
    }

    /// Charm, -∂²V/∂S∂T.
    pub fn charm(&self, option_type: OptionType, spot: f64, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(spot, strike, expiry);
        let sqrt_t = expiry.sqrt();
        let d2 = d1 - self.volatility * sqrt_t;
        let b = self.cost_of_carry();
        let b_minus_r = b - self.rate;

        let drift = norm_pdf(d1) * (b / (self.volatility * sqrt_t) - d2 / (2.0 * expiry));
        let carry_term = match option_type {
            OptionType::Call => b_minus_r * norm_cdf(d1),
            OptionType::Put => -b_minus_r * norm_cdf(-d1),
        };
        -self.carry_discount(expiry) * (drift + carry_term)
    }

    /// Every output at once.
    pub fn greeks(&self, option_type: OptionType, spot: f64, strike: f64, expiry: f64) -> Greeks {
        Greeks {
            value: self.price(option_type, spot, strike, expiry),
            delta: self.delta(option_type, spot, strike, expiry),
            gamma: self.gamma(spot, strike, expiry),
            theta: self.theta(option_type, spot, strike, expiry),
            vega: self.vega(spot, strike, expiry),
            rho: self.rho(option_type, spot, strike, expiry),
            vanna: self.vanna(spot, strike, expiry),
            charm: self.charm(option_type, spot, strike, expiry),
        }
    }
}
