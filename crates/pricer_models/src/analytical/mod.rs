//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Generalised Black-Scholes-Merton model with continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho, Vanna, Charm)
//!
//! ## Design Principles
//!
//! - **Pure functions** of (S, K, r, q, σ, T); the caller supplies T
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{BlackScholesMerton, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
