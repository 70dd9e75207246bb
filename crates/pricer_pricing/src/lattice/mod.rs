//! Binomial lattice valuation.
//!
//! - [`CrrBinomialEngine`]: Cox-Ross-Rubinstein tree for European and
//!   American exercise
//! - [`LatticeConfig`]: number of time steps

mod config;
mod crr;

pub use config::{LatticeConfig, DEFAULT_LATTICE_STEPS};
pub use crr::CrrBinomialEngine;
