//! Finite-difference valuation of the Black-Scholes-Merton PDE.
//!
//! - [`FdGrid`]: uniform spot × time grid
//! - [`BsmPdeSolver`]: fully implicit backward sweep
//! - [`FdVanillaEngine`]: European vanilla engine on top of both
//! - [`FdConfig`]: grid resolution and scheme

mod config;
mod engine;
mod grid;
mod solver;

pub use config::{
    FdConfig, FdConfigBuilder, FiniteDifferenceScheme, DEFAULT_SPACE_NODES,
    DEFAULT_S_MAX_MULTIPLIER, DEFAULT_TIME_NODES,
};
pub use engine::FdVanillaEngine;
pub use grid::FdGrid;
pub(crate) use grid::linspace;
pub use solver::BsmPdeSolver;
