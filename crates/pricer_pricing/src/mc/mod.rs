//! Monte Carlo valuation of path-dependent notes.
//!
//! # Architecture
//!
//! ```text
//! McSnowballEngine
//! ├── MonteCarloConfig      (path count, seed, sampling)
//! ├── MonteCarloSimulation  (fixed normal draws, GBM path builder)
//! │   └── PricerRng         (seeded generator)
//! └── schedule state        (observation indices, coupons, discount factors)
//! ```
//!
//! Draws are generated once per engine. Paths are rebuilt from them for
//! every valuation, in parallel across paths with `rayon`, so bumped
//! valuations share the same randomness.
//!
//! # Examples
//!
//! ```rust
//! use pricer_pricing::mc::{GbmParams, MonteCarloConfig, MonteCarloSimulation};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulation = MonteCarloSimulation::generate(&config, 253).unwrap();
//! let forward = simulation.estimate(GbmParams::new(0.05, 0.2, 1.0), |path| path[252]);
//!
//! assert!((forward.mean - 0.05f64.exp()).abs() < 4.0 * forward.std_error);
//! ```

mod config;
mod simulation;
mod snowball;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, Sampling, DEFAULT_SEED, MAX_PATHS};
pub use simulation::{Estimate, GbmParams, MonteCarloSimulation};
pub use snowball::McSnowballEngine;
