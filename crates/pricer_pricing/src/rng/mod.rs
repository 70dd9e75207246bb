//! # Random Number Generation
//!
//! Seeded normal variates for the Monte Carlo engine. Every simulation is
//! reproducible from its configured seed.
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
