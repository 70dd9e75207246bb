//! Path generation for Monte Carlo simulation.
//!
//! A [`MonteCarloSimulation`] owns the normal draws of one simulation and
//! turns them into unit-start Geometric Brownian Motion paths on demand. The
//! draws are fixed once generated, so repricing with a bumped spot reuses
//! exactly the same randomness.
//!
//! # Memory Layout
//!
//! Draws and paths are stored in row-major order:
//! `draws[path_idx * (n_steps - 1) + step_idx]` and
//! `paths[path_idx * n_steps + point_idx]`, where `point_idx = 0` is the
//! starting level 1.0.

use pricer_core::types::PricingError;
use rayon::prelude::*;
use tracing::debug;

use super::config::{MonteCarloConfig, Sampling};
use crate::pool::ThreadLocalPool;
use crate::rng::PricerRng;

/// Parameters of a unit-start GBM path.
///
/// # Model
///
/// ```text
/// dS = μ S dt + σ S dW,  S(0) = 1
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(0.05, 0.2, 1.0);
/// assert_eq!(params.drift, 0.05);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Drift (μ), annualised.
    pub drift: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Path horizon in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(drift: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            drift,
            volatility,
            maturity,
        }
    }
}

/// Sample mean with its standard error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// Sample mean.
    pub mean: f64,
    /// Standard error of the mean; NaN with fewer than two samples.
    pub std_error: f64,
}

/// Normal draws for `n_paths` paths of `n_steps` points each.
#[derive(Clone, Debug)]
pub struct MonteCarloSimulation {
    n_paths: usize,
    n_steps: usize,
    sampling: Sampling,
    draws: Vec<f64>,
}

impl MonteCarloSimulation {
    /// Draws the normals for a simulation with `n_steps` points per path
    /// (the starting point included).
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if `n_steps < 2` or the config is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloSimulation};
    ///
    /// let config = MonteCarloConfig::builder().n_paths(4).seed(1).build().unwrap();
    /// let sim = MonteCarloSimulation::generate(&config, 3).unwrap();
    ///
    /// // antithetic: the second half mirrors the first
    /// assert_eq!(sim.draws()[0], -sim.draws()[4]);
    /// ```
    pub fn generate(config: &MonteCarloConfig, n_steps: usize) -> Result<Self, PricingError> {
        config.validate()?;
        if n_steps < 2 {
            return Err(PricingError::InvalidArgument(format!(
                "a path needs at least 2 points, got {}",
                n_steps
            )));
        }

        let n_paths = config.n_paths();
        let width = n_steps - 1;
        let mut draws = vec![0.0; n_paths * width];
        let mut rng = PricerRng::from_seed(config.seed());

        match config.sampling() {
            Sampling::Antithetic => {
                let (first, second) = draws.split_at_mut(n_paths / 2 * width);
                rng.fill_normal(first);
                for (mirror, &z) in second.iter_mut().zip(first.iter()) {
                    *mirror = -z;
                }
            }
            Sampling::Plain => rng.fill_normal(&mut draws),
        }

        debug!(
            n_paths,
            n_steps,
            sampling = ?config.sampling(),
            seed = config.seed(),
            "generated Monte Carlo draws"
        );

        Ok(Self {
            n_paths,
            n_steps,
            sampling: config.sampling(),
            draws,
        })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Points per path, the starting point included.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Sampling scheme the draws were generated with.
    #[inline]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// The raw draws, row-major.
    #[inline]
    pub fn draws(&self) -> &[f64] {
        &self.draws
    }

    /// All paths, row-major, each starting at 1.0.
    pub fn gbm_paths(&self, params: GbmParams) -> Vec<f64> {
        let (drift_dt, vol_sqrt_dt) = self.increments(params);
        let mut paths = vec![0.0; self.n_paths * self.n_steps];
        paths
            .par_chunks_mut(self.n_steps)
            .zip(self.draws.par_chunks(self.n_steps - 1))
            .for_each(|(path, draws)| fill_path(path, draws, drift_dt, vol_sqrt_dt));
        paths
    }

    /// Mean and standard error of `payoff` over every path.
    ///
    /// Paths are built one at a time in a pooled buffer per worker, so the
    /// full path matrix is never materialised. Under antithetic sampling the
    /// standard error is taken over pair averages.
    pub fn estimate<F>(&self, params: GbmParams, payoff: F) -> Estimate
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        let (drift_dt, vol_sqrt_dt) = self.increments(params);
        let n_steps = self.n_steps;

        let samples: Vec<f64> = self
            .draws
            .par_chunks(n_steps - 1)
            .map_init(
                || ThreadLocalPool::new().get_buffer(n_steps),
                |path, draws| {
                    fill_path(&mut path[..], draws, drift_dt, vol_sqrt_dt);
                    payoff(&path[..])
                },
            )
            .collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let std_error = match self.sampling {
            Sampling::Antithetic => {
                let (first, second) = samples.split_at(samples.len() / 2);
                let pairs: Vec<f64> = first
                    .iter()
                    .zip(second)
                    .map(|(a, b)| 0.5 * (a + b))
                    .collect();
                standard_error(&pairs)
            }
            Sampling::Plain => standard_error(&samples),
        };

        Estimate { mean, std_error }
    }

    #[inline]
    fn increments(&self, params: GbmParams) -> (f64, f64) {
        let dt = params.maturity / (self.n_steps - 1) as f64;
        let sigma = params.volatility;
        ((params.drift - 0.5 * sigma * sigma) * dt, sigma * dt.sqrt())
    }
}

/// Writes exp(cumsum([0, drift_dt + vol_sqrt_dt Z])) into `path`.
#[inline]
fn fill_path(path: &mut [f64], draws: &[f64], drift_dt: f64, vol_sqrt_dt: f64) {
    let mut log_level = 0.0;
    path[0] = 1.0;
    for (point, &z) in path[1..].iter_mut().zip(draws) {
        log_level += drift_dt + vol_sqrt_dt * z;
        *point = log_level.exp();
    }
}

fn standard_error(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;
    let mean = samples.iter().sum::<f64>() / nf;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    (var / nf).sqrt()
}
