//! Backward time-stepping of the Black-Scholes-Merton PDE.

use pricer_core::math::linalg::TridiagonalLu;
use pricer_core::types::PricingError;
use tracing::trace;

use super::config::FiniteDifferenceScheme;
use super::grid::FdGrid;
use crate::pool::ThreadLocalPool;

/// Steps a grid backwards from its terminal column to t = 0.
///
/// The caller fills the terminal column and both boundary rows; the solver
/// overwrites every interior node of the remaining columns.
///
/// With b = r - q and interior spot S_i, the fully implicit system for
/// column j is
///
/// ```text
/// L_i V[i-1, j] + C_i V[i, j] + U_i V[i+1, j] = V[i, j+1]
///
/// L_i =  0.5 (S_i/ds) (b - σ² S_i/ds) dt
/// C_i =  1 + (σ² S_i²/ds² + r) dt
/// U_i = -0.5 (S_i/ds) (b + σ² S_i/ds) dt
/// ```
///
/// The matrix does not depend on j, so it is factorised once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BsmPdeSolver {
    scheme: FiniteDifferenceScheme,
}

impl BsmPdeSolver {
    /// Creates a solver for `scheme`.
    #[inline]
    pub fn new(scheme: FiniteDifferenceScheme) -> Self {
        Self { scheme }
    }

    /// The time discretisation scheme.
    #[inline]
    pub fn scheme(&self) -> FiniteDifferenceScheme {
        self.scheme
    }

    /// Solves the grid in place.
    ///
    /// # Errors
    /// - `PricingError::InvalidOperation` for Crank-Nicolson
    /// - `PricingError::InvalidArgument` for a grid without interior nodes
    /// - `PricingError::NumericalInstability` if the system is singular
    pub fn solve(
        &self,
        grid: &mut FdGrid,
        volatility: f64,
        rate: f64,
        dividend_yield: f64,
    ) -> Result<(), PricingError> {
        if self.scheme != FiniteDifferenceScheme::FullyImplicit {
            return Err(PricingError::InvalidOperation(format!(
                "{} time stepping is not implemented",
                self.scheme.name()
            )));
        }

        let n_space = grid.n_space();
        let n_time = grid.n_time();
        if n_space < 3 || n_time < 2 {
            return Err(PricingError::InvalidArgument(format!(
                "grid {}x{} has no interior to solve",
                n_space, n_time
            )));
        }

        let m = n_space - 2;
        let ds = grid.ds();
        let dt = grid.dt();
        let carry = rate - dividend_yield;
        let var = volatility * volatility;

        let mut lower = Vec::with_capacity(m);
        let mut diag = Vec::with_capacity(m);
        let mut upper = Vec::with_capacity(m);
        for &s in &grid.spots()[1..n_space - 1] {
            let x = s / ds;
            lower.push(0.5 * x * (carry - var * x) * dt);
            diag.push(1.0 + (var * x * x + rate) * dt);
            upper.push(-0.5 * x * (carry + var * x) * dt);
        }

        let lu = TridiagonalLu::factorise(&lower[1..], &diag, &upper[..m - 1])?;
        let pool = ThreadLocalPool::new();

        for j in (0..n_time - 1).rev() {
            let mut rhs = pool.get_buffer(m);
            let mut solution = pool.get_buffer(m);

            for (k, r) in rhs.iter_mut().enumerate() {
                *r = grid.value(k + 1, j + 1);
            }
            rhs[0] -= lower[0] * grid.value(0, j);
            rhs[m - 1] -= upper[m - 1] * grid.value(n_space - 1, j);

            lu.solve(&rhs, &mut solution)?;
            for (k, &v) in solution.iter().enumerate() {
                grid.set(k + 1, j, v);
            }
        }

        trace!(n_space, n_time, "implicit sweep complete");
        Ok(())
    }
}
