//! Tridiagonal LU factorisation (Thomas algorithm).
//!
//! The factorisation is computed once and reused for every right-hand side,
//! which suits time-stepping schemes whose matrix does not change between
//! steps.

use crate::types::LinalgError;

const PIVOT_TOLERANCE: f64 = 1.0e-14;

/// LU factors of an `n × n` tridiagonal matrix.
///
/// The matrix is given by its three bands:
/// - `lower[i]` at row `i + 1`, column `i` (length `n - 1`)
/// - `diag[i]` at row `i`, column `i` (length `n`)
/// - `upper[i]` at row `i`, column `i + 1` (length `n - 1`)
///
/// # Examples
///
/// ```
/// use pricer_core::math::linalg::TridiagonalLu;
///
/// // [ 2 -1  0 ] [x0]   [1]
/// // [-1  2 -1 ] [x1] = [0]
/// // [ 0 -1  2 ] [x2]   [1]
/// let lu = TridiagonalLu::factorise(&[-1.0, -1.0], &[2.0, 2.0, 2.0], &[-1.0, -1.0]).unwrap();
/// let mut x = [0.0; 3];
/// lu.solve(&[1.0, 0.0, 1.0], &mut x).unwrap();
/// assert!(x.iter().all(|v| (v - 1.0).abs() < 1e-12));
/// ```
#[derive(Debug, Clone)]
pub struct TridiagonalLu {
    lower: Vec<f64>,
    inv_pivot: Vec<f64>,
    c_star: Vec<f64>,
}

impl TridiagonalLu {
    /// Factorises the matrix.
    ///
    /// # Errors
    ///
    /// * `LinalgError::DimensionMismatch` - band lengths are not `(n-1, n, n-1)` or `n == 0`
    /// * `LinalgError::Singular` - a pivot is (numerically) zero
    pub fn factorise(lower: &[f64], diag: &[f64], upper: &[f64]) -> Result<Self, LinalgError> {
        let n = diag.len();
        if n == 0 || lower.len() + 1 != n || upper.len() + 1 != n {
            return Err(LinalgError::DimensionMismatch(format!(
                "bands of length ({}, {}, {})",
                lower.len(),
                n,
                upper.len()
            )));
        }

        let mut inv_pivot = Vec::with_capacity(n);
        let mut c_star = Vec::with_capacity(n - 1);

        let mut pivot = diag[0];
        for row in 0..n {
            if row > 0 {
                pivot = diag[row] - lower[row - 1] * c_star[row - 1];
            }
            if pivot.abs() <= PIVOT_TOLERANCE || !pivot.is_finite() {
                return Err(LinalgError::Singular { row });
            }
            inv_pivot.push(1.0 / pivot);
            if row < n - 1 {
                c_star.push(upper[row] / pivot);
            }
        }

        Ok(Self {
            lower: lower.to_vec(),
            inv_pivot,
            c_star,
        })
    }

    /// Dimension of the system.
    #[inline]
    pub fn dim(&self) -> usize {
        self.inv_pivot.len()
    }

    /// Solves `A x = rhs`, writing `x` into `out`.
    ///
    /// `rhs` and `out` must both have length [`TridiagonalLu::dim`].
    pub fn solve(&self, rhs: &[f64], out: &mut [f64]) -> Result<(), LinalgError> {
        let n = self.dim();
        if rhs.len() != n || out.len() != n {
            return Err(LinalgError::DimensionMismatch(format!(
                "system of size {} with rhs {} and output {}",
                n,
                rhs.len(),
                out.len()
            )));
        }

        out[0] = rhs[0] * self.inv_pivot[0];
        for i in 1..n {
            out[i] = (rhs[i] - self.lower[i - 1] * out[i - 1]) * self.inv_pivot[i];
        }
        for i in (0..n - 1).rev() {
            out[i] -= self.c_star[i] * out[i + 1];
        }
        Ok(())
    }
}

/// One-shot tridiagonal solve.
///
/// # Examples
///
/// ```
/// use pricer_core::math::linalg::solve_tridiagonal;
///
/// let x = solve_tridiagonal(&[1.0], &[4.0, 4.0], &[1.0], &[5.0, 5.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12 && (x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve_tridiagonal(
    lower: &[f64],
    diag: &[f64],
    upper: &[f64],
    rhs: &[f64],
) -> Result<Vec<f64>, LinalgError> {
    let lu = TridiagonalLu::factorise(lower, diag, upper)?;
    let mut out = vec![0.0; lu.dim()];
    lu.solve(rhs, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn multiply(lower: &[f64], diag: &[f64], upper: &[f64], x: &[f64]) -> Vec<f64> {
        let n = diag.len();
        (0..n)
            .map(|i| {
                let mut acc = diag[i] * x[i];
                if i > 0 {
                    acc += lower[i - 1] * x[i - 1];
                }
                if i + 1 < n {
                    acc += upper[i] * x[i + 1];
                }
                acc
            })
            .collect()
    }

    // ==========================================================
    // Solutions
    // ==========================================================

    #[test]
    fn test_single_equation() {
        let x = solve_tridiagonal(&[], &[4.0], &[], &[2.0]).unwrap();
        assert_relative_eq!(x[0], 0.5);
    }

    #[test]
    fn test_residual_vanishes() {
        let n = 50;
        let lower: Vec<f64> = (0..n - 1).map(|i| -0.3 - 0.01 * i as f64).collect();
        let diag: Vec<f64> = (0..n).map(|i| 2.0 + 0.05 * i as f64).collect();
        let upper: Vec<f64> = (0..n - 1).map(|i| -0.7 + 0.002 * i as f64).collect();
        let rhs: Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();

        let x = solve_tridiagonal(&lower, &diag, &upper, &rhs).unwrap();
        let back = multiply(&lower, &diag, &upper, &x);
        for (b, r) in back.iter().zip(&rhs) {
            assert_relative_eq!(*b, *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_factorisation_reused() {
        let lu = TridiagonalLu::factorise(&[1.0, 1.0], &[3.0, 3.0, 3.0], &[1.0, 1.0]).unwrap();
        let mut x = [0.0; 3];
        lu.solve(&[4.0, 5.0, 4.0], &mut x).unwrap();
        assert!(x.iter().all(|v| (v - 1.0).abs() < 1e-12));
        lu.solve(&[8.0, 10.0, 8.0], &mut x).unwrap();
        assert!(x.iter().all(|v| (v - 2.0).abs() < 1e-12));
    }

    // ==========================================================
    // Failures
    // ==========================================================

    #[test]
    fn test_singular_pivot() {
        let err = TridiagonalLu::factorise(&[1.0], &[1.0, 1.0], &[1.0]).unwrap_err();
        assert_eq!(err, LinalgError::Singular { row: 1 });
    }

    #[test]
    fn test_band_mismatch() {
        assert!(matches!(
            TridiagonalLu::factorise(&[1.0, 1.0], &[1.0, 1.0], &[1.0]),
            Err(LinalgError::DimensionMismatch(_))
        ));
        assert!(TridiagonalLu::factorise(&[], &[], &[]).is_err());
    }

    #[test]
    fn test_rhs_mismatch() {
        let lu = TridiagonalLu::factorise(&[1.0], &[3.0, 3.0], &[1.0]).unwrap();
        let mut out = [0.0; 2];
        assert!(lu.solve(&[1.0], &mut out).is_err());
    }
}
