//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) as
/// Φ(x) = (1/2) * erfc(-x / sqrt(2)). Going through erfc avoids the
/// cancellation of 1 - Φ in the lower tail. Absolute accuracy is about
/// 1e-10, bounded by the `statrs` erfc approximation.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x²/2) / sqrt(2π)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(0.35), 0.636_830_651_175_619, epsilon = 1e-10);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[0.1, 0.7, 1.5, 2.9, 5.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_cdf_far_tail() {
        // 1 - Φ would lose every digit here
        let tail = norm_cdf(-10.0);
        assert_relative_eq!(tail, 7.619_853_024_160_526e-24, max_relative = 1e-10);
    }

    #[test]
    fn test_pdf_symmetric() {
        assert_relative_eq!(norm_pdf(1.3), norm_pdf(-1.3));
        assert_relative_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
    }
}
