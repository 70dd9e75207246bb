//! Pricing engine abstraction.
//!
//! Every engine exposes the same eight valuation operations as functions of
//! the spot level. Engines override only the operations they support; the
//! rest report [`PricingError::UnsupportedGreek`].

use std::fmt;

use crate::types::PricingError;

/// Valuation quantities an engine may provide.
///
/// Sign conventions: `Theta = -∂V/∂T` and `Charm = -∂²V/∂S∂T`, with `T` the
/// remaining time to maturity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Greek {
    /// Present value V
    Value,
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// -∂V/∂T
    Theta,
    /// ∂V/∂σ
    Vega,
    /// ∂V/∂r
    Rho,
    /// ∂²V/∂S∂σ
    Vanna,
    /// -∂²V/∂S∂T
    Charm,
}

impl Greek {
    /// Every quantity, in the order of the [`PricingEngine`] methods.
    pub const ALL: [Greek; 8] = [
        Greek::Value,
        Greek::Delta,
        Greek::Gamma,
        Greek::Theta,
        Greek::Vega,
        Greek::Rho,
        Greek::Vanna,
        Greek::Charm,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Value => "Value",
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Theta => "Theta",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
            Greek::Vanna => "Vanna",
            Greek::Charm => "Charm",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numerical method bound to one contract, one calendar and one valuation date.
///
/// All methods are functions of the spot level `spot`. Apart from a lazy
/// build of internal state on first use they have no side effects.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::{Greek, PricingEngine};
/// use pricer_core::types::PricingError;
///
/// /// Engine for a forward contract struck at 100 with no discounting.
/// struct Forward;
///
/// impl PricingEngine for Forward {
///     fn name(&self) -> &'static str {
///         "forward"
///     }
///
///     fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
///         Ok(spot - 100.0)
///     }
///
///     fn delta_at(&self, _spot: f64) -> Result<f64, PricingError> {
///         Ok(1.0)
///     }
/// }
///
/// let engine = Forward;
/// assert_eq!(engine.greek(Greek::Value, 105.0).unwrap(), 5.0);
/// assert!(engine.vega_at(105.0).unwrap_err().is_unsupported());
/// assert!(engine.greek_or_nan(Greek::Vega, 105.0).unwrap().is_nan());
/// ```
pub trait PricingEngine {
    /// Short engine identifier used in errors and log events.
    fn name(&self) -> &'static str;

    /// Present value at spot `spot`.
    fn value_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Value))
    }

    /// ∂V/∂S
    fn delta_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Delta))
    }

    /// ∂²V/∂S²
    fn gamma_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Gamma))
    }

    /// -∂V/∂T
    fn theta_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Theta))
    }

    /// ∂V/∂σ
    fn vega_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Vega))
    }

    /// ∂V/∂r
    fn rho_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Rho))
    }

    /// ∂²V/∂S∂σ
    fn vanna_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Vanna))
    }

    /// -∂²V/∂S∂T
    fn charm_at(&self, _spot: f64) -> Result<f64, PricingError> {
        Err(self.unsupported(Greek::Charm))
    }

    /// Dispatches to the method for `greek`.
    fn greek(&self, greek: Greek, spot: f64) -> Result<f64, PricingError> {
        match greek {
            Greek::Value => self.value_at(spot),
            Greek::Delta => self.delta_at(spot),
            Greek::Gamma => self.gamma_at(spot),
            Greek::Theta => self.theta_at(spot),
            Greek::Vega => self.vega_at(spot),
            Greek::Rho => self.rho_at(spot),
            Greek::Vanna => self.vanna_at(spot),
            Greek::Charm => self.charm_at(spot),
        }
    }

    /// Like [`PricingEngine::greek`], but maps an unsupported Greek to NaN.
    ///
    /// Other failures are still returned as errors.
    fn greek_or_nan(&self, greek: Greek, spot: f64) -> Result<f64, PricingError> {
        match self.greek(greek, spot) {
            Err(err) if err.is_unsupported() => Ok(f64::NAN),
            other => other,
        }
    }

    /// The error reported for an unimplemented Greek.
    fn unsupported(&self, greek: Greek) -> PricingError {
        PricingError::UnsupportedGreek {
            greek,
            engine: self.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ValueOnly;

    impl PricingEngine for ValueOnly {
        fn name(&self) -> &'static str {
            "value-only"
        }

        fn value_at(&self, spot: f64) -> Result<f64, PricingError> {
            if spot < 0.0 {
                return Err(PricingError::InvalidOperation("negative spot".to_string()));
            }
            Ok(2.0 * spot)
        }
    }

    #[test]
    fn test_defaults_report_unsupported() {
        let engine = ValueOnly;
        for greek in Greek::ALL.into_iter().skip(1) {
            let err = engine.greek(greek, 1.0).unwrap_err();
            assert_eq!(
                err,
                PricingError::UnsupportedGreek {
                    greek,
                    engine: "value-only"
                }
            );
        }
    }

    #[test]
    fn test_dispatch_reaches_override() {
        assert_eq!(ValueOnly.greek(Greek::Value, 3.0).unwrap(), 6.0);
    }

    #[test]
    fn test_nan_sentinel_only_for_unsupported() {
        let engine = ValueOnly;
        assert!(engine.greek_or_nan(Greek::Charm, 1.0).unwrap().is_nan());
        assert!(engine.greek_or_nan(Greek::Value, -1.0).is_err());
    }

    #[test]
    fn test_greek_display() {
        assert_eq!(Greek::Vanna.to_string(), "Vanna");
    }
}
