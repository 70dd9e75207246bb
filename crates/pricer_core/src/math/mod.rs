//! Numerical building blocks shared by the pricing engines.
//!
//! - [`interpolators`]: continuous reconstruction of discrete solutions
//! - [`linalg`]: tridiagonal systems arising from finite-difference schemes

pub mod interpolators;
pub mod linalg;
