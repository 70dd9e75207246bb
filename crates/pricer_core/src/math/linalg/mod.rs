//! Banded linear algebra.
//!
//! - [`TridiagonalLu`]: factorise once, solve many right-hand sides
//! - [`solve_tridiagonal`]: one-shot convenience wrapper

mod tridiagonal;

pub use tridiagonal::{solve_tridiagonal, TridiagonalLu};
