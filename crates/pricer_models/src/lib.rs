//! # Pricer Models (L2: Business Logic)
//!
//! Contract definitions and closed-form valuation formulas.
//!
//! This crate provides:
//! - Contract terms shared by every contract (maturity, σ, r, q)
//! - Vanilla options with European, American or Bermudan exercise
//! - The autocallable ("snowball") note and its validating builder
//! - Generalised Black-Scholes-Merton prices and Greeks
//! - Standard normal distribution helpers
//!
//! ## Design Principles
//!
//! - **Immutable contracts**: sensitivities are computed on bumped clones
//!   obtained through [`instruments::Contract`], never by mutation
//! - **Validated construction**: invalid strikes, barriers and schedules are
//!   rejected when a contract is built
//! - **Builder pattern** for contracts with many parameters

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
