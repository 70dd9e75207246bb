//! Contract definitions.
//!
//! - [`ContractTerms`] and the [`Contract`] trait: maturity and market
//!   parameters, with clone-with-override helpers
//! - [`VanillaContract`]: call/put with [`ExerciseType`]
//! - [`AutocallableNote`]: snowball note built via [`AutocallableNoteBuilder`]
//!
//! # Examples
//! ```
//! use pricer_models::instruments::{
//!     Contract, ContractTerms, ExerciseType, OptionType, VanillaContract,
//! };
//! use pricer_core::types::Date;
//!
//! let terms = ContractTerms::new(Date::from_ymd(2025, 1, 1).unwrap(), 0.2, 0.05, 0.0);
//! let put = VanillaContract::new(terms, OptionType::Put, 100.0, ExerciseType::American).unwrap();
//! assert_eq!(put.maturity(), Date::from_ymd(2025, 1, 1).unwrap());
//! ```

mod autocallable;
mod error;
mod exercise;
mod payoff;
mod terms;
mod vanilla;

pub use autocallable::{AutocallableNote, AutocallableNoteBuilder};
pub use error::InstrumentError;
pub use exercise::ExerciseType;
pub use payoff::OptionType;
pub use terms::{Contract, ContractTerms};
pub use vanilla::VanillaContract;
