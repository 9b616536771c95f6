//! Immutable value types

mod flag_value;
mod hash;
mod predicate;

pub use flag_value::FlagValue;
pub use hash::ContentHash;
pub use predicate::{Predicate, PredicateError};
