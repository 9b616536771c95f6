//! CompatibilityRule entity - a known-incompatible flag combination

use crate::domain::entities::FlagSet;
use crate::domain::value_objects::{Predicate, PredicateError};

/// A cross-flag constraint checked during resolution
///
/// `violated_when` describes the forbidden combination; the rule passes when
/// it evaluates to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityRule {
    pub id: &'static str,
    pub violated_when: Predicate,
    pub message: &'static str,
}

impl CompatibilityRule {
    /// Flags the rule reads, in the order the predicate names them
    pub fn flags(&self) -> Vec<&'static str> {
        self.violated_when.referenced_flags()
    }

    /// True if `flags` form the forbidden combination
    pub fn is_violated(&self, flags: &FlagSet) -> Result<bool, PredicateError> {
        self.violated_when.eval(flags)
    }
}
