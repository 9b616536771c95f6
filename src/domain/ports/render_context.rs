//! Render context port
//!
//! The renderer substitutes flag values directly. Anything derived from
//! them (feature booleans, dependency lists) comes from a provider, so the
//! rendering service stays independent of any particular template set.

use crate::domain::entities::FlagSet;
use crate::error::RenderError;

/// Adds derived values to the render context
pub trait ContextProvider: Send + Sync {
    /// Insert derived keys into `context`, which already holds every flag
    ///
    /// Providers must not overwrite a flag.
    fn extend(
        &self,
        flags: &FlagSet,
        context: &mut serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), RenderError>;
}

/// Provider that adds nothing
pub struct FlagsOnly;

impl ContextProvider for FlagsOnly {
    fn extend(
        &self,
        _flags: &FlagSet,
        _context: &mut serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}
