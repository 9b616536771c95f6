//! Domain Entities
//!
//! - `FlagSpec` - A declared flag with its domain and default
//! - `FlagSet` - Resolved, validated answers
//! - `CompatibilityRule` - A cross-flag constraint
//! - `TemplateTree` - The immutable tree of template nodes
//! - `RenderedArtifact` - The output of one render

mod compatibility;
mod flag_set;
mod flag_spec;
mod rendered;
mod template;

pub use compatibility::CompatibilityRule;
pub use flag_set::FlagSet;
pub use flag_spec::{slugify, FlagDefault, FlagKind, FlagSpec, TextRule};
pub use rendered::{RenderedArtifact, RenderedEntry, RenderedFile};
pub use template::{validate_relative_path, NodeKind, NodeSpec, TemplateNode, TemplateTree};
