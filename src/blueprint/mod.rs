//! The Django project blueprint
//!
//! Everything that is specific to the generated project lives here as
//! const tables: declared flags, compatibility rules, derived features,
//! Python dependencies and the template manifest. The domain services are
//! generic over these tables.

pub mod features;
pub mod flags;
pub mod manifest;
pub mod packages;
pub mod rules;

use std::sync::OnceLock;

use crate::domain::entities::TemplateTree;
use crate::domain::services::{AnswerResolver, Renderer};
use crate::error::RenderError;

pub use features::DjangoContext;
pub use flags::{flag, FLAGS};
pub use manifest::NODES;
pub use rules::RULES;

static RENDERER: OnceLock<Renderer> = OnceLock::new();

/// Resolver over the blueprint's flags and rules
pub fn resolver() -> AnswerResolver<'static> {
    AnswerResolver::new(FLAGS, RULES)
}

/// Process-wide renderer, compiled on first use
pub fn renderer() -> Result<&'static Renderer, RenderError> {
    if let Some(renderer) = RENDERER.get() {
        return Ok(renderer);
    }
    let tree = TemplateTree::build(NODES)?;
    let renderer = Renderer::new(tree, Box::new(DjangoContext))?;
    Ok(RENDERER.get_or_init(|| renderer))
}
