//! Domain Layer
//!
//! Pure scaffolding logic: flags, predicates, the template tree and the
//! services that resolve answers and render artifacts.
//!
//! ## Structure
//!
//! - `entities/` - FlagSpec, FlagSet, CompatibilityRule, TemplateTree, RenderedArtifact
//! - `value_objects/` - FlagValue, Predicate, ContentHash
//! - `services/` - AnswerResolver, Renderer, OutputValidator, Differ
//! - `ports/` - Interfaces for infrastructure (file system, events, render context)
//!
//! Nothing in here touches the file system directly; all I/O goes through
//! the ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
