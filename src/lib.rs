//! Keel - parameterized Django project scaffolding
//!
//! Keel turns a set of answers (feature flags) into a complete Django
//! project tree. Answers are validated against a declared flag catalog and
//! a set of compatibility rules before anything is rendered; the rendered
//! tree is syntax-checked and written to disk all at once, or not at all.

pub mod application;
pub mod blueprint;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

// Re-exports for convenience
pub use application::{
    CheckOptions, CheckUseCase, DiffOptions, DiffUseCase, GenerateOptions, GenerateResult,
    GenerateUseCase,
};
pub use config::{Config, Verbosity};
pub use domain::entities::{FlagSet, RenderedArtifact};
pub use domain::services::RawAnswers;
pub use error::{KeelError, KeelResult, RenderError, ValidationError, ValidationErrors};
