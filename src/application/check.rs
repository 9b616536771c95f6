//! Check Use Case
//!
//! Resolves answers, renders the tree in memory and syntax-checks it,
//! without looking at any destination. Backs `keel check`.

use crate::application::pipeline::ProjectPipeline;
use crate::domain::entities::FlagSet;
use crate::domain::ports::{NoopEventSink, RenderEventSink};
use crate::domain::services::RawAnswers;
use crate::domain::value_objects::ContentHash;
use crate::error::KeelResult;

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Stop after resolution; skip rendering
    pub resolve_only: bool,
    /// Syntax-check rendered files
    pub validate_syntax: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            resolve_only: false,
            validate_syntax: true,
        }
    }
}

impl CheckOptions {
    pub fn with_resolve_only(mut self, resolve_only: bool) -> Self {
        self.resolve_only = resolve_only;
        self
    }

    pub fn with_validation(mut self, validate_syntax: bool) -> Self {
        self.validate_syntax = validate_syntax;
        self
    }
}

/// What rendering produced, when it ran
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub file_count: usize,
    pub dir_count: usize,
    pub validated: usize,
    pub digest: ContentHash,
}

/// Result of the check operation
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub flags: FlagSet,
    pub defaulted: Vec<&'static str>,
    /// `None` with `resolve_only`
    pub render: Option<RenderSummary>,
}

impl CheckResult {
    /// Flags the answers set explicitly
    pub fn answered(&self) -> usize {
        self.flags.len() - self.defaulted.len()
    }
}

/// Check Use Case
#[derive(Debug, Clone, Default)]
pub struct CheckUseCase;

impl CheckUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the check operation
    pub fn execute(&self, raw: &RawAnswers, options: &CheckOptions) -> KeelResult<CheckResult> {
        self.execute_with_events(raw, options, &NoopEventSink)
    }

    pub fn execute_with_events(
        &self,
        raw: &RawAnswers,
        options: &CheckOptions,
        events: &dyn RenderEventSink,
    ) -> KeelResult<CheckResult> {
        if options.resolve_only {
            let resolution = crate::blueprint::resolver().resolve(raw)?;
            return Ok(CheckResult {
                flags: resolution.flags,
                defaulted: resolution.defaulted,
                render: None,
            });
        }

        let prepared = ProjectPipeline::new()
            .with_validation(options.validate_syntax)
            .with_answers_file(None)
            .run(raw, events)?;

        let render = RenderSummary {
            file_count: prepared.artifact.file_count(),
            dir_count: prepared.artifact.dirs().count(),
            validated: prepared.validated,
            digest: prepared.artifact.digest(),
        };
        Ok(CheckResult {
            flags: prepared.resolution.flags,
            defaulted: prepared.resolution.defaulted,
            render: Some(render),
        })
    }
}
