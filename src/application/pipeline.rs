//! Project Pipeline
//!
//! The in-memory part of every command:
//! 1. Resolve raw answers into a FlagSet
//! 2. Render the template tree
//! 3. Syntax-check the rendered files
//! 4. Add the answers record
//!
//! Nothing here touches the destination.

use std::path::Path;

use crate::blueprint;
use crate::domain::entities::{validate_relative_path, RenderedArtifact, RenderedFile};
use crate::domain::ports::{RenderEvent, RenderEventSink};
use crate::domain::services::{OutputValidator, RawAnswers, Resolution};
use crate::error::{KeelResult, RenderError};
use crate::infrastructure::answers;

/// Rendered project, ready to write or compare
#[derive(Debug, Clone)]
pub struct PreparedProject {
    pub resolution: Resolution,
    pub artifact: RenderedArtifact,
    /// Files that went through syntax validation
    pub validated: usize,
}

/// Pipeline settings
#[derive(Debug, Clone)]
pub struct ProjectPipeline {
    validate_syntax: bool,
    answers_file: Option<String>,
}

impl Default for ProjectPipeline {
    fn default() -> Self {
        Self {
            validate_syntax: true,
            answers_file: Some(".keel-answers.yml".to_string()),
        }
    }
}

impl ProjectPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(mut self, validate_syntax: bool) -> Self {
        self.validate_syntax = validate_syntax;
        self
    }

    /// Name of the answers record; `None` leaves it out
    pub fn with_answers_file(mut self, name: Option<String>) -> Self {
        self.answers_file = name;
        self
    }

    pub fn run(&self, raw: &RawAnswers, events: &dyn RenderEventSink) -> KeelResult<PreparedProject> {
        let resolution = blueprint::resolver().resolve(raw)?;
        tracing::info!(
            flags = resolution.flags.len(),
            defaulted = resolution.defaulted.len(),
            "answers resolved"
        );
        events.on_event(RenderEvent::Resolved {
            flag_count: resolution.flags.len(),
            defaulted_count: resolution.defaulted.len(),
        });

        let mut artifact = blueprint::renderer()?.render_with_events(&resolution.flags, events)?;

        let validated = if self.validate_syntax {
            OutputValidator::new().validate(&artifact)?
        } else {
            tracing::warn!("syntax validation disabled");
            0
        };

        if let Some(name) = &self.answers_file {
            validate_relative_path(name)?;
            let record = answers::render_record(Path::new(name), &resolution.flags)?;
            if !artifact.add_file(name.clone(), RenderedFile::new(record, false)) {
                return Err(RenderError::DuplicatePath { path: name.clone() }.into());
            }
        }

        events.on_event(RenderEvent::Rendered {
            file_count: artifact.file_count(),
            dir_count: artifact.dirs().count(),
            digest: artifact.digest().to_string(),
        });

        Ok(PreparedProject {
            resolution,
            artifact,
            validated,
        })
    }
}
