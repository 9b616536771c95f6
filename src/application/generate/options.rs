//! Generate Options

use std::path::PathBuf;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the project is written to
    pub destination: PathBuf,
    /// Replace a non-empty destination
    pub force: bool,
    /// Render and validate, but write nothing
    pub dry_run: bool,
    /// Syntax-check generated files before writing
    pub validate_syntax: bool,
    /// Name of the answers record inside the project (`None` to omit it)
    pub answers_file: Option<String>,
}

impl GenerateOptions {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            force: false,
            dry_run: false,
            validate_syntax: true,
            answers_file: Some(".keel-answers.yml".to_string()),
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_validation(mut self, validate_syntax: bool) -> Self {
        self.validate_syntax = validate_syntax;
        self
    }

    pub fn with_answers_file(mut self, name: Option<String>) -> Self {
        self.answers_file = name;
        self
    }
}
