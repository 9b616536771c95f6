//! Error types for Keel
//!
//! Library code returns [`KeelError`]; the binary wraps it in `anyhow`.
//! Resolution failures are [`ValidationError`]s and are raised before any
//! file is written. Anything that goes wrong afterwards is a [`RenderError`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Keel operations
pub type KeelResult<T> = Result<T, KeelError>;

/// Main error type for Keel operations
#[derive(Error, Debug)]
pub enum KeelError {
    /// Answers failed domain or compatibility validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Rendering or materialization failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Answers file could not be read or parsed
    #[error("invalid answers file {}: {message}", .file.display())]
    AnswersFile { file: PathBuf, message: String },

    /// Malformed `--set key=value` override
    #[error("invalid override '{raw}': expected KEY=VALUE")]
    InvalidOverride { raw: String },

    /// Tool configuration could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single answer that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Answer names a flag that is not declared
    #[error("unknown flag '{flag}'")]
    UnknownFlag { flag: String },

    /// Value is outside the flag's domain or of the wrong shape
    #[error("invalid value {value} for '{flag}': expected {expected}")]
    InvalidValue {
        flag: String,
        value: String,
        expected: String,
    },

    /// Two or more flags form a known-incompatible combination
    #[error("{message} [{rule}: {}]", .flags.join(", "))]
    Incompatible {
        rule: String,
        flags: Vec<String>,
        message: String,
    },
}

impl ValidationError {
    /// Flags this error is about
    pub fn flags(&self) -> Vec<&str> {
        match self {
            ValidationError::UnknownFlag { flag } | ValidationError::InvalidValue { flag, .. } => {
                vec![flag.as_str()]
            }
            ValidationError::Incompatible { flags, .. } => {
                flags.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Every validation failure found in one resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any error mentions `flag`
    pub fn mentions(&self, flag: &str) -> bool {
        self.0.iter().any(|e| e.flags().contains(&flag))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{}", single),
            errors => {
                write!(f, "{} validation errors:", errors.len())?;
                for error in errors {
                    write!(f, "\n  - {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Failure while rendering or writing the template tree
#[derive(Error, Debug)]
pub enum RenderError {
    /// Template body failed to compile
    #[error("template '{path}' failed to compile: {message}")]
    Template { path: String, message: String },

    /// Placeholder could not be substituted
    #[error("failed to render '{path}': {message}")]
    Substitution { path: String, message: String },

    /// Derived render values could not be computed
    #[error("render context is invalid: {message}")]
    Context { message: String },

    /// Inclusion predicate could not be evaluated
    #[error("inclusion predicate of '{path}' is invalid: {message}")]
    Predicate { path: String, message: String },

    /// A template or the answers record names an unusable output path
    #[error("invalid output path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    /// Two included nodes produce the same output path
    #[error("more than one included template produces '{path}'")]
    DuplicatePath { path: String },

    /// Rendered file failed syntax validation
    #[error("generated {language} file '{path}' is invalid: {message}")]
    InvalidOutput {
        path: String,
        language: &'static str,
        message: String,
    },

    /// Destination exists and holds files
    #[error("destination {} already exists and is not empty (use --force to replace it)", .path.display())]
    DestinationNotEmpty { path: PathBuf },

    /// Destination exists but is not a directory
    #[error("destination {} exists and is not a directory", .path.display())]
    DestinationNotDirectory { path: PathBuf },

    /// Filesystem failure during materialization
    #[error("failed to write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}
