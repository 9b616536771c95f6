//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::RawAnswers;
use crate::error::KeelResult;

use super::loader::{self, ConfigWarning};

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Syntax-check generated files before writing them
    #[serde(default = "default_true")]
    pub validate_syntax: bool,

    /// Name of the answers record written into generated projects
    #[serde(default = "default_answers_file")]
    pub answers_file: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            validate_syntax: true,
            answers_file: default_answers_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_answers_file() -> String {
    ".keel-answers.yml".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Level implied by repeated `-v` flags, never below `self`
    pub fn raised_by(self, count: u8) -> Self {
        let from_flags = match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flags)
    }

    /// Default `tracing` filter directive
    pub fn log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Answer defaults applied before the answers file and `--set`
    #[serde(default)]
    pub defaults: toml::Table,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> KeelResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> KeelResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the user config, else defaults
    ///
    /// An explicit path must exist; the user config is optional.
    pub fn discover(explicit: Option<&Path>) -> KeelResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (KEEL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// `[defaults]` as raw answers
    pub fn default_answers(&self) -> RawAnswers {
        match serde_json::to_value(&self.defaults) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RawAnswers::new(),
        }
    }
}
