//! Command handlers for the `keel` binary

pub mod check;
pub mod diff;
pub mod flags;
pub mod new;

use std::path::Path;

use anyhow::Result;
use keel::config::{Config, ConfigWarning, Verbosity};
use keel::domain::services::RawAnswers;
use keel::infrastructure::{answers, LocalFs};

use crate::cli::AnswerArgs;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    pub json: bool,
    pub verbosity: Verbosity,
    pub config: Config,
}

impl Session {
    pub fn new(json: bool, verbose: u8, config: Config) -> Self {
        Self {
            json,
            verbosity: config.output.verbosity.raised_by(verbose),
            config,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    pub fn validate_syntax(&self, args: &AnswerArgs) -> bool {
        self.config.render.validate_syntax && !args.no_validate
    }

    /// Answers record name, unless disabled on the command line
    pub fn answers_file(&self, no_record: bool) -> Option<String> {
        (!no_record).then(|| self.config.render.answers_file.clone())
    }

    /// Merge config defaults, the answers file and `--set` overrides
    pub fn collect_answers(&self, args: &AnswerArgs) -> Result<RawAnswers> {
        let defaults = self.config.default_answers();

        let from_file = match &args.answers {
            Some(path) => answers::load(&LocalFs::new(), path)?,
            None => RawAnswers::new(),
        };

        let mut overrides = RawAnswers::new();
        for raw in &args.set {
            let (key, value) = answers::parse_override(raw)?;
            overrides.insert(key, value);
        }

        tracing::debug!(
            defaults = defaults.len(),
            file = from_file.len(),
            overrides = overrides.len(),
            "answer layers collected"
        );
        Ok(answers::merge([&defaults, &from_file, &overrides]))
    }
}

fn describe_warning(warning: &ConfigWarning) -> String {
    let mut text = format!("unknown config key '{}'", warning.key);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    text
}

fn location(file: &Path, line: Option<usize>) -> String {
    match line {
        Some(line) => format!("{}:{}", file.display(), line),
        None => file.display().to_string(),
    }
}

/// Surface non-fatal configuration warnings
pub fn report_config_warnings(warnings: &[ConfigWarning], json: bool) -> Result<()> {
    let in_actions = crate::ui::terminal::detect_capabilities().is_github_actions;
    for warning in warnings {
        if json {
            crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "config",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }))?;
            continue;
        }
        if in_actions {
            let file = warning.file.display().to_string();
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &describe_warning(warning),
                    Some(&file),
                    Some("Keel config"),
                )
            );
        }
        eprintln!(
            "[WARN] {}: {}",
            location(&warning.file, warning.line),
            describe_warning(warning)
        );
    }
    Ok(())
}
