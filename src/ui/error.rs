use std::path::Path;

use keel::error::{KeelError, RenderError, ValidationError};

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};

/// Short machine-readable category for an error
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<KeelError>() {
        Some(KeelError::Validation(_)) => "validation",
        Some(KeelError::Render(_)) => "render",
        Some(KeelError::AnswersFile { .. }) => "answers",
        Some(KeelError::InvalidOverride { .. }) => "override",
        Some(KeelError::Config { .. }) => "config",
        Some(KeelError::Io(_)) => "io",
        None => "internal",
    }
}

/// File the error is about, if any
pub fn error_file(err: &KeelError) -> Option<&Path> {
    match err {
        KeelError::AnswersFile { file, .. } | KeelError::Config { file, .. } => Some(file),
        KeelError::Render(RenderError::DestinationNotEmpty { path })
        | KeelError::Render(RenderError::DestinationNotDirectory { path })
        | KeelError::Render(RenderError::Write { path, .. }) => Some(path),
        _ => None,
    }
}

fn validation_json(error: &ValidationError) -> serde_json::Value {
    let mut value = serde_json::json!({
        "flags": error.flags(),
        "message": error.to_string(),
    });
    if let ValidationError::Incompatible { rule, .. } = error {
        value["rule"] = serde_json::Value::String(rule.clone());
    }
    value
}

pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let mut output = serde_json::json!({
        "event": "error",
        "kind": error_kind(err),
        "message": err.to_string(),
    });
    if let Some(KeelError::Validation(errors)) = err.downcast_ref::<KeelError>() {
        output["errors"] = errors.errors().iter().map(validation_json).collect();
    }
    output
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut text = format!("[ERROR] {}\n", err);
    for cause in err.chain().skip(1) {
        text.push_str(&format!("  caused by: {}\n", cause));
    }
    if let Some(KeelError::Validation(errors)) = err.downcast_ref::<KeelError>() {
        if errors.errors().iter().any(|e| matches!(e, ValidationError::UnknownFlag { .. })) {
            text.push_str("  run 'keel flags' to list accepted flags\n");
        }
    }
    text
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit(error_json(err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions {
        let file = err
            .downcast_ref::<KeelError>()
            .and_then(error_file)
            .map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                Some("Keel"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
