use std::path::Path;

use anyhow::Result;
use keel::application::{ChangeType, DiffOptions, DiffUseCase};
use keel::infrastructure::LocalFs;

use super::Session;
use crate::cli::AnswerArgs;

fn marker(change: ChangeType) -> char {
    match change {
        ChangeType::New => '+',
        ChangeType::Modified => '~',
        ChangeType::Unchanged => '=',
        ChangeType::Extra => '?',
    }
}

pub fn cmd_diff(
    session: &Session,
    destination: &Path,
    args: &AnswerArgs,
    patch: bool,
    no_record: bool,
) -> Result<()> {
    let raw = session.collect_answers(args)?;
    let options = DiffOptions::new(destination)
        .with_patch(patch)
        .with_validation(session.validate_syntax(args))
        .with_answers_file(session.answers_file(no_record));

    let result = DiffUseCase::new(LocalFs::new()).execute(&raw, &options)?;

    if session.json {
        for entry in result.changes() {
            let mut event = serde_json::json!({
                "event": "item",
                "command": "diff",
                "path": entry.path,
                "change": entry.change.as_str(),
            });
            if let Some(patch) = &entry.patch {
                event["patch"] = serde_json::Value::String(patch.clone());
            }
            crate::ui::json::emit(event)?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "diff",
            "destination": destination.display().to_string(),
            "new": result.count(ChangeType::New),
            "modified": result.count(ChangeType::Modified),
            "unchanged": result.count(ChangeType::Unchanged),
            "extra": result.count(ChangeType::Extra),
        }))?;
        return Ok(());
    }

    for entry in &result.entries {
        if entry.change == ChangeType::Unchanged && !session.is_verbose() {
            continue;
        }
        println!("  {} {}", marker(entry.change), entry.path);
    }

    if patch {
        for entry in result.changes() {
            if let Some(patch) = &entry.patch {
                println!();
                print!("{}", patch);
            }
        }
    }

    println!();
    println!(
        "Summary: {} new, {} modified, {} unchanged, {} extra",
        result.count(ChangeType::New),
        result.count(ChangeType::Modified),
        result.count(ChangeType::Unchanged),
        result.count(ChangeType::Extra)
    );
    Ok(())
}
