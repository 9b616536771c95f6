use std::path::Path;

use anyhow::Result;
use keel::application::{GenerateOptions, GenerateResult, GenerateUseCase};
use keel::domain::ports::{NoopEventSink, RenderEventSink};
use keel::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};

use super::Session;
use crate::cli::AnswerArgs;

pub fn cmd_new(
    session: &Session,
    destination: &Path,
    args: &AnswerArgs,
    force: bool,
    dry_run: bool,
    no_record: bool,
) -> Result<()> {
    let raw = session.collect_answers(args)?;
    let options = GenerateOptions::new(destination)
        .with_force(force)
        .with_dry_run(dry_run)
        .with_validation(session.validate_syntax(args))
        .with_answers_file(session.answers_file(no_record));

    let events: Box<dyn RenderEventSink> = if session.json {
        Box::new(JsonEventSink::stdout("new"))
    } else if session.is_quiet() {
        Box::new(NoopEventSink)
    } else {
        Box::new(ConsoleEventSink::stdout(session.is_verbose()))
    };

    let result = GenerateUseCase::new(LocalFs::new()).execute(&raw, &options, events.as_ref())?;

    if !session.json && !session.is_quiet() && result.was_written() {
        print_next_steps(&result);
    }
    Ok(())
}

fn print_next_steps(result: &GenerateResult) {
    let sync = match result.flags.text("dependency_manager") {
        Some("poetry") => "poetry install",
        _ => "uv sync",
    };
    let run = match result.flags.text("dependency_manager") {
        Some("poetry") => "poetry run",
        _ => "uv run",
    };

    println!();
    println!("Next steps:");
    println!("  cd {}", result.destination.display());
    println!("  cp .env.example .env");
    println!("  {}", sync);
    println!("  {} python manage.py migrate", run);
    println!("  {} python manage.py runserver", run);
}
