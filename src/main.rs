//! Keel CLI - parameterized Django project scaffolding
//!
//! Usage: keel <COMMAND>
//!
//! Commands:
//!   new    Generate a new Django project
//!   check  Validate answers and render in memory
//!   diff   Compare a fresh render with an existing project
//!   flags  List accepted flags and compatibility rules

use anyhow::Result;
use clap::Parser;
use keel::config::Config;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::Session;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::discover(cli.config.as_deref())?;
    let session = Session::new(cli.json, cli.verbose, config);
    keel::telemetry::init_tracing(cli.json, session.verbosity);
    commands::report_config_warnings(&warnings, cli.json)?;

    match &cli.command {
        Commands::New {
            destination,
            answers,
            force,
            dry_run,
            no_record,
        } => commands::new::cmd_new(&session, destination, answers, *force, *dry_run, *no_record),
        Commands::Check {
            answers,
            resolve_only,
        } => commands::check::cmd_check(&session, answers, *resolve_only),
        Commands::Diff {
            destination,
            answers,
            patch,
            no_record,
        } => commands::diff::cmd_diff(&session, destination, answers, *patch, *no_record),
        Commands::Flags { rules } => commands::flags::cmd_flags(&session, *rules),
    }
}
