use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Keel - parameterized Django project scaffolding
#[derive(Parser, Debug)]
#[command(name = "keel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Tool configuration file (default: <config dir>/keel/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where answers come from, lowest priority first: config `[defaults]`,
/// the answers file, then `--set`
#[derive(Args, Debug, Clone, Default)]
pub struct AnswerArgs {
    /// Answers file (YAML, TOML or JSON by extension)
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Override one answer (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Skip syntax validation of generated files
    #[arg(long)]
    pub no_validate: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new Django project
    New {
        /// Directory to create
        destination: PathBuf,

        #[command(flatten)]
        answers: AnswerArgs,

        /// Replace a non-empty destination
        #[arg(short, long)]
        force: bool,

        /// Render and validate without writing
        #[arg(long)]
        dry_run: bool,

        /// Do not write the answers record into the project
        #[arg(long)]
        no_record: bool,
    },

    /// Validate answers and render in memory
    Check {
        #[command(flatten)]
        answers: AnswerArgs,

        /// Only resolve answers; skip rendering
        #[arg(long)]
        resolve_only: bool,
    },

    /// Compare a fresh render with an existing project
    Diff {
        /// Existing project directory
        destination: PathBuf,

        #[command(flatten)]
        answers: AnswerArgs,

        /// Print unified diffs for modified files
        #[arg(short, long)]
        patch: bool,

        /// Leave the answers record out of the comparison
        #[arg(long)]
        no_record: bool,
    },

    /// List accepted flags and compatibility rules
    Flags {
        /// Only list compatibility rules
        #[arg(long)]
        rules: bool,
    },
}
