//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Yule - draw a family gift exchange.
#[derive(Debug, Parser)]
#[command(name = "yule")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "YULE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one pairing per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit the roster interactively, then draw and save a new assignment
    Draw(DrawArgs),

    /// Manage the stored roster
    People(PeopleArgs),

    /// Inspect or upgrade saved assignment files
    History(HistoryArgs),
}

/// Arguments for the draw command.
#[derive(Debug, Default, Parser)]
pub struct DrawArgs {
    /// Year being drawn; reads assignments_<year-1>.json and writes assignments_<year>.json
    #[arg(long)]
    pub year: Option<u32>,

    /// Previous assignment file (overrides --year and config)
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Where to write the new assignment (overrides --year and config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the interactive add/remove prompts
    #[arg(long)]
    pub no_edit: bool,

    /// Print the draw without saving it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for roster management.
#[derive(Debug, Parser)]
pub struct PeopleArgs {
    #[command(subcommand)]
    pub action: PeopleAction,
}

/// Roster management actions.
#[derive(Debug, Subcommand)]
pub enum PeopleAction {
    /// List the stored roster
    List,

    /// Add a participant
    Add {
        /// Participant name
        name: String,
        /// Family ID
        #[arg(long)]
        family: String,
        /// Draw in the kid pool
        #[arg(long)]
        kid: bool,
    },

    /// Remove a participant (name match is case-insensitive)
    Remove {
        /// Participant name
        name: String,
        /// Also remove every member of the participant's family
        #[arg(long)]
        whole_family: bool,
    },
}

/// Arguments for history commands.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: HistoryAction,
}

/// History actions.
#[derive(Debug, Subcommand)]
pub enum HistoryAction {
    /// Print a saved assignment
    Show(HistoryFileArgs),

    /// Rewrite a names-only history file with full participant records
    Upgrade(HistoryFileArgs),
}

/// Selects a history file.
#[derive(Debug, Parser)]
pub struct HistoryFileArgs {
    /// Assignment file (defaults to the configured previous draw)
    pub file: Option<PathBuf>,

    /// Use assignments_<year>.json from the data directory
    #[arg(long, conflicts_with = "file")]
    pub year: Option<u32>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
