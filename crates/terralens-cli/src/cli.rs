//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terralens CLI - classify, filter, and merge GeoJSON feature data.
#[derive(Debug, Parser)]
#[command(name = "terralens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter a dataset to features visible at a cutoff date
    Filter(FilterArgs),

    /// Color a dataset by threshold rules
    Classify(ClassifyArgs),

    /// Merge drawn and imported shape files into one collection
    Merge(MergeArgs),
}

/// Arguments for the filter command.
#[derive(Debug, Parser)]
pub struct FilterArgs {
    /// Input GeoJSON file
    pub input: PathBuf,

    /// Cutoff date (YYYY-MM-DD); features with a timestamp on or before
    /// this date are kept
    #[arg(short, long)]
    pub cutoff: String,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Input GeoJSON file
    pub input: PathBuf,

    /// Rule configuration file (TOML or JSON)
    #[arg(short, long)]
    pub rules: PathBuf,

    /// Apply a date filter before classifying
    #[arg(long)]
    pub cutoff: Option<String>,

    /// Print per-color feature counts instead of the styled collection
    #[arg(long)]
    pub summary: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the merge command.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// GeoJSON files of drawn shapes (repeatable, order preserved)
    #[arg(long = "drawn")]
    pub drawn: Vec<PathBuf>,

    /// GeoJSON file to import; at most one, a later file would replace an
    /// earlier one anyway
    #[arg(long = "import")]
    pub import: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
