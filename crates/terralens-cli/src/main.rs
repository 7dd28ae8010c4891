//! Terralens CLI - classify, filter, and merge GeoJSON feature data.

use clap::Parser;
use terralens_cli::{commands, Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> terralens_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Filter(args) => commands::execute_filter(args, &formatter),
        Command::Classify(args) => commands::execute_classify(args, &formatter),
        Command::Merge(args) => commands::execute_merge(args, &formatter),
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    // RUST_LOG wins over the verbosity flags when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
