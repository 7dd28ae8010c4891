//! Terralens CLI - host surface for the classification core.
//!
//! The interactive app's UI actions map onto file-based commands here:
//! date filtering, threshold classification, and merging drawn/imported
//! shape files into one exportable GeoJSON collection.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod rules;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::Formatter;
