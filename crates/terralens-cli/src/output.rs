//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a per-color feature count summary.
    pub fn color_summary(&self, counts: &BTreeMap<String, usize>) -> String {
        if counts.is_empty() {
            return self.colorize("No features.", "yellow");
        }

        let total: usize = counts.values().sum();
        let mut lines: Vec<String> = counts
            .iter()
            .map(|(color, count)| format!("{:>8}  {}", count, self.colorize(color, color)))
            .collect();
        lines.push(format!("{:>8}  total", total));
        lines.join("\n")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Write text to a file, or to stdout when no path is given.
pub fn write_text(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
