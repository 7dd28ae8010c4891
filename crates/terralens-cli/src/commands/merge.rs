//! Merge command implementation.

use super::read_collection;
use crate::cli::MergeArgs;
use crate::error::{CliError, Result};
use crate::output::{write_text, Formatter};
use std::fs;
use terralens_store::{to_json, ShapeStore};
use tracing::info;

/// Execute the merge command.
///
/// Builds a shape store the way an interactive session would: drawn files
/// are additive, the import file replaces the imported set as a whole.
pub fn execute_merge(args: MergeArgs, formatter: &Formatter) -> Result<()> {
    let mut store = ShapeStore::new();

    for path in &args.drawn {
        let collection = read_collection(path)?;
        for feature in collection.features {
            store.add_drawn(feature);
        }
    }

    if let Some(path) = &args.import {
        let raw = fs::read_to_string(path)?;
        store
            .set_imported(&raw)
            .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))?;
    }

    info!(
        drawn = store.drawn_count(),
        imported = store.imported_count(),
        "merged shape store"
    );

    let merged = store.export_all();
    write_text(args.output.as_deref(), &to_json(&merged)?)?;

    if let Some(path) = &args.output {
        eprintln!(
            "{}",
            formatter.success(&format!(
                "Wrote {} shapes ({} drawn, {} imported) to {}",
                merged.features.len(),
                store.drawn_count(),
                store.imported_count(),
                path.display()
            ))
        );
    }

    Ok(())
}
