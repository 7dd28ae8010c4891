//! Classify command implementation.

use super::read_collection;
use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::{write_text, Formatter};
use crate::rules::{load_config, validate_cutoff};
use std::collections::BTreeMap;
use terralens_engine::{apply_colors, classify_collection, filter_by_cutoff};
use terralens_store::to_json;
use tracing::info;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, formatter: &Formatter) -> Result<()> {
    let config = load_config(&args.rules)?;
    let mut collection = read_collection(&args.input)?;

    if let Some(cutoff) = &args.cutoff {
        validate_cutoff(cutoff)?;
        collection = filter_by_cutoff(&collection, cutoff);
    }

    info!(
        features = collection.features.len(),
        field = %config.field,
        rules = config.rules.len(),
        "classifying collection"
    );

    if args.summary {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for color in classify_collection(&collection, Some(&config)) {
            *counts.entry(color.to_string()).or_insert(0) += 1;
        }
        println!("{}", formatter.color_summary(&counts));
        return Ok(());
    }

    let styled = apply_colors(&collection, Some(&config));
    write_text(args.output.as_deref(), &to_json(&styled)?)?;

    if let Some(path) = &args.output {
        eprintln!(
            "{}",
            formatter.success(&format!(
                "Wrote {} styled features to {}",
                styled.features.len(),
                path.display()
            ))
        );
    }

    Ok(())
}
