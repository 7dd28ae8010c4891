//! Filter command implementation.

use super::read_collection;
use crate::cli::FilterArgs;
use crate::error::Result;
use crate::output::{write_text, Formatter};
use crate::rules::validate_cutoff;
use terralens_engine::filter_by_cutoff;
use terralens_store::to_json;
use tracing::info;

/// Execute the filter command.
pub fn execute_filter(args: FilterArgs, formatter: &Formatter) -> Result<()> {
    validate_cutoff(&args.cutoff)?;

    let collection = read_collection(&args.input)?;
    let total = collection.features.len();

    let filtered = filter_by_cutoff(&collection, &args.cutoff);
    info!(
        kept = filtered.features.len(),
        total,
        cutoff = %args.cutoff,
        "applied temporal filter"
    );

    let kept = filtered.features.len();
    write_text(args.output.as_deref(), &to_json(&filtered)?)?;

    if let Some(path) = &args.output {
        eprintln!(
            "{}",
            formatter.success(&format!(
                "Wrote {} of {} features to {}",
                kept,
                total,
                path.display()
            ))
        );
    }

    Ok(())
}
