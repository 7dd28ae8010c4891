//! Command implementations.

mod classify;
mod filter;
mod merge;

pub use classify::execute_classify;
pub use filter::execute_filter;
pub use merge::execute_merge;

use crate::error::{CliError, Result};
use geojson::FeatureCollection;
use std::fs;
use std::path::Path;

/// Read a GeoJSON file into a feature collection.
///
/// Single-feature and bare-geometry files are accepted and wrapped, the
/// same tolerance the import path has.
pub(crate) fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let raw = fs::read_to_string(path)?;
    let features = terralens_store::parse_geojson(&raw)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
