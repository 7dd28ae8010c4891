//! Rule configuration loading.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use terralens_domain::DataSourceConfig;

/// Load a [`DataSourceConfig`] from a TOML or JSON file.
///
/// Format is chosen by extension: `.toml` parses as TOML, anything else as
/// JSON. Both use the same shape: a `field` string and an ordered `rules`
/// list of `{operator, value, color}` entries.
pub fn load_config(path: &Path) -> Result<DataSourceConfig> {
    let text = fs::read_to_string(path)?;

    let config: DataSourceConfig = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&text)?
    } else {
        serde_json::from_str(&text)?
    };

    if config.field.is_empty() {
        return Err(CliError::Rules("field must not be empty".to_string()));
    }

    Ok(config)
}

/// Light sanity check on a cutoff string: ISO `YYYY-MM-DD` shape.
///
/// The engine compares cutoffs lexicographically and never fails on a
/// malformed date, so this exists purely to catch host-side typos early.
pub fn validate_cutoff(cutoff: &str) -> Result<()> {
    let bytes = cutoff.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());

    if well_formed {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "cutoff '{}' is not a YYYY-MM-DD date",
            cutoff
        )))
    }
}
