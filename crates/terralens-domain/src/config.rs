//! Data source configuration - which field to classify on, and the rules

use crate::rule::ThresholdRule;
use serde::{Deserialize, Serialize};

/// Classification configuration for one data source
///
/// The host recreates this wholesale whenever the user edits the field or
/// the rule list; the engine never sees partial updates. Absence of a
/// config is a valid state (every feature gets the default color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Name of the feature property to classify on
    pub field: String,

    /// Ordered rule list; earlier rules win ties
    pub rules: Vec<ThresholdRule>,
}

impl DataSourceConfig {
    /// Create a new configuration
    pub fn new(field: impl Into<String>, rules: Vec<ThresholdRule>) -> Self {
        Self {
            field: field.into(),
            rules,
        }
    }
}
