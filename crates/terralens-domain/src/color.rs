//! Well-known display colors used by the classification fallbacks

/// Color for features with no active rule configuration, and for features
/// no rule matches.
pub const DEFAULT_COLOR: &str = "blue";

/// Color for features whose configured field is absent or non-numeric.
///
/// This is a defined output, not an error condition.
pub const UNCLASSIFIABLE_COLOR: &str = "gray";

/// Display color the host applies to imported shapes.
pub const IMPORTED_LAYER_COLOR: &str = "purple";
