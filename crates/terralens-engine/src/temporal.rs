//! Temporal visibility filtering

use geojson::{Feature, FeatureCollection};

/// Whether a feature is visible at the given cutoff date
///
/// A feature passes iff it carries a non-empty string `timestamp` property
/// that is lexicographically `<=` the cutoff. ISO `YYYY-MM-DD` strings
/// compare correctly under lexicographic order; anything malformed simply
/// fails the comparison and is excluded.
pub fn passes_cutoff(feature: &Feature, cutoff: &str) -> bool {
    feature
        .properties
        .as_ref()
        .and_then(|props| props.get("timestamp"))
        .and_then(|ts| ts.as_str())
        .is_some_and(|ts| !ts.is_empty() && ts <= cutoff)
}

/// Filter a collection down to the features visible at `cutoff`
///
/// Pure: the input is untouched and the output preserves the input's
/// relative order. Features without a usable timestamp are excluded.
pub fn filter_by_cutoff(collection: &FeatureCollection, cutoff: &str) -> FeatureCollection {
    let features = collection
        .features
        .iter()
        .filter(|feature| passes_cutoff(feature, cutoff))
        .cloned()
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
