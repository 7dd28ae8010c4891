//! GeoJSON text parsing and serialization for import/export

use crate::StoreError;
use geojson::{Feature, FeatureCollection, GeoJson};

/// Parse raw import text into a flat list of features
///
/// Accepts any top-level GeoJSON shape: a FeatureCollection, a single
/// Feature, or a bare Geometry (wrapped into a property-less feature).
/// Validation is structural only; geometry correctness is not checked.
pub fn parse_geojson(raw: &str) -> Result<Vec<Feature>, StoreError> {
    let geojson = raw
        .parse::<GeoJson>()
        .map_err(|e| StoreError::InvalidImport(e.to_string()))?;

    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }],
    };

    Ok(features)
}

/// Serialize a collection to GeoJSON text for a file-save action
pub fn to_json(collection: &FeatureCollection) -> Result<String, StoreError> {
    Ok(serde_json::to_string(collection)?)
}
