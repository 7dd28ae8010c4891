//! The shape store itself

use crate::codec::parse_geojson;
use crate::StoreError;
use geojson::{Feature, FeatureCollection};
use terralens_domain::{ShapeId, ShapeRecord};
use tracing::debug;

/// Owner of all user-authored shapes for the current session
///
/// Two ordered groups: drawn shapes (additive) and imported shapes
/// (replaced as a whole set on every import). No other component mutates
/// shape records. State lives only for the session; persistence is the
/// host's concern, via [`ShapeStore::export_all`].
#[derive(Debug, Default)]
pub struct ShapeStore {
    drawn: Vec<ShapeRecord>,
    imported: Vec<ShapeRecord>,
}

impl ShapeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawn shape; always succeeds
    pub fn add_drawn(&mut self, feature: Feature) -> ShapeId {
        let record = ShapeRecord::drawn(feature);
        let id = record.id;
        self.drawn.push(record);
        id
    }

    /// Remove exactly one drawn shape by id; no-op if absent
    ///
    /// Returns whether a shape was removed.
    pub fn remove_drawn(&mut self, id: ShapeId) -> bool {
        remove_one(&mut self.drawn, id)
    }

    /// Remove exactly one imported shape by id; no-op if absent
    pub fn remove_imported(&mut self, id: ShapeId) -> bool {
        remove_one(&mut self.imported, id)
    }

    /// Replace the entire imported set with the shapes parsed from `raw`
    ///
    /// Accepts a FeatureCollection, a single Feature, or a bare Geometry.
    /// On parse failure the store is left completely unchanged and the
    /// error carries the parser's message for the host to surface.
    ///
    /// Returns the ids of the newly imported shapes.
    pub fn set_imported(&mut self, raw: &str) -> Result<Vec<ShapeId>, StoreError> {
        // Parse fully before touching state, so a bad import never
        // partially applies
        let features = parse_geojson(raw)?;

        let records: Vec<ShapeRecord> = features.into_iter().map(ShapeRecord::imported).collect();
        let ids: Vec<ShapeId> = records.iter().map(|r| r.id).collect();

        debug!(
            previous = self.imported.len(),
            replacement = records.len(),
            "replacing imported shape set"
        );
        self.imported = records;

        Ok(ids)
    }

    /// Snapshot of all shapes: drawn first, then imported, each group in
    /// insertion order
    ///
    /// The result is independent of the store; mutating it changes nothing
    /// here.
    pub fn export_all(&self) -> FeatureCollection {
        let features = self
            .drawn
            .iter()
            .chain(self.imported.iter())
            .map(|record| record.feature.clone())
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    /// Look up a shape in either group by id
    pub fn find(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.drawn
            .iter()
            .chain(self.imported.iter())
            .find(|record| record.id == id)
    }

    /// The drawn shapes, in insertion order
    pub fn drawn(&self) -> &[ShapeRecord] {
        &self.drawn
    }

    /// The imported shapes, in insertion order
    pub fn imported(&self) -> &[ShapeRecord] {
        &self.imported
    }

    /// Number of drawn shapes
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Number of imported shapes
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    /// Total number of shapes
    pub fn len(&self) -> usize {
        self.drawn.len() + self.imported.len()
    }

    /// Whether the store holds no shapes
    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty() && self.imported.is_empty()
    }
}

fn remove_one(records: &mut Vec<ShapeRecord>, id: ShapeId) -> bool {
    match records.iter().position(|record| record.id == id) {
        Some(index) => {
            let removed = records.remove(index);
            debug!(id = %removed.id, provenance = removed.provenance.as_str(), "removed shape");
            true
        }
        None => false,
    }
}
