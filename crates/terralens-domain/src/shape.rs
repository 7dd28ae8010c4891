//! Shape module - user-authored geometry records

use crate::provenance::Provenance;
use geojson::Feature;
use std::fmt;

/// Unique identifier for a shape based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability, so ids reflect creation order
/// - 128-bit uniqueness without coordination
/// - RFC 9562-standard string format for host round-trips
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u128);

impl ShapeId {
    /// Generate a new UUIDv7-based ShapeId
    ///
    /// # Examples
    ///
    /// ```
    /// use terralens_domain::ShapeId;
    ///
    /// let id = ShapeId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ShapeId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ShapeId from a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use terralens_domain::ShapeId;
    ///
    /// let id = ShapeId::new();
    /// let parsed = ShapeId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid shape id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A user-authored shape owned by the shape store
///
/// Records are created by draw actions or file import and destroyed only
/// by explicit delete; they never expire on their own. The label exists
/// for interactive identification (hover/click) and is never consulted by
/// filtering or classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    /// Unique identifier
    pub id: ShapeId,

    /// User-visible display label
    pub label: String,

    /// Whether the shape was drawn or imported
    pub provenance: Provenance,

    /// The underlying geometry and properties; opaque to this core
    pub feature: Feature,
}

impl ShapeRecord {
    /// Create a record for a freshly drawn shape
    pub fn drawn(feature: Feature) -> Self {
        Self::with_provenance(feature, Provenance::Drawn)
    }

    /// Create a record for an imported shape
    pub fn imported(feature: Feature) -> Self {
        Self::with_provenance(feature, Provenance::Imported)
    }

    fn with_provenance(feature: Feature, provenance: Provenance) -> Self {
        let label = label_for(&feature, provenance);
        Self {
            id: ShapeId::new(),
            label,
            provenance,
            feature,
        }
    }
}

/// Display label for a feature: its `name` property when present,
/// otherwise the provenance default (`"Imported Shape"` for imports)
fn label_for(feature: &Feature, provenance: Provenance) -> String {
    feature
        .properties
        .as_ref()
        .and_then(|props| props.get("name"))
        .and_then(|name| name.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| provenance.default_label().to_string())
}
