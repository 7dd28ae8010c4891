//! Provenance module - where a user-authored shape came from

/// Origin of a shape in the store
///
/// Shapes are either drawn interactively or loaded from an external
/// GeoJSON file. The two groups have different lifecycle rules:
/// - Drawn: additive, removed only by explicit delete
/// - Imported: replaced as a whole set on every import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Created via interactive freehand tools
    Drawn,

    /// Loaded from an external GeoJSON file
    Imported,
}

impl Provenance {
    /// Get the provenance name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Drawn => "drawn",
            Provenance::Imported => "imported",
        }
    }

    /// Parse a provenance from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drawn" => Some(Provenance::Drawn),
            "imported" => Some(Provenance::Imported),
            _ => None,
        }
    }

    /// Default display label for shapes of this provenance that carry no
    /// `name` property
    pub fn default_label(&self) -> &'static str {
        match self {
            Provenance::Drawn => "Drawn Shape",
            Provenance::Imported => "Imported Shape",
        }
    }
}

impl std::str::FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid provenance: {}", s))
    }
}
