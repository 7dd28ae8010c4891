//! Terralens Domain Layer
//!
//! This crate contains the core value types shared by the classification
//! engine, the shape store, and any host surface. It carries no business
//! logic beyond what the types themselves enforce.
//!
//! ## Key Concepts
//!
//! - **ThresholdRule**: an (operator, value, color) triple; rules form an
//!   ordered list and list order is the only precedence mechanism
//! - **DataSourceConfig**: the property field to classify on plus its rules,
//!   replaced wholesale by the host on every edit
//! - **ShapeRecord**: a user-authored geometry with provenance (drawn or
//!   imported) and a display label
//! - **Colors**: the well-known fallback colors (`blue`, `gray`, `purple`)
//!
//! Dataset features are plain `geojson::Feature` values; geometry stays
//! opaque to every component in this workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod config;
pub mod provenance;
pub mod rule;
pub mod shape;

// Re-exports for convenience
pub use config::DataSourceConfig;
pub use provenance::Provenance;
pub use rule::{RuleOperator, ThresholdRule};
pub use shape::{ShapeId, ShapeRecord};
