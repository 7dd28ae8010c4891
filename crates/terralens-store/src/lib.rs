//! Terralens Shape Store
//!
//! Owns the set of user-created geometries: hand-drawn shapes plus at most
//! one imported layer. Drawn shapes are additive and removed only by
//! explicit delete; a new import atomically replaces the entire imported
//! set. A failed import never touches existing state.
//!
//! All mutation is serialized through the single host action stream, so
//! the store needs no internal locking; user actions arrive as discrete
//! [`StoreCommand`] values applied in order.
//!
//! # Examples
//!
//! ```
//! use terralens_store::ShapeStore;
//!
//! let mut store = ShapeStore::new();
//! store.set_imported(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
//! assert!(store.is_empty());
//! ```

#![warn(missing_docs)]

mod codec;
mod command;
mod store;

use thiserror::Error;

pub use codec::{parse_geojson, to_json};
pub use command::{CommandOutcome, StoreCommand};
pub use store::ShapeStore;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Import text failed to parse as GeoJSON; the store was left unchanged
    #[error("Invalid GeoJSON import: {0}")]
    InvalidImport(String),

    /// Export serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
