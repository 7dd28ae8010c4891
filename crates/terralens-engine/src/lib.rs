//! Terralens Classification Engine
//!
//! Pure functions over `geojson` feature collections:
//! - Temporal filtering: which features are visible at a given cutoff date
//! - Classification: which display color each feature gets, by evaluating
//!   an ordered threshold-rule list against a configured property field
//!
//! Both are side-effect free and idempotent; the host calls them on every
//! cutoff or config change and renders the result. No caching is done
//! here - configs are replaced wholesale and feature counts are small.
//!
//! # Examples
//!
//! ```
//! use geojson::Feature;
//! use terralens_domain::{DataSourceConfig, RuleOperator, ThresholdRule};
//! use terralens_engine::classify;
//!
//! let config = DataSourceConfig::new(
//!     "temperature_2m",
//!     vec![ThresholdRule::new(RuleOperator::Lt, 10.0, "red")],
//! );
//!
//! let feature = Feature {
//!     bbox: None,
//!     geometry: None,
//!     id: None,
//!     properties: Some(
//!         serde_json::json!({"temperature_2m": 5})
//!             .as_object()
//!             .cloned()
//!             .unwrap(),
//!     ),
//!     foreign_members: None,
//! };
//!
//! assert_eq!(classify(&feature, Some(&config)), "red");
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod temporal;

pub use classify::{apply_colors, classify, classify_collection};
pub use temporal::{filter_by_cutoff, passes_cutoff};
