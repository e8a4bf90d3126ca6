//! Error types for slate-layout.
//!
//! Nothing here is raised from inside a pointer frame. Rejected frames,
//! zero-width measurements and redundant listener releases are silent; these
//! errors cover construction and the persistence boundary.

use crate::placement::Violation;
use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur when building or saving a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Injected layout does not line up with the item list.
    #[error("Layout has {placements} placement(s) for {items} item(s)")]
    LengthMismatch { items: usize, placements: usize },

    /// Injected placement breaks a bound.
    #[error("Placement {index} is invalid: {violation}")]
    InvalidPlacement { index: usize, violation: Violation },

    /// YAML config could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Layout JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persistence collaborator refused the save.
    #[error("Save failed: {0}")]
    Store(#[from] StoreError),
}
