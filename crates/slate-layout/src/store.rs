//! Persistence boundary: the item list coming in and save requests going out.

use crate::placement::Layout;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One media object on the board. Read-only to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// MIME-like type, e.g. `image/png`
    #[serde(rename = "type")]
    pub kind: String,
    /// Resolved content URL
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MediaItem {
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
            title: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Title, falling back to the file name.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

/// What the editor hands to the store on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRequest {
    pub layout: Layout,
    pub items: Vec<MediaItem>,
}

/// Errors reported by a [`LayoutStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the request.
    #[error("store rejected save: {0}")]
    Rejected(String),

    /// The request could not be encoded.
    #[error("could not encode save request: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Backing store for saved layouts. Saves are not retried or queued.
pub trait LayoutStore {
    fn save(&mut self, request: &SaveRequest) -> Result<(), StoreError>;
}

/// Store that keeps the JSON of every accepted save in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Vec<String>,
    fail_with: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every save with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            saved: Vec::new(),
            fail_with: Some(reason.into()),
        }
    }

    /// JSON documents saved so far, oldest first.
    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    /// Decode the most recent save.
    pub fn last(&self) -> Option<Result<SaveRequest, serde_json::Error>> {
        self.saved.last().map(|json| serde_json::from_str(json))
    }
}

impl LayoutStore for MemoryStore {
    fn save(&mut self, request: &SaveRequest) -> Result<(), StoreError> {
        if let Some(reason) = &self.fail_with {
            return Err(StoreError::Rejected(reason.clone()));
        }
        self.saved.push(serde_json::to_string(request)?);
        Ok(())
    }
}
