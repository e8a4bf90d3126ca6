//! Logical grid constants and the configuration that carries them.
//!
//! A layout lives in a fixed logical space: five 200-unit columns separated by
//! 20-unit margins, 1080 units wide. On screen that space is scaled uniformly
//! to the measured container width.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Width and height of a grid-packed item.
pub const SIZE: f32 = 200.0;
/// Gap between grid-packed items on both axes.
pub const MARGIN: f32 = 20.0;
/// Columns spanned by the logical container.
pub const COLUMNS: usize = 5;
/// Snap step for drag and resize deltas.
pub const STEP: f32 = 10.0;
/// Smallest width or height an item may be resized to.
pub const MIN_SIZE: f32 = 10.0;
/// Title character cap passed to the media preview renderer.
pub const CHAR_CAP: usize = 70;
/// Pixels per logical unit before the container has been measured.
pub const DEFAULT_UNIT: f32 = 10.0;
/// Pixel edge of the square hit target centred on each resize corner.
pub const HANDLE_HIT_SIZE: f32 = 10.0;

/// Logical width of the container for the default grid.
pub const CONTAINER_LOGICAL_WIDTH: f32 = COLUMNS as f32 * SIZE + (COLUMNS - 1) as f32 * MARGIN;

/// Grid and interaction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Grid-packed item edge.
    pub size: f32,
    /// Gap between grid cells.
    pub margin: f32,
    /// Number of columns.
    pub columns: usize,
    /// Snap step.
    pub step: f32,
    /// Minimum item edge.
    pub min_size: f32,
    /// Preview title character cap.
    pub char_cap: usize,
    /// Unit used until the first measurement.
    pub default_unit: f32,
    /// Resize handle hit target, in pixels.
    pub handle_hit_size: f32,
    /// Undo snapshots kept per session; `None` keeps every gesture.
    pub undo_depth: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size: SIZE,
            margin: MARGIN,
            columns: COLUMNS,
            step: STEP,
            min_size: MIN_SIZE,
            char_cap: CHAR_CAP,
            default_unit: DEFAULT_UNIT,
            handle_hit_size: HANDLE_HIT_SIZE,
            undo_depth: None,
        }
    }
}

impl LayoutConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Logical container width: `columns × size + (columns − 1) × margin`.
    #[must_use]
    pub fn container_width(&self) -> f32 {
        let columns = self.columns as f32;
        columns * self.size + (columns - 1.0).max(0.0) * self.margin
    }

    /// Distance between the origins of adjacent grid cells.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.size + self.margin
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::Config("columns must be at least 1".into()));
        }
        for (name, value) in [
            ("size", self.size),
            ("step", self.step),
            ("min_size", self.min_size),
            ("default_unit", self.default_unit),
            ("handle_hit_size", self.handle_hit_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(LayoutError::Config(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.undo_depth == Some(0) {
            return Err(LayoutError::Config("undo_depth must be at least 1".into()));
        }
        if self.min_size > self.container_width() {
            return Err(LayoutError::Config(format!(
                "min_size {} exceeds container width {}",
                self.min_size,
                self.container_width()
            )));
        }
        Ok(())
    }
}
