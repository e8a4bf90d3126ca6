//! Placements, layouts and the deterministic grid packer.

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::store::MediaItem;
use serde::{Deserialize, Serialize};
use slate_core::Rect;
use std::ops::Index;
use thiserror::Error;

/// Position, size and stacking order of one item, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
    /// Stacking order; higher paints on top
    pub z: u32,
}

/// A placement bound that a candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Violation {
    #[error("width {w} is narrower than the minimum {min}")]
    TooNarrow { w: f32, min: f32 },
    #[error("height {h} is shorter than the minimum {min}")]
    TooShort { h: f32, min: f32 },
    #[error("width {w} is wider than the container ({max})")]
    TooWide { w: f32, max: f32 },
    #[error("left edge {x} is past the container's right edge ({max})")]
    PastRightEdge { x: f32, max: f32 },
    #[error("right edge {right} is left of the container")]
    LeftOfContainer { right: f32 },
    #[error("bottom edge {bottom} is above the container")]
    AboveContainer { bottom: f32 },
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
impl Placement {
    /// Create a new placement.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32, z: u32) -> Self {
        Self { x, y, w, h, z }
    }

    /// Logical rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// The item must keep some part inside the horizontal band and below the
    /// top edge.
    pub fn check_position(&self, config: &LayoutConfig) -> Result<(), Violation> {
        let max = config.container_width();
        if !(self.x < max) {
            return Err(Violation::PastRightEdge { x: self.x, max });
        }
        if !(self.right() > 0.0) {
            return Err(Violation::LeftOfContainer {
                right: self.right(),
            });
        }
        if !(self.bottom() > 0.0) {
            return Err(Violation::AboveContainer {
                bottom: self.bottom(),
            });
        }
        Ok(())
    }

    /// Size bounds plus [`Placement::check_position`].
    pub fn check(&self, config: &LayoutConfig) -> Result<(), Violation> {
        let min = config.min_size;
        if !(self.w >= min) {
            return Err(Violation::TooNarrow { w: self.w, min });
        }
        if !(self.h >= min) {
            return Err(Violation::TooShort { h: self.h, min });
        }
        let max = config.container_width();
        if self.w > max {
            return Err(Violation::TooWide { w: self.w, max });
        }
        self.check_position(config)
    }
}

/// Ordered placements, index-aligned with the item list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    /// Wrap a list of placements.
    #[must_use]
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Layout with no placements.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a layout saved by an earlier session.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the persistence collaborator.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Copy of this layout with one placement replaced. Out-of-range indices
    /// return an unchanged copy.
    #[must_use]
    pub fn with_placement(&self, index: usize, placement: Placement) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.placements.get_mut(index) {
            *slot = placement;
        }
        next
    }

    /// Lowest bottom edge across all placements, `0` when empty.
    pub fn bottom(&self) -> f32 {
        self.placements
            .iter()
            .map(Placement::bottom)
            .fold(0.0, f32::max)
    }

    /// Highest stacking order, if any.
    pub fn max_z(&self) -> Option<u32> {
        self.placements.iter().map(|p| p.z).max()
    }

    /// Indices in paint order: ascending `z`, ties by index.
    pub fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.placements.len()).collect();
        order.sort_by_key(|&i| self.placements[i].z);
        order
    }

    /// Copy with stacking orders renumbered `0..len` in paint order.
    #[must_use]
    pub fn restacked(&self) -> Self {
        let mut next = self.clone();
        for (rank, index) in self.paint_order().into_iter().enumerate() {
            next.placements[index].z = rank as u32;
        }
        next
    }

    /// Check every placement, reporting the first failure.
    pub fn validate(&self, config: &LayoutConfig) -> Result<(), LayoutError> {
        for (index, placement) in self.placements.iter().enumerate() {
            placement
                .check(config)
                .map_err(|violation| LayoutError::InvalidPlacement { index, violation })?;
        }
        Ok(())
    }
}

impl Index<usize> for Layout {
    type Output = Placement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.placements[index]
    }
}

impl FromIterator<Placement> for Layout {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Pack `count` items into rows of `config.columns` square cells.
///
/// Depends only on the count, so the same count always yields the same
/// layout.
pub fn generate_layout(count: usize, config: &LayoutConfig) -> Layout {
    let columns = config.columns.max(1);
    let pitch = config.pitch();
    (0..count)
        .map(|i| {
            Placement::new(
                (i % columns) as f32 * pitch,
                (i / columns) as f32 * pitch,
                config.size,
                config.size,
                i as u32,
            )
        })
        .collect()
}

/// [`generate_layout`] over an optional item list; `None` packs nothing.
pub fn generate_layout_for(items: Option<&[MediaItem]>, config: &LayoutConfig) -> Layout {
    generate_layout(items.map_or(0, <[MediaItem]>::len), config)
}

/// Logical height needed to contain the layout.
///
/// Grows when a gesture pushes an item lower and never shrinks on its own, so
/// the page does not jump while editing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerExtent {
    logical: f32,
}

impl ContainerExtent {
    /// Fit a layout exactly.
    pub fn fit(layout: &Layout) -> Self {
        Self {
            logical: layout.bottom(),
        }
    }

    /// Grow to cover `bottom`. Returns true if the extent changed.
    pub fn grow_to(&mut self, bottom: f32) -> bool {
        if bottom > self.logical {
            self.logical = bottom;
            true
        } else {
            false
        }
    }

    /// Height in logical units.
    pub fn logical(&self) -> f32 {
        self.logical
    }

    /// Height in pixels at the given unit.
    pub fn pixels(&self, unit: f32) -> f32 {
        self.logical * unit
    }
}
