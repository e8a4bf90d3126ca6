//! Pixel ↔ logical unit conversion.

use crate::config::LayoutConfig;
use crate::placement::Placement;
use slate_core::Rect;

/// Round half toward positive infinity: `0.5 → 1`, `-0.5 → 0`.
pub(crate) fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Scale between the fixed logical space and on-screen pixels.
///
/// A single scalar covers both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    unit: f32,
    logical_width: f32,
}

impl UnitConverter {
    /// Converter for a container of the given logical width, at the
    /// configured default unit.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            unit: config.default_unit,
            logical_width: config.container_width(),
        }
    }

    /// Pixels per logical unit.
    pub fn unit(&self) -> f32 {
        self.unit
    }

    /// Logical width of the container.
    pub fn logical_width(&self) -> f32 {
        self.logical_width
    }

    /// Rescale from a measured container width.
    ///
    /// A width of zero means the element has not been laid out yet; the
    /// previous unit is kept and `false` returned.
    pub fn measure(&mut self, width_px: f32) -> bool {
        if !(width_px.is_finite() && width_px > 0.0) {
            tracing::trace!(width_px, "container not measurable, keeping unit");
            return false;
        }
        self.unit = width_px / self.logical_width;
        true
    }

    pub fn to_pixels(&self, logical: f32) -> f32 {
        logical * self.unit
    }

    pub fn to_logical(&self, pixels: f32) -> f32 {
        pixels / self.unit
    }

    /// Pixel rectangle for a placement.
    pub fn rect_to_pixels(&self, placement: &Placement) -> Rect {
        placement.rect().scale(self.unit)
    }

    /// Convert a pixel delta to a logical delta snapped to multiples of
    /// `step`.
    pub fn snap_delta(&self, pixel_delta: f32, step: f32) -> f32 {
        round_half_up(pixel_delta / (self.unit * step)) * step
    }
}
