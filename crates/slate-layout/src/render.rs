//! Layout → absolutely positioned boxes.
//!
//! Rendering is a pure function of the layout, the unit, the container extent
//! and a small amount of view state. The host draws the boxes in the order
//! given and fills each one with whatever its media preview renderer returns.

use crate::config::LayoutConfig;
use crate::controller::Corner;
use crate::placement::{ContainerExtent, Layout, Placement};
use crate::store::MediaItem;
use slate_core::{Point, Rect, Size};

/// View state that affects drawing but not the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View {
    pub editing: bool,
    pub hover: Option<usize>,
    pub active: Option<usize>,
}

impl View {
    fn is_focused(&self, index: usize) -> bool {
        self.hover == Some(index) || self.active == Some(index)
    }
}

/// A resize handle on one corner of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleBox {
    pub corner: Corner,
    /// Hit target in container pixels
    pub rect: Rect,
    /// Drawn only while the box is hovered or manipulated
    pub visible: bool,
}

/// One item, positioned in container pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBox {
    /// Item index
    pub index: usize,
    pub rect: Rect,
    pub z: u32,
    /// Edit-mode outline in the accent colour
    pub highlighted: bool,
    /// Empty outside edit mode
    pub handles: Vec<HandleBox>,
}

/// Everything needed to draw the container.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    /// Spacing of the editing dot grid; `None` outside edit mode
    pub grid_spacing: Option<f32>,
    /// Boxes in paint order, bottom first
    pub boxes: Vec<RenderBox>,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Body(usize),
    Handle(usize, Corner),
}

impl Hit {
    pub fn index(&self) -> usize {
        match *self {
            Self::Body(index) | Self::Handle(index, _) => index,
        }
    }
}

/// Build the frame for a layout at a given unit.
pub fn render_frame(
    layout: &Layout,
    unit: f32,
    extent: ContainerExtent,
    view: View,
    config: &LayoutConfig,
) -> Frame {
    let boxes = layout
        .paint_order()
        .into_iter()
        .map(|index| render_box(index, &layout[index], unit, view, config))
        .collect();
    Frame {
        width: config.container_width() * unit,
        height: extent.pixels(unit),
        grid_spacing: view.editing.then(|| config.step * unit),
        boxes,
    }
}

fn render_box(
    index: usize,
    placement: &Placement,
    unit: f32,
    view: View,
    config: &LayoutConfig,
) -> RenderBox {
    let rect = placement.rect().scale(unit);
    let focused = view.is_focused(index);
    let handles = if view.editing {
        Corner::ALL
            .iter()
            .map(|&corner| HandleBox {
                corner,
                rect: Rect::centered(corner.point(&rect), config.handle_hit_size),
                visible: focused,
            })
            .collect()
    } else {
        Vec::new()
    };
    RenderBox {
        index,
        rect,
        z: placement.z,
        highlighted: view.editing && focused,
        handles,
    }
}

/// Find what lies under `point`, topmost box first. A box's handles win over
/// its own body.
pub fn hit_test(frame: &Frame, point: Point) -> Option<Hit> {
    frame.boxes.iter().rev().find_map(|b| {
        b.handles
            .iter()
            .find(|h| h.rect.contains_point(&point))
            .map(|h| Hit::Handle(b.index, h.corner))
            .or_else(|| b.rect.contains_point(&point).then_some(Hit::Body(b.index)))
    })
}

/// Inputs for the opaque media preview renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRequest<'a> {
    pub kind: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
    pub char_cap: usize,
    /// Pixel size of the hosting box
    pub size: Size,
}

impl<'a> PreviewRequest<'a> {
    pub fn new(item: &'a MediaItem, size: Size, config: &LayoutConfig) -> Self {
        Self {
            kind: &item.kind,
            url: &item.url,
            title: item.display_title(),
            char_cap: config.char_cap,
            size,
        }
    }
}

/// Renders a media object into whatever the host draws with.
pub trait MediaPreview {
    type Output;

    fn render(&self, request: &PreviewRequest<'_>) -> Self::Output;
}

/// Centre grid-packed items in their cells using measured intrinsic sizes.
///
/// `intrinsic[i]` is the natural logical size of item `i`, capped at one
/// cell. Items with no measurement, or one larger than a cell, keep their
/// position. Sizes are not changed.
pub fn center_in_cells(layout: &Layout, intrinsic: &[Option<Size>], config: &LayoutConfig) -> Layout {
    let cell = Size::new(config.size, config.size);
    layout
        .iter()
        .enumerate()
        .map(|(i, p)| match intrinsic.get(i).copied().flatten() {
            Some(natural) if cell.contains(&natural) => Placement {
                x: p.x + (config.size - natural.width) / 2.0,
                y: p.y + (config.size - natural.height) / 2.0,
                ..*p
            },
            _ => *p,
        })
        .collect()
}
