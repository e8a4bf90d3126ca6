#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_let_else)]
//! Free-form layout engine for the Slate moodboard editor.
//!
//! Items live on a fixed-width logical canvas and are drawn at
//! `logical × unit` pixels, where the unit follows the container's measured
//! width. In edit mode every item can be dragged and resized from its four
//! corners, with positions snapping to a logical step.
//!
//! - **Placements**: [`Placement`], [`Layout`] and [`generate_layout`] grid packing
//! - **Gestures**: [`InteractionController`] drives drag, resize, ratio lock and undo
//! - **Rendering**: [`render_frame`] and [`hit_test`] turn a layout into pixel boxes
//! - **Editor**: [`SlateEditor`] routes host [`Event`](slate_core::Event)s and owns
//!   the listener subscriptions for a session
//!
//! Persistence sits behind [`LayoutStore`].

mod config;
mod controller;
mod editor;
mod error;
mod history;
mod listeners;
mod placement;
mod ratio;
mod render;
mod store;
mod units;

pub use config::{
    LayoutConfig, CHAR_CAP, COLUMNS, CONTAINER_LOGICAL_WIDTH, DEFAULT_UNIT, HANDLE_HIT_SIZE,
    MARGIN, MIN_SIZE, SIZE, STEP,
};
pub use controller::{Corner, GestureState, InteractionController, Outcome, Session};
pub use editor::{Response, SlateEditor};
pub use error::LayoutError;
pub use history::UndoHistory;
pub use listeners::{
    live_kinds, ListenerCall, ListenerHost, ListenerKind, Listeners, NullHost, RecordingHost,
};
pub use placement::{
    generate_layout, generate_layout_for, ContainerExtent, Layout, Placement, Violation,
};
pub use ratio::AspectRatio;
pub use render::{
    center_in_cells, hit_test, render_frame, Frame, HandleBox, Hit, MediaPreview, PreviewRequest,
    RenderBox, View,
};
pub use store::{LayoutStore, MediaItem, MemoryStore, SaveRequest, StoreError};
pub use units::UnitConverter;
