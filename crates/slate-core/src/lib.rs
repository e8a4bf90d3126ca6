//! Core types for the Slate layout editor.
//!
//! This crate provides the foundational types shared by the editor crates:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Input events: [`Event`], [`Key`]
//! - Modifier and held-key state: [`Modifiers`], [`PressedKeys`]

mod event;
mod geometry;
mod keys;

pub use event::{Event, Key};
pub use geometry::{Point, Rect, Size};
pub use keys::{Modifiers, PressedKeys};
