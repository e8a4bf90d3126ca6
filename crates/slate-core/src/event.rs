//! Input events delivered to the layout editor by its host.
//!
//! Pointer positions are relative to the top-left of the layout container,
//! in pixels. Only differences between positions matter during a gesture, but
//! hit testing needs the container-relative origin.

use crate::geometry::Point;
use crate::keys::Modifiers;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Primary pointer pressed
    PointerDown {
        /// Position of the press
        position: Point,
        /// Modifier keys held at the time
        modifiers: Modifiers,
    },
    /// Pointer moved
    PointerMove {
        /// New position
        position: Point,
        /// Modifier keys held at the time
        modifiers: Modifiers,
    },
    /// Primary pointer released
    PointerUp {
        /// Position of release
        position: Point,
    },
    /// Pointer left the container
    PointerLeave,
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Window lost focus
    Blur,
    /// Container was laid out again
    Resize {
        /// Measured container width in pixels
        width: f32,
    },
}

impl Event {
    /// Pointer down without modifiers.
    #[must_use]
    pub const fn pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown {
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Pointer move without modifiers.
    #[must_use]
    pub const fn pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove {
            position: Point::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    /// Pointer move with shift held.
    #[must_use]
    pub const fn shift_move(x: f32, y: f32) -> Self {
        Self::PointerMove {
            position: Point::new(x, y),
            modifiers: Modifiers::SHIFT,
        }
    }

    /// Pointer up.
    #[must_use]
    pub const fn pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp {
            position: Point::new(x, y),
        }
    }

    /// Whether this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerMove { .. }
                | Self::PointerUp { .. }
                | Self::PointerLeave
        )
    }
}

/// Keyboard key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Shift (either side)
    Shift,
    /// Control (either side)
    Control,
    /// Alt/Option (either side)
    Alt,
    /// Meta: Command on macOS, Windows key elsewhere
    Meta,
    /// Escape key
    Escape,
    /// Enter/Return key
    Enter,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Tab key
    Tab,
    /// Printable character
    Char(char),
}

impl Key {
    /// Check if this is a modifier key.
    #[must_use]
    pub const fn is_modifier(&self) -> bool {
        matches!(self, Self::Shift | Self::Control | Self::Alt | Self::Meta)
    }

    /// Lowercase printable characters so a shifted press and its release
    /// refer to the same key.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }
}
