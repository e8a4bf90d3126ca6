//! Modifier state and held-key tracking.

use crate::event::Key;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Modifier keys carried by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Alt key (Option on Mac).
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
    /// Meta key (Windows key, Cmd on Mac).
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Create custom modifiers.
    pub const fn new(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        Self {
            ctrl,
            alt,
            shift,
            meta,
        }
    }

    /// Check if any modifier is pressed.
    pub const fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift || self.meta
    }

    /// Ctrl or Meta, the platform "command" modifier.
    pub const fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Set of keys currently held down.
///
/// Hosts only deliver key-up to a focused window, so anything held while
/// focus leaves would stay pressed forever. Call [`PressedKeys::clear`] on
/// blur.
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    held: HashSet<Key>,
}

impl PressedKeys {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn press(&mut self, key: Key) {
        self.held.insert(key.normalized());
    }

    /// Record a key release. Releasing a key that was never pressed is a no-op.
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key.normalized());
    }

    /// Forget every held key.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Check whether a key is held.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key.normalized())
    }

    /// Control or Meta is held.
    pub fn command_held(&self) -> bool {
        self.is_pressed(Key::Control) || self.is_pressed(Key::Meta)
    }

    /// Command modifier plus the given character.
    pub fn chord(&self, c: char) -> bool {
        self.command_held() && self.is_pressed(Key::Char(c))
    }

    /// Snapshot of the modifier keys.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers::new(
            self.is_pressed(Key::Control),
            self.is_pressed(Key::Alt),
            self.is_pressed(Key::Shift),
            self.is_pressed(Key::Meta),
        )
    }

    /// Number of held keys.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// No keys held.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
