//! The moodboard editor: one board, one local editing session.
//!
//! [`SlateEditor`] takes host events, routes them to the interaction
//! controller, and keeps listener subscriptions, hover, pressed keys and the
//! unit in step. Hosts feed it [`Event`]s and repaint from [`SlateEditor::frame`]
//! whenever a call returns [`Response::Redraw`].

use crate::config::LayoutConfig;
use crate::controller::{InteractionController, Outcome};
use crate::error::LayoutError;
use crate::listeners::{ListenerHost, ListenerKind, Listeners};
use crate::placement::{generate_layout, Layout};
use crate::render::{hit_test, render_frame, Frame, Hit, MediaPreview, PreviewRequest, View};
use crate::store::{LayoutStore, MediaItem, SaveRequest};
use crate::units::UnitConverter;
use slate_core::{Event, Key, Modifiers, Point, PressedKeys};
use tracing::debug;

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed.
    Ignored,
    /// Repaint from [`SlateEditor::frame`].
    Redraw,
    /// The user asked to save; call [`SlateEditor::save`].
    SaveRequested,
}

impl From<Outcome> for Response {
    fn from(outcome: Outcome) -> Self {
        if outcome.needs_redraw() {
            Self::Redraw
        } else {
            Self::Ignored
        }
    }
}

/// Free-form layout editor for one board.
pub struct SlateEditor<H: ListenerHost> {
    config: LayoutConfig,
    items: Vec<MediaItem>,
    units: UnitConverter,
    controller: InteractionController,
    editing: bool,
    hover: Option<usize>,
    keys: PressedKeys,
    dirty: bool,
    listeners: Listeners<H>,
}

impl<H: ListenerHost> SlateEditor<H> {
    /// Mount an editor over `items`.
    ///
    /// An injected `layout` must hold exactly one valid placement per item.
    /// Without one, the items are grid-packed.
    pub fn new(
        items: Vec<MediaItem>,
        layout: Option<Layout>,
        config: LayoutConfig,
        host: H,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        let layout = prepare_layout(items.len(), layout, &config)?;
        let mut listeners = Listeners::new(host);
        listeners.acquire(ListenerKind::Resize);
        debug!(items = items.len(), "editor mounted");
        Ok(Self {
            units: UnitConverter::new(&config),
            controller: InteractionController::new(layout, config),
            config,
            items,
            editing: false,
            hover: None,
            keys: PressedKeys::new(),
            dirty: false,
            listeners,
        })
    }

    pub fn layout(&self) -> &Layout {
        self.controller.layout()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Pixels per logical unit.
    pub fn unit(&self) -> f32 {
        self.units.unit()
    }

    /// Container height in pixels.
    pub fn container_height(&self) -> f32 {
        self.controller.extent().pixels(self.units.unit())
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    pub fn pressed_keys(&self) -> &PressedKeys {
        &self.keys
    }

    /// Layout changed since mount or the last successful save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    pub fn listeners(&self) -> &Listeners<H> {
        &self.listeners
    }

    /// Enter or leave edit mode. Leaving ends any gesture as a release would.
    pub fn set_editing(&mut self, editing: bool) {
        if editing == self.editing {
            return;
        }
        self.editing = editing;
        if editing {
            self.listeners.acquire_all(&ListenerKind::KEYBOARD);
        } else {
            self.listeners.release_all(&ListenerKind::KEYBOARD);
            self.keys.clear();
            self.end_gesture();
            self.hover = None;
        }
        debug!(editing, "edit mode changed");
    }

    /// Dispatch one host event.
    pub fn handle_event(&mut self, event: &Event) -> Response {
        match event {
            Event::Resize { width } => self.resize(*width),
            Event::PointerDown {
                position,
                modifiers,
            } => self.pointer_down(*position, *modifiers),
            Event::PointerMove {
                position,
                modifiers,
            } => self.pointer_move(*position, *modifiers),
            Event::PointerUp { .. } => self.end_gesture(),
            Event::PointerLeave => self.set_hover(None),
            Event::KeyDown { key } => self.key_down(*key),
            Event::KeyUp { key } => {
                self.keys.release(*key);
                Response::Ignored
            }
            Event::Blur => {
                self.keys.clear();
                self.end_gesture()
            }
        }
    }

    fn resize(&mut self, width: f32) -> Response {
        let before = self.units.unit();
        if self.units.measure(width) && self.units.unit() != before {
            Response::Redraw
        } else {
            Response::Ignored
        }
    }

    fn pointer_down(&mut self, position: Point, modifiers: Modifiers) -> Response {
        if !self.editing || self.controller.is_active() {
            return Response::Ignored;
        }
        let outcome = match hit_test(&self.frame(), position) {
            Some(Hit::Handle(index, corner)) => {
                self.controller
                    .begin_resize(index, corner, position, modifiers)
            }
            Some(Hit::Body(index)) => self.controller.begin_drag(index, position),
            None => Outcome::Ignored,
        };
        if outcome == Outcome::Started {
            self.listeners.acquire_all(&ListenerKind::POINTER);
            self.dirty = true;
        }
        outcome.into()
    }

    fn pointer_move(&mut self, position: Point, modifiers: Modifiers) -> Response {
        if self.controller.is_active() {
            let outcome = self.controller.pointer_move(position, modifiers, &self.units);
            if outcome == Outcome::Moved {
                self.dirty = true;
            }
            return outcome.into();
        }
        let hover = hit_test(&self.frame(), position).map(|hit| hit.index());
        self.set_hover(hover)
    }

    fn set_hover(&mut self, hover: Option<usize>) -> Response {
        if self.hover == hover {
            Response::Ignored
        } else {
            self.hover = hover;
            Response::Redraw
        }
    }

    fn end_gesture(&mut self) -> Response {
        let outcome = self.controller.pointer_up();
        self.listeners.release_all(&ListenerKind::POINTER);
        outcome.into()
    }

    fn key_down(&mut self, key: Key) -> Response {
        if !self.editing {
            return Response::Ignored;
        }
        self.keys.press(key);
        if self.keys.chord('z') {
            if self.undo() {
                Response::Redraw
            } else {
                Response::Ignored
            }
        } else if self.keys.chord('s') {
            Response::SaveRequested
        } else {
            Response::Ignored
        }
    }

    /// Step back one gesture. Returns false when there is nothing to undo or
    /// a gesture is running.
    pub fn undo(&mut self) -> bool {
        let undone = self.controller.undo();
        if undone {
            self.dirty = true;
        }
        undone
    }

    /// Replace the layout wholesale. This is the only place the container
    /// may shrink. An injected layout counts as saved; a regenerated one does
    /// not.
    pub fn reset_layout(&mut self, layout: Option<Layout>) -> Result<(), LayoutError> {
        let injected = layout.is_some();
        let layout = prepare_layout(self.items.len(), layout, &self.config)?;
        self.end_gesture();
        self.controller.reset(layout);
        self.hover = None;
        self.dirty = !injected;
        debug!(injected, "layout reset");
        Ok(())
    }

    /// Swap the item list. Placements are matched to items by index, so the
    /// layout is regenerated rather than reused.
    pub fn set_items(&mut self, items: Vec<MediaItem>) {
        self.end_gesture();
        self.controller
            .reset(generate_layout(items.len(), &self.config));
        self.items = items;
        self.hover = None;
        self.dirty = true;
    }

    /// Current frame for painting.
    pub fn frame(&self) -> Frame {
        render_frame(
            self.controller.layout(),
            self.units.unit(),
            self.controller.extent(),
            View {
                editing: self.editing,
                hover: self.hover,
                active: self.controller.active_index(),
            },
            &self.config,
        )
    }

    /// Render every item's preview, in paint order.
    pub fn previews<R: MediaPreview>(&self, renderer: &R) -> Vec<(usize, R::Output)> {
        self.frame()
            .boxes
            .iter()
            .filter_map(|b| {
                let item = self.items.get(b.index)?;
                let request = PreviewRequest::new(item, b.rect.size(), &self.config);
                Some((b.index, renderer.render(&request)))
            })
            .collect()
    }

    /// Hand the current layout and items to the store.
    pub fn save<S: LayoutStore>(&mut self, store: &mut S) -> Result<(), LayoutError> {
        let request = SaveRequest {
            layout: self.controller.layout().clone(),
            items: self.items.clone(),
        };
        store.save(&request)?;
        self.dirty = false;
        debug!(placements = request.layout.len(), "layout saved");
        Ok(())
    }
}

fn prepare_layout(
    items: usize,
    layout: Option<Layout>,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    match layout {
        Some(layout) => {
            if layout.len() != items {
                return Err(LayoutError::LengthMismatch {
                    items,
                    placements: layout.len(),
                });
            }
            layout.validate(config)?;
            Ok(layout)
        }
        None => Ok(generate_layout(items, config)),
    }
}
