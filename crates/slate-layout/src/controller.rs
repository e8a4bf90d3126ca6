//! Drag and resize state machine.
//!
//! The controller owns the live [`Layout`], the undo history and the z-order
//! pool. A gesture runs from a pointer press to its release:
//!
//! - `Idle → Dragging` / `Idle → Resizing` on press: the current layout is
//!   pushed to history, the item is raised to the top of the stack, and the
//!   raised layout is frozen as the gesture's origin.
//! - Every move recomputes the candidate from the frozen origin and the total
//!   pointer delta, so snapping never compounds. A candidate that breaks a
//!   placement bound is dropped and the last accepted layout stays.
//! - Release returns to `Idle` and grows the container extent if the item now
//!   reaches below it.
//!
//! Only one gesture runs at a time; presses during a gesture are ignored.

use crate::config::LayoutConfig;
use crate::history::UndoHistory;
use crate::placement::{ContainerExtent, Layout, Placement, Violation};
use crate::ratio::AspectRatio;
use crate::units::UnitConverter;
use serde::{Deserialize, Serialize};
use slate_core::{Modifiers, Point, Rect};
use tracing::{debug, trace};

/// Resize handle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    /// Top-left
    Nw,
    /// Top-right
    Ne,
    /// Bottom-left
    Sw,
    /// Bottom-right
    Se,
}

impl Corner {
    /// All corners, in hit-test order.
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// The point of `rect` this corner sits on.
    pub fn point(self, rect: &Rect) -> Point {
        match self {
            Self::Nw => rect.top_left(),
            Self::Ne => rect.top_right(),
            Self::Sw => rect.bottom_left(),
            Self::Se => rect.bottom_right(),
        }
    }

    /// Width and height move in opposite directions for a given pointer
    /// direction on these corners.
    const fn is_diagonal_flip(self) -> bool {
        matches!(self, Self::Sw | Self::Ne)
    }
}

/// Ephemeral state of one gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    index: usize,
    pointer: Point,
    origin: Layout,
    ratio: Option<AspectRatio>,
}

impl Session {
    /// Item being manipulated.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pointer position at press.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Layout frozen at press, after the z bump.
    pub fn origin(&self) -> &Layout {
        &self.origin
    }

    /// Locked aspect ratio, if ratio lock has engaged.
    pub fn ratio(&self) -> Option<AspectRatio> {
        self.ratio
    }

    fn origin_placement(&self) -> Placement {
        self.origin[self.index]
    }
}

/// Controller state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(Session),
    Resizing { session: Session, corner: Corner },
}

impl GestureState {
    /// Active session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) | Self::Resizing { session, .. } => Some(session),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What a controller call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing happened: no gesture, a gesture already running, or a bad index.
    Ignored,
    /// A gesture began.
    Started,
    /// The layout changed.
    Moved,
    /// The candidate broke a bound and was dropped.
    Rejected(Violation),
    /// The gesture finished. `grew` reports a container extent change.
    Ended { grew: bool },
}

impl Outcome {
    /// Whether the view needs repainting.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Started | Self::Moved | Self::Ended { .. })
    }
}

/// Owner of the live layout during an editing session.
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: LayoutConfig,
    layout: Layout,
    history: UndoHistory,
    z_index_max: u32,
    extent: ContainerExtent,
    state: GestureState,
}

impl InteractionController {
    /// Start idle with the given layout.
    ///
    /// The z pool starts above both the item count and every stacking order
    /// already in the layout, so a raised item always lands on top.
    pub fn new(layout: Layout, config: LayoutConfig) -> Self {
        let z_index_max = seed_z(&layout);
        let extent = ContainerExtent::fit(&layout);
        Self {
            config,
            layout,
            history: config
                .undo_depth
                .map_or_else(UndoHistory::new, UndoHistory::with_max_depth),
            z_index_max,
            extent,
            state: GestureState::Idle,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn extent(&self) -> ContainerExtent {
        self.extent
    }

    /// Next stacking order to hand out.
    pub fn z_index_max(&self) -> u32 {
        self.z_index_max
    }

    /// Index of the item under manipulation.
    pub fn active_index(&self) -> Option<usize> {
        self.state.session().map(Session::index)
    }

    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Press on an item's body.
    pub fn begin_drag(&mut self, index: usize, pointer: Point) -> Outcome {
        let Some(session) = self.begin(index, pointer) else {
            return Outcome::Ignored;
        };
        debug!(index, "drag started");
        self.state = GestureState::Dragging(session);
        Outcome::Started
    }

    /// Press on a resize handle. Shift locks the current aspect ratio.
    pub fn begin_resize(
        &mut self,
        index: usize,
        corner: Corner,
        pointer: Point,
        modifiers: Modifiers,
    ) -> Outcome {
        let Some(mut session) = self.begin(index, pointer) else {
            return Outcome::Ignored;
        };
        if modifiers.shift {
            let origin = session.origin_placement();
            session.ratio = Some(AspectRatio::of(origin.w, origin.h));
        }
        debug!(index, ?corner, ratio = ?session.ratio, "resize started");
        self.state = GestureState::Resizing { session, corner };
        Outcome::Started
    }

    /// Shared press side effects: history push, z bump, origin snapshot.
    fn begin(&mut self, index: usize, pointer: Point) -> Option<Session> {
        if self.is_active() {
            trace!(index, "press ignored, gesture already active");
            return None;
        }
        let mut raised = *self.layout.get(index)?;
        let before = std::mem::take(&mut self.layout);
        // The pool is spent: renumber compactly, keeping paint order
        let restacked = (self.z_index_max == u32::MAX).then(|| before.restacked());
        if let Some(restacked) = &restacked {
            self.z_index_max = seed_z(restacked);
            debug!(z_index_max = self.z_index_max, "stacking order renumbered");
        }
        raised.z = self.z_index_max;
        self.z_index_max = self.z_index_max.saturating_add(1);

        self.layout = restacked
            .as_ref()
            .unwrap_or(&before)
            .with_placement(index, raised);
        self.history.push(before);

        Some(Session {
            index,
            pointer,
            origin: self.layout.clone(),
            ratio: None,
        })
    }

    /// Advance the active gesture to a new pointer position.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        modifiers: Modifiers,
        units: &UnitConverter,
    ) -> Outcome {
        let config = self.config;
        let (session, candidate) = match &mut self.state {
            GestureState::Idle => return Outcome::Ignored,
            GestureState::Dragging(session) => {
                let delta = pointer - session.pointer;
                let candidate =
                    drag_candidate(session.origin_placement(), delta, modifiers, units, &config);
                (&*session, candidate.check_position(&config).map(|()| candidate))
            }
            GestureState::Resizing { session, corner } => {
                let delta = pointer - session.pointer;
                let ratio = if modifiers.shift {
                    let origin = session.origin_placement();
                    Some(
                        *session
                            .ratio
                            .get_or_insert_with(|| AspectRatio::of(origin.w, origin.h)),
                    )
                } else {
                    None
                };
                let candidate = resize_candidate(
                    session.origin_placement(),
                    *corner,
                    delta,
                    ratio,
                    units,
                    &config,
                );
                (&*session, candidate.check(&config).map(|()| candidate))
            }
        };

        match candidate {
            Ok(placement) => {
                if self.layout.get(session.index) == Some(&placement) {
                    return Outcome::Ignored;
                }
                self.layout = session.origin.with_placement(session.index, placement);
                Outcome::Moved
            }
            Err(violation) => {
                trace!(index = session.index, %violation, "frame rejected");
                Outcome::Rejected(violation)
            }
        }
    }

    /// Release the pointer, ending any gesture.
    pub fn pointer_up(&mut self) -> Outcome {
        let state = std::mem::take(&mut self.state);
        let Some(session) = state.session() else {
            return Outcome::Ignored;
        };
        let grew = self
            .layout
            .get(session.index)
            .is_some_and(|p| self.extent.grow_to(p.bottom()));
        debug!(index = session.index, grew, "gesture ended");
        Outcome::Ended { grew }
    }

    /// Restore the layout from before the most recent gesture.
    ///
    /// No-op on an empty history and while a gesture is running. The container
    /// extent is left alone.
    pub fn undo(&mut self) -> bool {
        if self.is_active() {
            trace!("undo ignored during gesture");
            return false;
        }
        match self.history.pop() {
            Some(previous) => {
                debug!(remaining = self.history.len(), "undo");
                self.layout = previous;
                true
            }
            None => false,
        }
    }

    /// Replace the layout wholesale: drops history, refits the extent and
    /// reseeds the z pool.
    pub fn reset(&mut self, layout: Layout) {
        self.state = GestureState::Idle;
        self.history.clear();
        self.z_index_max = seed_z(&layout);
        self.extent = ContainerExtent::fit(&layout);
        self.layout = layout;
    }
}

fn seed_z(layout: &Layout) -> u32 {
    let count = layout.len() as u32;
    layout
        .max_z()
        .map_or(count, |z| count.max(z.saturating_add(1)))
}

/// New position for a drag. Shift pins the axis with the smaller raw delta.
fn drag_candidate(
    origin: Placement,
    delta: Point,
    modifiers: Modifiers,
    units: &UnitConverter,
    config: &LayoutConfig,
) -> Placement {
    let dx = units.snap_delta(delta.x, config.step);
    let dy = units.snap_delta(delta.y, config.step);
    let (dx, dy) = if modifiers.shift {
        if delta.y.abs() > delta.x.abs() {
            (0.0, dy)
        } else {
            (dx, 0.0)
        }
    } else {
        (dx, dy)
    };
    Placement {
        x: origin.x + dx,
        y: origin.y + dy,
        ..origin
    }
}

/// New rectangle for a resize from `corner`; the opposite corner stays put.
fn resize_candidate(
    origin: Placement,
    corner: Corner,
    delta: Point,
    ratio: Option<AspectRatio>,
    units: &UnitConverter,
    config: &LayoutConfig,
) -> Placement {
    let (dx, dy) = match ratio {
        Some(ratio) => {
            let dx = units.snap_delta(delta.x, config.step * ratio.width as f32);
            let dy = ratio.height_for(dx);
            (dx, if corner.is_diagonal_flip() { -dy } else { dy })
        }
        None => (
            units.snap_delta(delta.x, config.step),
            units.snap_delta(delta.y, config.step),
        ),
    };
    let mut p = origin;
    match corner {
        Corner::Se => {
            p.w += dx;
            p.h += dy;
        }
        Corner::Sw => {
            p.w -= dx;
            p.h += dy;
            p.x += dx;
        }
        Corner::Ne => {
            p.w += dx;
            p.h -= dy;
            p.y += dy;
        }
        Corner::Nw => {
            p.w -= dx;
            p.h -= dy;
            p.x += dx;
            p.y += dy;
        }
    }
    p
}
