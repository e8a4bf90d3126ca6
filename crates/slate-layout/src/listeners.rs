//! Scoped ownership of host event listeners.
//!
//! The host (a browser window, a native event loop) decides how listeners are
//! installed. The editor only says which kinds it needs and when. Every
//! acquisition is tracked so that gesture end, leaving edit mode and teardown
//! release exactly what was attached, and dropping [`Listeners`] releases the
//! rest.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::debug;

/// Host-level event subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    Resize,
    KeyDown,
    KeyUp,
    Blur,
}

impl ListenerKind {
    /// Needed for the duration of a gesture.
    pub const POINTER: [Self; 2] = [Self::PointerMove, Self::PointerUp];
    /// Needed while in edit mode.
    pub const KEYBOARD: [Self; 3] = [Self::KeyDown, Self::KeyUp, Self::Blur];
}

/// Installs and removes host listeners.
pub trait ListenerHost {
    fn attach(&mut self, kind: ListenerKind);
    fn detach(&mut self, kind: ListenerKind);
}

/// Host that installs nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl ListenerHost for NullHost {
    fn attach(&mut self, _kind: ListenerKind) {}
    fn detach(&mut self, _kind: ListenerKind) {}
}

/// One attach or detach call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCall {
    Attach(ListenerKind),
    Detach(ListenerKind),
}

/// Host that logs every call into a shared log, which outlives the host.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<Vec<ListenerCall>>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle on the call log.
    pub fn log(&self) -> Rc<RefCell<Vec<ListenerCall>>> {
        Rc::clone(&self.log)
    }

    /// Kinds attached and not yet detached, according to the log.
    pub fn live(&self) -> HashSet<ListenerKind> {
        live_kinds(&self.log.borrow())
    }
}

/// Replay a call log into the set of kinds still attached.
pub fn live_kinds(log: &[ListenerCall]) -> HashSet<ListenerKind> {
    let mut live = HashSet::new();
    for call in log {
        match call {
            ListenerCall::Attach(kind) => {
                live.insert(*kind);
            }
            ListenerCall::Detach(kind) => {
                live.remove(kind);
            }
        }
    }
    live
}

impl ListenerHost for RecordingHost {
    fn attach(&mut self, kind: ListenerKind) {
        self.log.borrow_mut().push(ListenerCall::Attach(kind));
    }

    fn detach(&mut self, kind: ListenerKind) {
        self.log.borrow_mut().push(ListenerCall::Detach(kind));
    }
}

/// Owned host plus the set of kinds currently attached through it.
#[derive(Debug)]
pub struct Listeners<H: ListenerHost> {
    host: H,
    attached: HashSet<ListenerKind>,
}

impl<H: ListenerHost> Listeners<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            attached: HashSet::new(),
        }
    }

    /// Attach `kind` unless it already is.
    pub fn acquire(&mut self, kind: ListenerKind) {
        if self.attached.insert(kind) {
            debug!(?kind, "listener attached");
            self.host.attach(kind);
        }
    }

    /// Detach `kind` if attached; otherwise nothing happens.
    pub fn release(&mut self, kind: ListenerKind) {
        if self.attached.remove(&kind) {
            debug!(?kind, "listener detached");
            self.host.detach(kind);
        }
    }

    pub fn acquire_all(&mut self, kinds: &[ListenerKind]) {
        for &kind in kinds {
            self.acquire(kind);
        }
    }

    pub fn release_all(&mut self, kinds: &[ListenerKind]) {
        for &kind in kinds {
            self.release(kind);
        }
    }

    /// Detach everything still attached.
    pub fn release_everything(&mut self) {
        let kinds: Vec<ListenerKind> = self.attached.drain().collect();
        for kind in kinds {
            debug!(?kind, "listener detached");
            self.host.detach(kind);
        }
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached.contains(&kind)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ListenerHost> Drop for Listeners<H> {
    fn drop(&mut self) {
        self.release_everything();
    }
}
