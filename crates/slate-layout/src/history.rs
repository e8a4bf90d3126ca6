// Undo history - whole-layout snapshots
//
// Each gesture pushes the layout as it stood before the gesture touched it.
// Undo pops the latest one. There is no redo stack: a new gesture after an
// undo simply pushes on top, so the undone state is gone for good.

use crate::placement::Layout;

/// Stack of layout snapshots, most recent last.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: Vec<Layout>,
    /// Oldest snapshots are dropped beyond this depth. `None` keeps all.
    max_depth: Option<usize>,
}

impl UndoHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `max_depth` snapshots.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            max_depth: Some(max_depth),
        }
    }

    /// Record the layout as it stands before a gesture.
    pub fn push(&mut self, snapshot: Layout) {
        self.snapshots.push(snapshot);
        if let Some(max) = self.max_depth {
            if self.snapshots.len() > max {
                let excess = self.snapshots.len() - max;
                self.snapshots.drain(..excess);
                tracing::trace!(dropped = excess, "undo history trimmed");
            }
        }
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<Layout> {
        self.snapshots.pop()
    }

    /// Most recent snapshot without removing it.
    pub fn peek(&self) -> Option<&Layout> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
