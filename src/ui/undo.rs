//! Snapshot-based undo for reversing mutating clicks.
//!
//! Undo is implemented as a stack of full deep copies of the sketch state,
//! captured immediately before each mutation. Popping the stack restores
//! the previous graph and position mapping wholesale. There is no redo.

use crate::types::{PositionMap, SketchGraph};
use serde::{Deserialize, Serialize};

/// An independent deep copy of the sketch state at one point in time.
///
/// The editing mode and any pending connection endpoint are deliberately
/// not part of a snapshot; undo never touches them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// The graph as it was before the mutation
    pub graph: SketchGraph,
    /// The position mapping as it was before the mutation
    pub positions: PositionMap,
}

/// Manages the undo history for the application.
///
/// The stack is unbounded: snapshots accumulate for the lifetime of the
/// session and are only consumed by undo.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UndoHistory {
    /// Stack of snapshots that can be restored, newest last
    #[serde(skip)]
    snapshots: Vec<Snapshot>,
}

impl UndoHistory {
    /// Creates a new empty undo history.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Pushes a snapshot of the current state onto the stack.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Returns true if there is at least one snapshot to restore.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Returns the number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if the history holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Pops the most recent snapshot from the stack.
    ///
    /// # Returns
    ///
    /// The snapshot to restore, or None if the stack is empty
    pub fn pop_snapshot(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// Clears all undo history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
