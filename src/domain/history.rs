//! Bounded undo/redo over outline snapshots.

use std::collections::VecDeque;

use tracing::instrument;

use crate::domain::outline::Outline;

/// Two bounded stacks of snapshots. Structural edits record the pre-edit
/// snapshot; label edits never enter history. Oldest entries are evicted
/// first when a stack is at capacity.
#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<Outline>,
    future: VecDeque<Outline>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            past: VecDeque::with_capacity(capacity),
            future: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undoable edits currently retained.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Capture the pre-edit snapshot. A new edit invalidates any redo path.
    #[instrument(level = "debug", skip(self, before))]
    pub fn record(&mut self, before: Outline) {
        self.future.clear();
        if self.capacity == 0 {
            return;
        }
        if self.past.len() == self.capacity {
            self.past.pop_front();
        }
        self.past.push_back(before);
    }

    /// Step back: returns the snapshot to adopt, pushing `current` onto the
    /// redo stack. `None` when there is nothing to undo.
    #[instrument(level = "debug", skip(self, current))]
    pub fn undo(&mut self, current: Outline) -> Option<Outline> {
        let snapshot = self.past.pop_back()?;
        if self.future.len() == self.capacity {
            self.future.pop_front();
        }
        self.future.push_back(current);
        Some(snapshot)
    }

    /// Step forward again; symmetric to [`History::undo`].
    #[instrument(level = "debug", skip(self, current))]
    pub fn redo(&mut self, current: Outline) -> Option<Outline> {
        let snapshot = self.future.pop_back()?;
        if self.past.len() == self.capacity {
            self.past.pop_front();
        }
        self.past.push_back(current);
        Some(snapshot)
    }
}
