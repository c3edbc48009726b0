//! Undo/redo history of buffer snapshots.
//!
//! History is linear: every commit throws the redo stack away. The undo stack
//! is bounded and evicts its oldest entry on overflow; the redo stack is not
//! bounded.

use crate::draw::Snapshot;
use log::debug;
use std::collections::VecDeque;

/// Default number of undo entries kept.
pub const DEFAULT_MAX_UNDO: usize = 50;

/// Bounded undo and unbounded redo stacks of snapshots.
#[derive(Debug, Clone)]
pub struct History {
    /// Oldest at the front, newest at the back
    undo_stack: VecDeque<Snapshot>,
    /// Newest at the back
    redo_stack: Vec<Snapshot>,
    max_undo: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO)
    }
}

impl History {
    /// Creates an empty history keeping at most `max_undo` commits (at least one).
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_undo: max_undo.max(1),
        }
    }

    /// Records a committing action.
    ///
    /// Pushes `snapshot`, evicts the oldest entry if the bound is exceeded,
    /// and clears the redo stack.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.pop_front();
            debug!("Undo history full; evicted oldest snapshot");
        }
        self.redo_stack.clear();
    }

    /// Steps back one entry.
    ///
    /// `current` is the live buffer's snapshot; it goes onto the redo stack.
    /// Returns the snapshot to restore, or `None` (and records nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Steps forward one entry.
    ///
    /// `current` goes onto the undo stack without bound enforcement; the redo
    /// stack is left as is apart from the popped entry.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_undo(&self) -> usize {
        self.max_undo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(tag: u8) -> Snapshot {
        Snapshot::from_png(vec![tag])
    }

    #[test]
    fn commit_bound_evicts_oldest_first() {
        let mut history = History::default();
        for i in 0..60u8 {
            history.commit(snap(i));
            assert!(history.undo_len() <= DEFAULT_MAX_UNDO);
        }
        assert_eq!(history.undo_len(), 50);

        // Newest comes back first; the first ten commits are gone.
        let mut restored = Vec::new();
        while let Some(s) = history.undo(snap(255)) {
            restored.push(s.as_bytes()[0]);
        }
        assert_eq!(restored.first(), Some(&59));
        assert_eq!(restored.last(), Some(&10));
    }

    #[test]
    fn commit_clears_redo() {
        let mut history = History::default();
        history.commit(snap(1));
        history.commit(snap(2));
        history.undo(snap(3));
        history.undo(snap(4));
        assert_eq!(history.redo_len(), 2);

        history.commit(snap(5));
        assert_eq!(history.redo_len(), 0);
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut history = History::default();
        assert!(history.undo(snap(1)).is_none());
        assert!(history.redo(snap(1)).is_none());
        assert_eq!(history.undo_len(), 0);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn undo_then_redo_hands_back_current() {
        let mut history = History::default();
        history.commit(snap(1));

        let restored = history.undo(snap(9)).unwrap();
        assert_eq!(restored, snap(1));

        let back = history.redo(snap(1)).unwrap();
        assert_eq!(back, snap(9));
        assert_eq!(history.undo(snap(9)), Some(snap(1)));
    }

    #[test]
    fn undo_and_redo_move_entries_between_stacks() {
        let mut history = History::new(3);
        for i in 0..3 {
            history.commit(snap(i));
        }
        for i in 10..13 {
            assert!(history.undo(snap(i)).is_some());
        }
        assert_eq!((history.undo_len(), history.redo_len()), (0, 3));

        for i in 20..22 {
            assert!(history.redo(snap(i)).is_some());
        }
        assert_eq!((history.undo_len(), history.redo_len()), (2, 1));
        assert_eq!(history.undo(snap(30)), Some(snap(21)));
    }
}
