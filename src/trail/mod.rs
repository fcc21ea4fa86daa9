// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking.
//!
//! The trail records every change to the digit slots of the search state so
//! that backtracking restores the previous state in time proportional to the
//! number of changes undone.
//!
//! Entries are indexed by slot rather than by pointer: the state they restore
//! is owned by the same [`SearchContext`](crate::context::SearchContext), which
//! performs the restoration through [`Trail::rewind_to`].

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEntry {
    /// Digit slot that was changed.
    pub slot: usize,
    /// The value before the change.
    pub old_value: u8,
}

/// The trail system for backtracking.
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
    /// Stack of checkpoint indices for nested backtracking
    checkpoints: Vec<usize>,
}

impl Trail {
    /// Maximum trail size.
    ///
    /// Live entries never exceed the digit length of the search, so reaching
    /// this means a predicate is recording without the engine rewinding.
    const MAX_SIZE: usize = 16384;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(64),
            checkpoints: Vec::with_capacity(64),
        }
    }

    /// Record a checkpoint for later backtracking.
    ///
    /// Returns the checkpoint index.
    pub fn checkpoint(&mut self) -> usize {
        let checkpoint = self.entries.len();
        self.checkpoints.push(checkpoint);
        checkpoint
    }

    /// Rewind the trail to the most recent checkpoint.
    ///
    /// Returns true if there was a checkpoint to rewind to, false otherwise.
    pub fn rewind(&mut self, restore: impl FnMut(TrailEntry)) -> bool {
        match self.checkpoints.pop() {
            Some(checkpoint) => {
                self.rewind_to(checkpoint, restore);
                true
            }
            None => false,
        }
    }

    /// Undo entries back to `checkpoint`, newest first.
    ///
    /// `restore` is called once per undone entry. Checkpoints above the new
    /// length are discarded.
    pub fn rewind_to(&mut self, checkpoint: usize, mut restore: impl FnMut(TrailEntry)) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                restore(entry);
            }
        }
        while self.checkpoints.last().is_some_and(|&c| c > checkpoint) {
            self.checkpoints.pop();
        }
    }

    /// Record a state change in the trail.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub(crate) fn record_change(&mut self, slot: usize, old_value: u8) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }

        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of active checkpoints.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.checkpoint_depth(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_checkpoint_and_rewind() {
        let mut trail = Trail::new();
        let mut slots = [0u8; 4];

        trail.record_change(0, 10);
        trail.record_change(1, 20);
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 2);

        trail.record_change(2, 30);
        trail.record_change(3, 40);
        assert_eq!(trail.len(), 4);

        assert!(trail.rewind(|entry| slots[entry.slot] = entry.old_value));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.checkpoint_depth(), 0);
        assert_eq!(slots, [0, 0, 30, 40]);
    }

    #[test]
    fn test_rewind_restores_newest_first() {
        let mut trail = Trail::new();
        let mut slot = 9u8;

        // The same slot changed twice: the oldest value must win.
        trail.record_change(0, 1);
        trail.record_change(0, 2);
        trail.rewind_to(0, |entry| slot = entry.old_value);
        assert_eq!(slot, 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();

        trail.record_change(0, 10);
        let _cp1 = trail.checkpoint();
        trail.record_change(1, 20);
        let _cp2 = trail.checkpoint();
        trail.record_change(2, 30);
        assert_eq!(trail.checkpoint_depth(), 2);

        assert!(trail.rewind(|_| {}));
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.checkpoint_depth(), 1);

        assert!(trail.rewind(|_| {}));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.checkpoint_depth(), 0);
    }

    #[test]
    fn test_rewind_to_discards_newer_checkpoints() {
        let mut trail = Trail::new();
        trail.record_change(0, 1);
        trail.checkpoint();
        trail.record_change(1, 2);
        trail.checkpoint();
        trail.rewind_to(0, |_| {});
        assert_eq!(trail.checkpoint_depth(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rewind_empty() {
        let mut trail = Trail::new();
        assert!(!trail.rewind(|_| {}));
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();
        for i in 0..Trail::MAX_SIZE + 1 {
            trail.record_change(i, 0);
        }
    }
}
