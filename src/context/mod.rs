// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - Tier 1 (MEMO): the power and bounds tables, shared read-only across tasks
//! - Tier 2 (DYNAMIC): the digit choices, trail, local results and statistics
//!   of a single digit length
//!
//! One context exists per length task, so tasks never share mutable state.

use std::sync::Arc;

use crate::memo::{Bounds, MemoizedData};
use crate::numeric::constants::{MAX_DIGITS, NDIGITS};
use crate::numeric::WideInteger;
use crate::state::statistics::{Counters, Statistics};
use crate::state::DynamicState;
use crate::trail::Trail;

/// Search context for one digit length.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: Arc<MemoizedData>,   // Tier 1: Immutable, shared
///     length: usize,             // Digit length searched by this context
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Tier 2: Mutable, owned
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext<W: WideInteger> {
    /// Immutable precomputed data (Tier 1)
    pub memo: Arc<MemoizedData<W>>,
    /// Number of digits in every combination of this search.
    pub length: usize,
    /// Trail for backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState<W>,
    pub statistics: Statistics,
}

impl<W: WideInteger> SearchContext<W> {
    /// Create a context searching combinations of `length` digits.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero or beyond the tables in `memo`.
    pub fn new(memo: Arc<MemoizedData<W>>, length: usize) -> Self {
        assert!(
            length >= 1 && length <= memo.max_len && length <= MAX_DIGITS,
            "Digit length {} outside tables for 1..={}",
            length,
            memo.max_len
        );
        Self {
            memo,
            length,
            trail: Trail::new(),
            state: DynamicState::new(),
            statistics: Statistics::new(),
        }
    }

    // Safe trail wrapper methods

    /// Set the digit at `slot` with trail recording.
    ///
    /// # Panics
    ///
    /// Panics if slot >= length.
    pub fn set_digit(&mut self, slot: usize, digit: u8) {
        assert!(slot < self.length, "Digit slot out of bounds: {}", slot);
        self.trail.record_change(slot, self.state.digits[slot]);
        self.state.digits[slot] = digit;
    }

    /// Get a single chosen digit.
    pub fn digit(&self, slot: usize) -> u8 {
        self.state.digits[slot]
    }

    /// The full digit sequence of length `length`.
    ///
    /// Meaningful once every slot has been chosen.
    pub fn chosen_digits(&self) -> &[u8] {
        &self.state.digits[..self.length]
    }

    /// Rewind the trail to `checkpoint`, restoring every digit changed since.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let digits = &mut self.state.digits;
        self.trail
            .rewind_to(checkpoint, |entry| digits[entry.slot] = entry.old_value);
    }

    /// Digit powers for this context's length, indexed by digit.
    #[inline]
    pub fn powers(&self) -> &[W; NDIGITS] {
        self.memo.powers.row(self.length)
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds<W> {
        self.memo.bounds.get(self.length)
    }

    pub(crate) fn count(&mut self, counter: Counters) {
        self.statistics.increment_counter(counter);
    }
}
