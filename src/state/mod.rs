// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC state (mutable, owned by one length task).
//!
//! - the digits chosen so far, tracked on the trail
//! - running digit-power sums of each prefix
//! - the numbers accepted so far for this length
//! - statistics counters

pub mod multiset;
pub mod statistics;

pub use multiset::DigitMultiset;

use std::collections::HashSet;

use crate::numeric::constants::MAX_DIGITS;
use crate::numeric::WideInteger;

/// Mutable search state for one digit length.
#[derive(Debug)]
pub struct DynamicState<W: WideInteger> {
    /// Digit chosen for each position. Only the first `round` entries are
    /// meaningful while the enumeration is at `round`.
    pub digits: [u8; MAX_DIGITS],

    /// `prefix_sums[i]` is the digit-power sum of `digits[..i]`.
    ///
    /// Written positionally by the digit predicate, not trailed: an entry is
    /// always rewritten before it is read again.
    pub prefix_sums: [W; MAX_DIGITS + 1],

    /// Numbers accepted for this length (the length-local result set).
    pub found: HashSet<W>,
}

impl<W: WideInteger> DynamicState<W> {
    pub fn new() -> Self {
        Self {
            digits: [0; MAX_DIGITS],
            prefix_sums: [W::ZERO; MAX_DIGITS + 1],
            found: HashSet::new(),
        }
    }
}

impl<W: WideInteger> Default for DynamicState<W> {
    fn default() -> Self {
        Self::new()
    }
}
