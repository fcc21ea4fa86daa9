// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the search
//! predicates. Each length task keeps its own; the coordinator adds them up.

use std::fmt;
use std::ops::AddAssign;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::predicates::validate::Verdict;

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Complete digit multisets handed to the validator.
    Combinations,
    /// Prefixes abandoned because no completion can land in bounds.
    PrunedSubtrees,
    AboveUpperBound,
    BelowLowerBound,
    DigitCountMismatch,
    DigitMismatch,
    Accepted,
}

impl Counters {
    /// The counter recording a validator verdict.
    pub fn for_verdict<W>(verdict: &Verdict<W>) -> Self {
        match verdict {
            Verdict::AboveUpperBound => Counters::AboveUpperBound,
            Verdict::BelowLowerBound => Counters::BelowLowerBound,
            Verdict::DigitCountMismatch => Counters::DigitCountMismatch,
            Verdict::DigitMismatch => Counters::DigitMismatch,
            Verdict::Accepted(_) => Counters::Accepted,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Candidates discarded by the range check alone.
    pub fn pruned_by_bounds(&self) -> u64 {
        self.get(Counters::AboveUpperBound) + self.get(Counters::BelowLowerBound)
    }
}

impl AddAssign<&Statistics> for Statistics {
    fn add_assign(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}
