// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search results.

use crate::numeric::{WideInteger, Width};
use crate::state::statistics::Statistics;

use super::TaskState;

/// What one length task did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthReport {
    pub length: usize,
    pub state: TaskState,
    /// Narcissistic numbers with this many digits.
    pub found: usize,
    pub statistics: Statistics,
}

/// Sorted results of a generic search, before the width is erased.
#[derive(Debug, Clone)]
pub struct SearchOutcome<W: WideInteger> {
    /// Ascending, no duplicates.
    pub numbers: Vec<W>,
    /// One entry per length, ascending by length.
    pub lengths: Vec<LengthReport>,
}

impl<W: WideInteger> SearchOutcome<W> {
    /// Statistics summed over every length.
    pub fn statistics(&self) -> Statistics {
        let mut total = Statistics::new();
        for report in &self.lengths {
            total += &report.statistics;
        }
        total
    }
}

/// Search results in the width they were computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numbers {
    Narrow(Vec<u64>),
    Wide(Vec<u128>),
}

impl Numbers {
    pub fn len(&self) -> usize {
        match self {
            Numbers::Narrow(numbers) => numbers.len(),
            Numbers::Wide(numbers) => numbers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Canonical decimal strings, ascending.
    pub fn to_decimal_strings(&self) -> Vec<String> {
        match self {
            Numbers::Narrow(numbers) => numbers.iter().map(|n| n.to_decimal_string()).collect(),
            Numbers::Wide(numbers) => numbers.iter().map(|n| n.to_decimal_string()).collect(),
        }
    }

    /// Widen to 128 bits, for comparing searches run at different widths.
    pub fn to_u128_vec(&self) -> Vec<u128> {
        match self {
            Numbers::Narrow(numbers) => numbers.iter().map(|&n| u128::from(n)).collect(),
            Numbers::Wide(numbers) => numbers.clone(),
        }
    }
}

/// Everything a finished search reports.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Width the search actually ran with (never `Auto`).
    pub width: Width,
    pub numbers: Numbers,
    pub lengths: Vec<LengthReport>,
    pub statistics: Statistics,
}

impl SearchReport {
    pub(crate) fn narrow(outcome: SearchOutcome<u64>) -> Self {
        let statistics = outcome.statistics();
        Self {
            width: Width::U64,
            numbers: Numbers::Narrow(outcome.numbers),
            lengths: outcome.lengths,
            statistics,
        }
    }

    pub(crate) fn wide(outcome: SearchOutcome<u128>) -> Self {
        let statistics = outcome.statistics();
        Self {
            width: Width::U128,
            numbers: Numbers::Wide(outcome.numbers),
            lengths: outcome.lengths,
            statistics,
        }
    }
}
