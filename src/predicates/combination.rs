// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ChooseDigitsPredicate - enumerates digit multisets of one length.
//!
//! Runs for `length` rounds. Round `r` chooses the digit in position `r`,
//! starting from the digit chosen in position `r - 1`, so the sequence is
//! non-decreasing and every multiset is produced exactly once, in
//! lexicographic order. Round `length` succeeds with the sequence complete.
//!
//! # Choices
//!
//! With previous digit `s`, round `r` offers `10 - s` choices:
//! - Choice 0 → digit s
//! - Choice 1 → digit s+1
//! - ...
//! - Choice 9-s → digit 9
//!
//! # Subtree pruning
//!
//! A pruning instance abandons a prefix when no completion can be accepted.
//! With `k` positions left, prefix sum `p` and last digit `s`, every
//! completion sum lies in `[p + k*s^L, p + k*9^L]`:
//! - if `p + k*9^L < lower(L)` every completion is below the range
//! - if `p + k*s^L > ceiling(L)` every completion is above the range or has
//!   more than `L` digits
//!
//! The validator rejects all of those completions, so pruning never changes
//! which numbers are found.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::numeric::constants::MAX_DIGIT;
use crate::numeric::WideInteger;
use crate::state::statistics::Counters;

#[derive(Debug, Clone, Copy)]
pub struct ChooseDigitsPredicate {
    prune: bool,
}

impl ChooseDigitsPredicate {
    /// Enumerates every multiset.
    pub fn exhaustive() -> Self {
        Self { prune: false }
    }

    /// Skips prefixes whose completions all fall outside the bounds.
    pub fn pruned() -> Self {
        Self { prune: true }
    }

    fn start_digit<W: WideInteger>(ctx: &SearchContext<W>, round: usize) -> u8 {
        if round == 0 {
            0
        } else {
            ctx.digit(round - 1)
        }
    }

    /// True if no completion of the first `round` digits can be accepted.
    fn out_of_reach<W: WideInteger>(ctx: &SearchContext<W>, round: usize, start: u8) -> bool {
        let Some(remaining) = W::from_usize(ctx.length - round) else {
            return false;
        };
        let prefix = ctx.state.prefix_sums[round];
        let powers = ctx.powers();
        let bounds = ctx.bounds();

        let largest = prefix + remaining * powers[MAX_DIGIT as usize];
        let smallest = prefix + remaining * powers[start as usize];
        (ctx.length > 1 && largest < bounds.lower) || smallest > bounds.ceiling
    }
}

impl<W: WideInteger> Predicate<W> for ChooseDigitsPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<W>, round: usize) -> PredicateResult {
        if round == ctx.length {
            return PredicateResult::Success;
        }

        let start = Self::start_digit(ctx, round);
        if self.prune && Self::out_of_reach(ctx, round, start) {
            ctx.count(Counters::PrunedSubtrees);
            return PredicateResult::Failure;
        }

        PredicateResult::Choices((MAX_DIGIT - start) as usize + 1)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<W>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let digit = Self::start_digit(ctx, round) + choice as u8;

        // The engine only offers choices 0..=9-start.
        debug_assert!(
            digit <= MAX_DIGIT,
            "Invalid choice {} in round {} produces digit {}",
            choice,
            round,
            digit
        );

        ctx.set_digit(round, digit);
        let power = ctx.powers()[digit as usize];
        ctx.state.prefix_sums[round + 1] = ctx.state.prefix_sums[round] + power;

        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        if self.prune {
            "ChooseDigits(pruned)"
        } else {
            "ChooseDigits"
        }
    }
}
