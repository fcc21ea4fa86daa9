// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate validation.
//!
//! A complete digit multiset `comb` of length `L` yields the candidate
//! `Σ d^L`. The candidate is a narcissistic number exactly when its own digit
//! multiset is `comb`: then its digits raised to its digit count sum to
//! itself. Checks run cheapest first:
//!
//! 1. range: `lower(L) <= candidate <= upper(L)` (no decomposition needed)
//! 2. digit count of the candidate equals `L`
//! 3. sorted digits of the candidate equal `comb`

use log::trace;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::memo::{Bounds, MemoizedData};
use crate::numeric::WideInteger;
use crate::state::statistics::Counters;
use crate::state::DigitMultiset;

/// Outcome of validating one digit multiset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<W> {
    AboveUpperBound,
    BelowLowerBound,
    /// The candidate has a different number of digits than the multiset.
    DigitCountMismatch,
    /// Same digit count, different digits.
    DigitMismatch,
    /// The candidate is narcissistic.
    Accepted(W),
}

impl<W> Verdict<W> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Rejected by the range check, before any decomposition.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Verdict::AboveUpperBound | Verdict::BelowLowerBound)
    }
}

/// Validate a complete multiset against the tables.
///
/// # Panics
///
/// Panics if the multiset is empty or longer than the tables.
pub fn validate<W: WideInteger>(comb: &DigitMultiset, memo: &MemoizedData<W>) -> Verdict<W> {
    let length = comb.len();
    assert!(
        length >= 1 && length <= memo.max_len,
        "Multiset length {} outside tables for 1..={}",
        length,
        memo.max_len
    );
    let candidate = comb.power_sum(memo.powers.row(length));
    check_candidate(candidate, comb.as_slice(), memo.bounds.get(length))
}

/// Validate a digit-power sum already computed for the sorted digits `comb`.
pub fn check_candidate<W: WideInteger>(candidate: W, comb: &[u8], bounds: &Bounds<W>) -> Verdict<W> {
    if candidate > bounds.upper {
        return Verdict::AboveUpperBound;
    }
    if comb.len() > 1 && candidate < bounds.lower {
        return Verdict::BelowLowerBound;
    }
    match_digits(candidate, comb)
}

/// The exact check alone: does `candidate` have exactly the digits `comb`?
///
/// Skips the range check, which makes it the reference the range check must
/// agree with.
pub fn match_digits<W: WideInteger>(candidate: W, comb: &[u8]) -> Verdict<W> {
    let own = DigitMultiset::of_value(candidate);
    if own.len() != comb.len() {
        Verdict::DigitCountMismatch
    } else if own.as_slice() != comb {
        Verdict::DigitMismatch
    } else {
        Verdict::Accepted(candidate)
    }
}

/// Validates the combination chosen by the preceding
/// [`ChooseDigitsPredicate`](super::ChooseDigitsPredicate) and records accepted
/// numbers in the context's local result set.
///
/// Succeeds only for accepted numbers; the terminal fail then backtracks into
/// the next combination either way.
#[derive(Debug)]
pub struct ValidatePredicate;

impl<W: WideInteger> Predicate<W> for ValidatePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<W>, _round: usize) -> PredicateResult {
        ctx.count(Counters::Combinations);

        let candidate = ctx.state.prefix_sums[ctx.length];
        let verdict = check_candidate(candidate, ctx.chosen_digits(), ctx.bounds());
        ctx.count(Counters::for_verdict(&verdict));

        match verdict {
            Verdict::Accepted(number) => {
                trace!("length {}: accepted {}", ctx.length, number);
                ctx.state.found.insert(number);
                PredicateResult::Success
            }
            _ => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Validate"
    }
}
