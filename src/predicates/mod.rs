// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `combination`: ChooseDigitsPredicate, one non-decreasing digit per round
//! - `validate`: the candidate check and ValidatePredicate
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`
//!
//! A full search for one length is the program
//! `ChooseDigits (pruned) -> Validate -> Fail`: every accepted number is
//! recorded as a side effect and the final failure forces backtracking through
//! every remaining combination.

pub mod combination;
pub mod validate;

pub use combination::ChooseDigitsPredicate;
pub use validate::ValidatePredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::numeric::WideInteger;

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As the terminal
/// predicate of a program it makes the engine explore every alternative.
#[derive(Debug)]
pub struct FailPredicate;

impl<W: WideInteger> Predicate<W> for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<W>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl<W: WideInteger> TerminalPredicate<W> for FailPredicate {}

/// Predicate that pauses the search, handing the engine back to the caller.
///
/// The state in the context is left as it was when the predicate was reached.
#[derive(Debug)]
pub struct SuspendPredicate;

impl<W: WideInteger> Predicate<W> for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<W>, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl<W: WideInteger> TerminalPredicate<W> for SuspendPredicate {}
