// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Whether the entry is untried, settled, or iterating over choices
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use armstrong_search::context::SearchContext;
//! use armstrong_search::engine::EngineBuilder;
//! use armstrong_search::memo::MemoizedData;
//! use armstrong_search::predicates::{ChooseDigitsPredicate, SuspendPredicate};
//!
//! let memo = Arc::new(MemoizedData::<u64>::new(2).unwrap());
//! let mut ctx = SearchContext::new(memo, 2);
//! let engine = EngineBuilder::<u64>::new()
//!     .add(Box::new(ChooseDigitsPredicate::exhaustive()))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Suspends at the first combination; resume with `engine.search` again.
//! let engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.chosen_digits(), &[0, 0]);
//! let _engine = engine.search(&mut ctx).unwrap();
//! assert_eq!(ctx.chosen_digits(), &[0, 1]);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use crate::numeric::WideInteger;

/// How a stack entry responds when control returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// try_pred has not been called yet.
    Call,
    /// try_pred succeeded without choices; backtracking pops the entry.
    Settled,
    /// Iterating choices `next..count` via retry_pred.
    Choice { next: usize, count: usize },
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    mode: Mode,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine<W: WideInteger> {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate<W>>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the first predicate has been pushed.
    started: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl<W: WideInteger> SearchEngine<W> {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate<W>>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(64),
            started: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again resumes by
    ///   backtracking out of the suspension
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Results are communicated through `ctx`, not the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or SUSPEND.
    pub fn search(mut self, ctx: &mut SearchContext<W>) -> Option<Self> {
        if !self.started {
            self.started = true;
            if self.predicates.is_empty() {
                return None;
            }
            self.stack.push(StackEntry {
                predicate_index: 0,
                round: 0,
                mode: Mode::Call,
                trail_checkpoint: ctx.trail.len(),
            });
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None; // Search exhausted
            };

            ctx.rewind_to(entry.trail_checkpoint);
            let pred_idx = entry.predicate_index;
            let round = entry.round;

            match entry.mode {
                Mode::Call => {
                    self.try_count += 1;
                    let result = self.predicates[pred_idx].try_pred(ctx, round);
                    match result {
                        PredicateResult::Success => {
                            entry.mode = Mode::Settled;
                            self.push_next_predicate(ctx);
                        }
                        PredicateResult::SuccessSamePredicate => {
                            entry.mode = Mode::Settled;
                            self.push_same_predicate(ctx);
                        }
                        PredicateResult::Failure => {
                            self.stack.pop();
                        }
                        PredicateResult::Choices(count) => {
                            entry.mode = Mode::Choice { next: 0, count };
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                        PredicateResult::Suspend => {
                            entry.mode = Mode::Settled;
                            return Some(self);
                        }
                    }
                }
                Mode::Settled => {
                    self.stack.pop();
                }
                Mode::Choice { next, count } => {
                    if next >= count {
                        self.stack.pop();
                        continue;
                    }
                    entry.mode = Mode::Choice {
                        next: next + 1,
                        count,
                    };
                    self.retry_count += 1;
                    let result = self.predicates[pred_idx].retry_pred(ctx, round, next);
                    match result {
                        PredicateResult::Success => self.push_next_predicate(ctx),
                        PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                        PredicateResult::Failure => {
                            // Try next choice (loop continues)
                        }
                        PredicateResult::Choices(_) | PredicateResult::Suspend => {
                            panic!(
                                "{}::retry_pred returned invalid result: {:?}",
                                self.predicates[pred_idx].name(),
                                result
                            );
                        }
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &SearchContext<W>) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry {
            predicate_index: next_index,
            round: 0,
            mode: Mode::Call,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext<W>) {
        let (predicate_index, round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack.push(StackEntry {
            predicate_index,
            round,
            mode: Mode::Call,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) accumulated over every call to search().
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose last predicate is terminal.
pub struct EngineBuilder<W: WideInteger> {
    predicates: Vec<Box<dyn Predicate<W>>>,
}

impl<W: WideInteger> EngineBuilder<W> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn add(mut self, predicate: Box<dyn Predicate<W>>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate. Nothing can be added after it.
    pub fn terminal<P: TerminalPredicate<W> + 'static>(
        mut self,
        predicate: Box<P>,
    ) -> TerminatedEngineBuilder<W> {
        self.predicates.push(predicate);
        TerminatedEngineBuilder {
            predicates: self.predicates,
        }
    }
}

impl<W: WideInteger> Default for EngineBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`EngineBuilder`] that already ends with a terminal predicate.
pub struct TerminatedEngineBuilder<W: WideInteger> {
    predicates: Vec<Box<dyn Predicate<W>>>,
}

impl<W: WideInteger> TerminatedEngineBuilder<W> {
    pub fn build(self) -> SearchEngine<W> {
        SearchEngine::new(self.predicates)
    }
}
