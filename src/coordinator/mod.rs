// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parallel search across digit lengths.
//!
//! Lengths are independent: a number has exactly one digit count, so the
//! searches for different lengths share nothing but the read-only tables.
//! The coordinator runs one task per length on a rayon pool. Each task owns a
//! [`SearchContext`] and runs the program
//!
//! ```text
//! ChooseDigits (pruned) -> Validate -> Fail
//! ```
//!
//! to completion, then merges its local result set into the global set in a
//! single locked bulk insert. When every task is done the global set is
//! copied out and sorted, so the output does not depend on task completion
//! order or on the number of workers.
//!
//! # Lifecycle
//!
//! - task: `Pending → Running → Merging → Done`
//! - coordinator: `Dispatching → AllDone → Finalizing → Complete`

pub mod report;

pub use report::{LengthReport, Numbers, SearchOutcome, SearchReport};

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;
use strum_macros::Display;

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::SearchError;
use crate::memo::MemoizedData;
use crate::numeric::{WideInteger, Width};
use crate::predicates::{ChooseDigitsPredicate, FailPredicate, ValidatePredicate};

/// Lifecycle of one length task.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Running,
    Merging,
    Done,
}

/// Lifecycle of the coordinator as a whole.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorPhase {
    Dispatching,
    AllDone,
    Finalizing,
    Complete,
}

/// Runs every length `1..=max_len` and merges the results.
#[derive(Debug, Clone)]
pub struct SearchCoordinator<W: WideInteger> {
    memo: Arc<MemoizedData<W>>,
    threads: Option<usize>,
}

impl<W: WideInteger> SearchCoordinator<W> {
    /// Build the shared tables for `max_len`.
    pub fn new(max_len: usize) -> Result<Self, SearchError> {
        Ok(Self {
            memo: Arc::new(MemoizedData::new(max_len)?),
            threads: None,
        })
    }

    /// Use a dedicated pool of `threads` workers instead of the global pool.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn max_len(&self) -> usize {
        self.memo.max_len
    }

    /// Search every length and return the sorted union of their results.
    pub fn run(&self) -> Result<SearchOutcome<W>, SearchError> {
        let global = Mutex::new(HashSet::new());

        log_phase(CoordinatorPhase::Dispatching);
        let mut lengths = match self.threads {
            Some(0) => return Err(SearchError::InvalidThreadCount),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("armstrong-{}", i))
                    .build()?;
                pool.install(|| self.dispatch(&global))
            }
            None => self.dispatch(&global),
        };
        log_phase(CoordinatorPhase::AllDone);

        log_phase(CoordinatorPhase::Finalizing);
        lengths.sort_by_key(|report| report.length);
        let mut numbers: Vec<W> = global.into_inner().into_iter().collect();
        numbers.sort_unstable();
        log_phase(CoordinatorPhase::Complete);

        Ok(SearchOutcome { numbers, lengths })
    }

    /// One task per length, longest first since those take the longest.
    fn dispatch(&self, global: &Mutex<HashSet<W>>) -> Vec<LengthReport> {
        let lengths: Vec<usize> = (1..=self.memo.max_len).rev().collect();
        lengths
            .into_par_iter()
            .with_max_len(1)
            .map(|length| self.search_length(length, global))
            .collect()
    }

    /// Search one length and merge its numbers into `global`.
    pub fn search_length(&self, length: usize, global: &Mutex<HashSet<W>>) -> LengthReport {
        let mut state = TaskState::Pending;
        let mut ctx = SearchContext::new(self.memo.clone(), length);
        let engine = EngineBuilder::<W>::new()
            .add(Box::new(ChooseDigitsPredicate::pruned()))
            .add(Box::new(ValidatePredicate))
            .terminal(Box::new(FailPredicate))
            .build();

        transition(length, &mut state, TaskState::Running);
        // The program ends in Fail, so the engine never suspends.
        let suspended = engine.search(&mut ctx);
        debug_assert!(suspended.is_none(), "length {} search suspended", length);

        transition(length, &mut state, TaskState::Merging);
        let found = ctx.state.found.len();
        global.lock().extend(ctx.state.found.drain());

        transition(length, &mut state, TaskState::Done);
        debug!("length {}: {} found ({})", length, found, ctx.statistics);

        LengthReport {
            length,
            state,
            found,
            statistics: ctx.statistics,
        }
    }
}

fn transition(length: usize, state: &mut TaskState, next: TaskState) {
    debug!("length {}: {} -> {}", length, state, next);
    *state = next;
}

fn log_phase(phase: CoordinatorPhase) {
    debug!("coordinator: {}", phase);
}

/// Run a complete search as configured.
///
/// # Example
///
/// ```
/// use armstrong_search::{search, Numbers, SearchConfig};
///
/// let report = search(&SearchConfig::new(3)).unwrap();
/// assert_eq!(
///     report.numbers,
///     Numbers::Narrow(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407])
/// );
/// ```
pub fn search(config: &SearchConfig) -> Result<SearchReport, SearchError> {
    config.validate()?;
    let width = config.resolved_width()?;
    info!(
        "Searching narcissistic numbers of 1..={} digits with {} arithmetic",
        config.max_len, width
    );

    let report = match width {
        Width::U64 => SearchReport::narrow(
            SearchCoordinator::<u64>::new(config.max_len)?
                .with_threads(config.threads)
                .run()?,
        ),
        Width::U128 | Width::Auto => SearchReport::wide(
            SearchCoordinator::<u128>::new(config.max_len)?
                .with_threads(config.threads)
                .run()?,
        ),
    };

    info!("Found {} narcissistic numbers", report.numbers.len());
    Ok(report)
}
