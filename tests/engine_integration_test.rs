// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure, restoring digits via the trail
//! - Suspends and resumes where it left off

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use armstrong_search::context::SearchContext;
use armstrong_search::engine::EngineBuilder;
use armstrong_search::memo::MemoizedData;
use armstrong_search::numeric::constants::multiset_count;
use armstrong_search::predicates::{
    ChooseDigitsPredicate, FailPredicate, SuspendPredicate, ValidatePredicate,
};
use armstrong_search::state::statistics::Counters;
use armstrong_search::{Predicate, PredicateResult};

fn context(length: usize) -> SearchContext<u128> {
    SearchContext::new(Arc::new(MemoizedData::new(length).unwrap()), length)
}

/// Records every complete combination, then succeeds.
#[derive(Debug, Default, Clone)]
struct Record(Rc<RefCell<Vec<Vec<u8>>>>);

impl Predicate<u128> for Record {
    fn try_pred(&mut self, ctx: &mut SearchContext<u128>, _round: usize) -> PredicateResult {
        self.0.borrow_mut().push(ctx.chosen_digits().to_vec());
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Record"
    }
}

#[test]
fn test_suspend_after_first_combination() {
    let mut ctx = context(3);
    let engine = EngineBuilder::<u128>::new()
        .add(Box::new(ChooseDigitsPredicate::exhaustive()))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let engine = engine.unwrap();
    assert_eq!(ctx.chosen_digits(), &[0, 0, 0]);
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 5); // 4 ChooseDigits rounds + Suspend
    assert_eq!(retries, 3); // one digit per position
}

#[test]
fn test_resume_walks_combinations_in_order() {
    let mut ctx = context(2);
    let mut engine = Some(
        EngineBuilder::<u128>::new()
            .add(Box::new(ChooseDigitsPredicate::exhaustive()))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut seen = Vec::new();
    while let Some(current) = engine.take() {
        engine = current.search(&mut ctx);
        if engine.is_some() {
            seen.push(ctx.chosen_digits().to_vec());
        }
    }

    assert_eq!(seen.len() as u64, multiset_count(2));
    assert_eq!(seen[0], vec![0, 0]);
    assert_eq!(seen[9], vec![0, 9]);
    assert_eq!(seen[10], vec![1, 1]);
    assert_eq!(seen.last().unwrap(), &vec![9, 9]);
}

#[test]
fn test_fail_explores_everything() {
    let record = Record::default();
    let mut ctx = context(4);
    let engine = EngineBuilder::<u128>::new()
        .add(Box::new(ChooseDigitsPredicate::exhaustive()))
        .add(Box::new(record.clone()))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());

    let seen = record.0.borrow();
    assert_eq!(seen.len() as u64, multiset_count(4));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert!(seen.iter().all(|c| c.windows(2).all(|d| d[0] <= d[1])));
    // Exhausted search leaves nothing on the trail.
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_pruned_and_exhaustive_find_the_same_numbers() {
    for length in 1..=7 {
        let mut pruned = context(length);
        EngineBuilder::<u128>::new()
            .add(Box::new(ChooseDigitsPredicate::pruned()))
            .add(Box::new(ValidatePredicate))
            .terminal(Box::new(FailPredicate))
            .build()
            .search(&mut pruned);

        let mut exhaustive = context(length);
        EngineBuilder::<u128>::new()
            .add(Box::new(ChooseDigitsPredicate::exhaustive()))
            .add(Box::new(ValidatePredicate))
            .terminal(Box::new(FailPredicate))
            .build()
            .search(&mut exhaustive);

        assert_eq!(pruned.state.found, exhaustive.state.found, "length {}", length);
        assert_eq!(
            exhaustive.statistics.get(Counters::Combinations),
            multiset_count(length)
        );
        assert_eq!(exhaustive.statistics.get(Counters::PrunedSubtrees), 0);
        assert!(
            pruned.statistics.get(Counters::Combinations)
                <= exhaustive.statistics.get(Counters::Combinations)
        );
    }
}
