// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Determinism across workers and widths, configuration errors and reports.

mod common;

use armstrong_search::coordinator::TaskState;
use armstrong_search::state::statistics::Counters;
use armstrong_search::{search, SearchConfig, SearchCoordinator, SearchError, Width};
use common::{known_up_to, run};

#[test]
fn test_same_output_for_any_worker_count() {
    let baseline = run(8, Width::Auto, None);
    for threads in [1, 2, 4] {
        assert_eq!(run(8, Width::Auto, Some(threads)), baseline, "threads {}", threads);
    }
}

#[test]
fn test_widths_agree() {
    for max_len in [1, 5, 9] {
        assert_eq!(
            run(max_len, Width::U64, Some(2)),
            run(max_len, Width::U128, Some(2)),
            "max_len {}",
            max_len
        );
    }
}

#[test]
fn test_per_length_reports() {
    let report = search(&SearchConfig::new(6).with_threads(2)).unwrap();
    assert_eq!(report.lengths.len(), 6);
    let found: Vec<usize> = report.lengths.iter().map(|r| r.found).collect();
    // 1-digit: 0..9; 3: 153 370 371 407; 4: 1634 8208 9474; 5: 54748 92727 93084; 6: 548834
    assert_eq!(found, vec![10, 0, 4, 3, 3, 1]);
    assert!(report.lengths.iter().all(|r| r.state == TaskState::Done));
    assert_eq!(report.statistics.get(Counters::Accepted), 21);
    assert_eq!(report.numbers.len(), known_up_to(6).len());
}

#[test]
fn test_statistics_are_consistent() {
    let report = search(&SearchConfig::new(7)).unwrap();
    let stats = &report.statistics;
    let verdicts = stats.get(Counters::AboveUpperBound)
        + stats.get(Counters::BelowLowerBound)
        + stats.get(Counters::DigitCountMismatch)
        + stats.get(Counters::DigitMismatch)
        + stats.get(Counters::Accepted);
    assert_eq!(stats.get(Counters::Combinations), verdicts);
    assert!(stats.get(Counters::PrunedSubtrees) > 0);
}

#[test]
fn test_coordinator_directly() {
    let outcome = SearchCoordinator::<u64>::new(5)
        .unwrap()
        .with_threads(Some(1))
        .run()
        .unwrap();
    let numbers: Vec<u128> = outcome.numbers.iter().map(|&n| n as u128).collect();
    assert_eq!(numbers, known_up_to(5));
    assert_eq!(outcome.statistics().get(Counters::Accepted), numbers.len() as u64);
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        search(&SearchConfig::new(0)),
        Err(SearchError::InvalidMaxLength(0))
    ));
    assert!(matches!(
        search(&SearchConfig::new(3).with_threads(0)),
        Err(SearchError::InvalidThreadCount)
    ));
    assert!(matches!(
        search(&SearchConfig::new(19).with_width(Width::U64)),
        Err(SearchError::CapacityExceeded { max_len: 19, limit: 18, .. })
    ));
    assert!(matches!(
        search(&SearchConfig::new(40)),
        Err(SearchError::CapacityExceeded { limit: 38, .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = search(&SearchConfig::new(19).with_width(Width::U64)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("19"), "{}", message);
    assert!(message.contains("18"), "{}", message);
}
