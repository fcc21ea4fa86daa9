// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Searches with small digit limits against the known narcissistic numbers.

mod common;

use armstrong_search::{search, Numbers, SearchConfig, Width};
use common::{digit_count, is_narcissistic, known_up_to, run, UP_TO_TEN_DIGITS};

#[test]
fn test_single_digits() {
    let report = search(&SearchConfig::new(1)).unwrap();
    assert_eq!(report.numbers, Numbers::Narrow((0..=9).collect()));
}

#[test]
fn test_three_digits() {
    let numbers = run(3, Width::Auto, None);
    assert_eq!(
        numbers,
        vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407]
    );
    // Nothing else up to 999.
    let brute: Vec<u128> = (0..1000).filter(|&n| is_narcissistic(n)).collect();
    assert_eq!(numbers, brute);
}

#[test]
fn test_no_two_digit_numbers() {
    assert_eq!(run(2, Width::Auto, None), run(1, Width::Auto, None));
}

#[test]
fn test_four_digits() {
    let numbers = run(4, Width::Auto, None);
    assert!(numbers.contains(&8208));
    assert!(numbers.contains(&9474));
    for &n in numbers.iter().filter(|&&n| digit_count(n) == 4) {
        assert!((1000..=9474).contains(&n), "{} outside [1000, 9474]", n);
    }
    let brute: Vec<u128> = (0..10_000).filter(|&n| is_narcissistic(n)).collect();
    assert_eq!(numbers, brute);
}

#[test]
fn test_up_to_ten_digits() {
    assert_eq!(run(10, Width::Auto, None), UP_TO_TEN_DIGITS);
}

#[test]
fn test_every_prefix_length() {
    for max_len in 1..=7 {
        assert_eq!(run(max_len, Width::Auto, None), known_up_to(max_len), "max_len {}", max_len);
    }
}

#[test]
fn test_output_ascending_and_valid() {
    let numbers = run(9, Width::U128, Some(3));
    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
    assert!(numbers.iter().all(|&n| is_narcissistic(n)));
}

#[test]
fn test_decimal_output() {
    let report = search(&SearchConfig::new(4)).unwrap();
    let lines = report.numbers.to_decimal_strings();
    assert_eq!(lines.first().map(String::as_str), Some("0"));
    assert_eq!(lines.last().map(String::as_str), Some("9474"));
    // Round trip: every line parses back to the number it came from.
    let parsed: Vec<u128> = lines.iter().map(|s| s.parse().unwrap()).collect();
    assert_eq!(parsed, report.numbers.to_u128_vec());
}
