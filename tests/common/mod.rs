// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use armstrong_search::{search, SearchConfig, Width};

/// Every narcissistic number with at most 10 digits, ascending.
pub const UP_TO_TEN_DIGITS: &[u128] = &[
    0,
    1,
    2,
    3,
    4,
    5,
    6,
    7,
    8,
    9,
    153,
    370,
    371,
    407,
    1634,
    8208,
    9474,
    54748,
    92727,
    93084,
    548834,
    1741725,
    4210818,
    9800817,
    9926315,
    24678050,
    24678051,
    88593477,
    146511208,
    472335975,
    534494836,
    912985153,
    4679307774,
];

/// Known values with at most `max_len` digits.
pub fn known_up_to(max_len: usize) -> Vec<u128> {
    UP_TO_TEN_DIGITS
        .iter()
        .copied()
        .filter(|&n| digit_count(n) <= max_len)
        .collect()
}

/// Run a search and widen the result for comparison.
pub fn run(max_len: usize, width: Width, threads: Option<usize>) -> Vec<u128> {
    let mut config = SearchConfig::new(max_len).with_width(width);
    if let Some(threads) = threads {
        config = config.with_threads(threads);
    }
    search(&config)
        .unwrap_or_else(|e| panic!("search up to {} digits failed: {}", max_len, e))
        .numbers
        .to_u128_vec()
}

pub fn digit_count(n: u128) -> usize {
    n.to_string().len()
}

/// Straightforward check of the defining equation.
pub fn is_narcissistic(n: u128) -> bool {
    let digits: Vec<u128> = n.to_string().bytes().map(|b| (b - b'0') as u128).collect();
    let length = digits.len() as u32;
    digits.iter().map(|d| d.pow(length)).sum::<u128>() == n
}
