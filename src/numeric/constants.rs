// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants shared by the digit search.

/// Radix of the digits being searched.
pub const BASE: u8 = 10;

/// Number of distinct digits (`0..=9`).
pub const NDIGITS: usize = BASE as usize;

/// Largest digit.
pub const MAX_DIGIT: u8 = BASE - 1;

/// Capacity of a [`DigitMultiset`](crate::state::DigitMultiset).
///
/// `u128::MAX` has 39 decimal digits, so the decomposition of any value of a
/// supported width fits.
pub const MAX_DIGITS: usize = 39;

/// Digit length used when none is configured.
pub const DEFAULT_MAX_LENGTH: usize = 21;

/// Compute binomial coefficient (n choose k) at compile time.
///
/// Multiplicative form, exact at every step since each partial product
/// is itself a binomial coefficient.
pub const fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// Number of digit multisets of the given length: `C(length + 9, 9)`.
pub const fn multiset_count(length: usize) -> u64 {
    choose(length as u64 + MAX_DIGIT as u64, MAX_DIGIT as u64)
}
