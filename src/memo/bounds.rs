// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-length value ranges.
//!
//! A narcissistic number with `L` digits lies in `[lower(L), upper(L)]` where
//!
//! - `upper(L) = L * 9^L` (every digit contributes at most `9^L`)
//! - `lower(L) = 10^(L-1)` for `L > 1`, and `0` for `L = 1`
//!
//! The range is a necessary condition only. It lets the validator reject a
//! digit sum without decomposing it.
//!
//! `ceiling(L) = min(upper(L), 10^L - 1)` is the largest value in range that
//! still has `L` digits. Subtree pruning in the digit enumeration uses it.

use crate::numeric::constants::MAX_DIGIT;
use crate::numeric::WideInteger;

/// Inclusive range for one digit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<W: WideInteger> {
    pub lower: W,
    pub upper: W,
    pub ceiling: W,
}

impl<W: WideInteger> Bounds<W> {
    /// Compute the range for `length` digits, `None` if it does not fit `W`.
    pub fn for_length(length: usize) -> Option<Self> {
        assert!(length > 0, "digit length must be positive");

        let nine = W::from_digit(MAX_DIGIT);

        let mut nine_power = W::ONE;
        let mut ten_power = W::ONE;
        let mut largest_of_length = W::ZERO;
        for _ in 0..length {
            nine_power = nine_power.checked_mul(nine)?;
            ten_power = ten_power.checked_mul(W::TEN)?;
            // 9, 99, 999, ...: always below ten_power, so no overflow.
            largest_of_length = largest_of_length * W::TEN + nine;
        }
        let upper = W::from_usize(length)?.checked_mul(nine_power)?;
        // ten_power is 10^L here; 10^(L-1) is ten_power / 10.
        let lower = if length == 1 {
            W::ZERO
        } else {
            ten_power.div_rem_base().0
        };
        let ceiling = upper.min(largest_of_length);

        Some(Self {
            lower,
            upper,
            ceiling,
        })
    }

    #[inline]
    pub fn contains(&self, value: W) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Bounds for every length `1..=max_len`.
#[derive(Debug, Clone)]
pub struct BoundsTable<W: WideInteger> {
    // Index 0 is unused so that lengths index directly.
    bounds: Vec<Bounds<W>>,
}

impl<W: WideInteger> BoundsTable<W> {
    /// Returns `None` if the bounds for some length do not fit `W`.
    pub fn new(max_len: usize) -> Option<Self> {
        let mut bounds = Vec::with_capacity(max_len + 1);
        bounds.push(Bounds {
            lower: W::ZERO,
            upper: W::ZERO,
            ceiling: W::ZERO,
        });
        for length in 1..=max_len {
            bounds.push(Bounds::for_length(length)?);
        }
        Some(Self { bounds })
    }

    #[inline]
    pub fn get(&self, length: usize) -> &Bounds<W> {
        &self.bounds[length]
    }
}

/// Largest digit length whose bounds fit `W`.
///
/// 18 for `u64`, 38 for `u128`.
pub fn max_supported_length<W: WideInteger>() -> usize {
    (1..)
        .take_while(|&length| Bounds::<W>::for_length(length).is_some())
        .last()
        .unwrap_or(0)
}
