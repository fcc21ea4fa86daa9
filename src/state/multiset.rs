// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit multisets: sorted, fixed-capacity digit sequences.

use std::fmt;

use crate::numeric::constants::{MAX_DIGIT, MAX_DIGITS};
use crate::numeric::WideInteger;

/// A non-decreasing sequence of decimal digits.
///
/// Two multisets are equal iff their sorted digit sequences are equal
/// elementwise. Equality only looks at the first `len` digits.
#[derive(Clone, Copy)]
pub struct DigitMultiset {
    digits: [u8; MAX_DIGITS],
    len: u8,
}

impl DigitMultiset {
    pub fn new() -> Self {
        Self {
            digits: [0; MAX_DIGITS],
            len: 0,
        }
    }

    /// Build from digits that are already non-decreasing.
    ///
    /// Returns `None` if the digits are unsorted, not decimal digits, or too many.
    pub fn from_sorted(digits: &[u8]) -> Option<Self> {
        if digits.len() > MAX_DIGITS
            || digits.iter().any(|&d| d > MAX_DIGIT)
            || digits.windows(2).any(|w| w[0] > w[1])
        {
            return None;
        }
        let mut multiset = Self::new();
        multiset.digits[..digits.len()].copy_from_slice(digits);
        multiset.len = digits.len() as u8;
        Some(multiset)
    }

    /// The digit multiset of a value: its decimal digits, sorted ascending.
    ///
    /// Zero has the single digit `0`.
    pub fn of_value<W: WideInteger>(value: W) -> Self {
        let mut multiset = Self::new();
        if value.is_zero() {
            multiset.len = 1;
            return multiset;
        }
        let mut rest = value;
        let mut len = 0;
        while !rest.is_zero() {
            let (quotient, digit) = rest.div_rem_base();
            multiset.digits[len] = digit;
            len += 1;
            rest = quotient;
        }
        multiset.digits[..len].sort_unstable();
        multiset.len = len as u8;
        multiset
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// Sum of `powers[d]` over the digits.
    pub fn power_sum<W: WideInteger>(&self, powers: &[W]) -> W {
        self.as_slice()
            .iter()
            .fold(W::ZERO, |sum, &d| sum + powers[d as usize])
    }
}

impl Default for DigitMultiset {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DigitMultiset {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitMultiset {}

impl fmt::Debug for DigitMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for DigitMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.as_slice() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_value_sorts_digits() {
        let multiset = DigitMultiset::of_value(9474u64);
        assert_eq!(multiset.as_slice(), &[4, 4, 7, 9]);
        assert_eq!(multiset.to_string(), "4479");
    }

    #[test]
    fn test_of_zero() {
        let multiset = DigitMultiset::of_value(0u128);
        assert_eq!(multiset.len(), 1);
        assert_eq!(multiset.as_slice(), &[0]);
    }

    #[test]
    fn test_of_max_u128() {
        let multiset = DigitMultiset::of_value(u128::MAX);
        assert_eq!(multiset.len(), MAX_DIGITS);
    }

    #[test]
    fn test_from_sorted_rejects_unsorted() {
        assert!(DigitMultiset::from_sorted(&[1, 5, 3]).is_none());
        assert!(DigitMultiset::from_sorted(&[1, 10]).is_none());
        assert!(DigitMultiset::from_sorted(&[0; MAX_DIGITS + 1]).is_none());
        assert!(DigitMultiset::from_sorted(&[1, 3, 5]).is_some());
    }

    #[test]
    fn test_equality_ignores_unused_capacity() {
        let a = DigitMultiset::from_sorted(&[1, 3, 5]).unwrap();
        let b = DigitMultiset::of_value(531u64);
        assert_eq!(a, b);
        assert_ne!(a, DigitMultiset::of_value(5310u64));
    }

    #[test]
    fn test_power_sum() {
        let cubes: Vec<u64> = (0..10u64).map(|d| d * d * d).collect();
        let multiset = DigitMultiset::from_sorted(&[1, 3, 5]).unwrap();
        assert_eq!(multiset.power_sum(&cubes), 153);
    }
}
