// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-width unsigned integers used for digit-power sums.
//!
//! The search is generic over [`WideInteger`], implemented for `u64` (narrow)
//! and `u128` (wide). Arithmetic inside the search is unchecked: a value never
//! exceeds `L * 9^L` for the configured length `L`, and the tables in
//! [`crate::memo`] refuse to build when that bound does not fit the width.
//! Overflow is therefore a capacity limit reported at configuration time,
//! never a wrapped result.

pub mod constants;

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul};

use strum_macros::{Display as StrumDisplay, EnumString};

use constants::BASE;

/// Integer width selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Width {
    /// Narrowest width whose capacity covers the requested length.
    #[default]
    Auto,
    /// 64-bit arithmetic.
    U64,
    /// 128-bit arithmetic.
    U128,
}

/// An unsigned integer of fixed width.
pub trait WideInteger:
    Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TEN: Self;
    const BITS: u32;
    const WIDTH: Width;

    fn from_digit(digit: u8) -> Self;

    /// Converts a length or count, `None` if it does not fit.
    fn from_usize(n: usize) -> Option<Self>;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Returns `(self / 10, self % 10)`.
    fn div_rem_base(self) -> (Self, u8);

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Canonical decimal form: no leading zeros, `"0"` for zero.
    fn to_decimal_string(self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut digits = Vec::new();
        let mut rest = self;
        while !rest.is_zero() {
            let (quotient, digit) = rest.div_rem_base();
            digits.push(b'0' + digit);
            rest = quotient;
        }
        digits.reverse();
        // Only ASCII digits were pushed.
        digits.into_iter().map(char::from).collect()
    }
}

macro_rules! impl_wide_integer {
    ($ty:ty, $width:expr) => {
        impl WideInteger for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TEN: Self = BASE as $ty;
            const BITS: u32 = <$ty>::BITS;
            const WIDTH: Width = $width;

            #[inline]
            fn from_digit(digit: u8) -> Self {
                debug_assert!(digit < BASE, "not a decimal digit: {}", digit);
                digit as $ty
            }

            #[inline]
            fn from_usize(n: usize) -> Option<Self> {
                <$ty>::try_from(n).ok()
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }

            #[inline]
            fn div_rem_base(self) -> (Self, u8) {
                (self / Self::TEN, (self % Self::TEN) as u8)
            }
        }
    };
}

impl_wide_integer!(u64, Width::U64);
impl_wide_integer!(u128, Width::U128);
