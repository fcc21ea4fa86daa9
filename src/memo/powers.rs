// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit power table.
//!
//! `power[length][digit] = digit^length` for every digit and every length up to
//! the configured maximum. Computed once by iterated multiplication, then
//! shared read-only by every length task.

use crate::numeric::constants::NDIGITS;
use crate::numeric::WideInteger;

/// Precomputed `digit^length` values.
#[derive(Debug, Clone)]
pub struct PowerTable<W: WideInteger> {
    rows: Vec<[W; NDIGITS]>,
}

impl<W: WideInteger> PowerTable<W> {
    /// Build rows `0..=max_len`.
    ///
    /// Returns `None` if some power does not fit `W`.
    pub fn new(max_len: usize) -> Option<Self> {
        let mut rows = Vec::with_capacity(max_len + 1);
        // 0^0 = 1
        let mut row = [W::ONE; NDIGITS];
        rows.push(row);
        for _ in 0..max_len {
            for (d, power) in row.iter_mut().enumerate() {
                *power = power.checked_mul(W::from_digit(d as u8))?;
            }
            rows.push(row);
        }
        Some(Self { rows })
    }

    /// Largest length with a row.
    pub fn max_len(&self) -> usize {
        self.rows.len() - 1
    }

    /// `digit^length`.
    #[inline]
    pub fn get(&self, length: usize, digit: u8) -> W {
        self.rows[length][digit as usize]
    }

    /// All ten powers for one length, indexed by digit.
    #[inline]
    pub fn row(&self, length: usize) -> &[W; NDIGITS] {
        &self.rows[length]
    }
}
