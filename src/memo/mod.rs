// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (MEMO tier).
//!
//! Everything here is computed once for the configured maximum length, before
//! any search starts, and is then shared read-only by every length task:
//! - the digit power table
//! - the per-length bounds
//!
//! Building the tables is also the capacity check. If the largest digit-power
//! sum for the maximum length does not fit the integer width, construction
//! fails and no search runs.

pub mod bounds;
pub mod powers;

pub use bounds::{max_supported_length, Bounds, BoundsTable};
pub use powers::PowerTable;

use log::debug;

use crate::error::SearchError;
use crate::numeric::WideInteger;

/// Immutable precomputed data for one search.
#[derive(Debug, Clone)]
pub struct MemoizedData<W: WideInteger> {
    pub max_len: usize,
    pub powers: PowerTable<W>,
    pub bounds: BoundsTable<W>,
}

impl<W: WideInteger> MemoizedData<W> {
    /// Compute the tables for lengths `1..=max_len`.
    pub fn new(max_len: usize) -> Result<Self, SearchError> {
        if max_len < 1 {
            return Err(SearchError::InvalidMaxLength(max_len));
        }
        let capacity_exceeded = || SearchError::CapacityExceeded {
            width: W::WIDTH,
            max_len,
            limit: max_supported_length::<W>(),
        };

        debug!("[MemoizedData] Initializing {}-bit tables for up to {} digits", W::BITS, max_len);

        let bounds = BoundsTable::new(max_len).ok_or_else(capacity_exceeded)?;
        let powers = PowerTable::new(max_len).ok_or_else(capacity_exceeded)?;

        debug!(
            "[MemoizedData] Initialization complete (upper bound for {} digits is {})",
            max_len,
            bounds.get(max_len).upper
        );

        Ok(Self {
            max_len,
            powers,
            bounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_length() {
        let result = MemoizedData::<u128>::new(0);
        assert!(matches!(result, Err(SearchError::InvalidMaxLength(0))));
    }

    #[test]
    fn test_capacity_exceeded_reports_limit() {
        match MemoizedData::<u64>::new(19) {
            Err(SearchError::CapacityExceeded {
                width,
                max_len,
                limit,
            }) => {
                assert_eq!(width, crate::numeric::Width::U64);
                assert_eq!(max_len, 19);
                assert_eq!(limit, 18);
            }
            other => panic!("expected capacity error, got {:?}", other),
        }
    }

    #[test]
    fn test_tables_cover_every_length() {
        let memo = MemoizedData::<u128>::new(21).unwrap();
        assert_eq!(memo.powers.max_len(), 21);
        assert_eq!(memo.bounds.get(21).upper, 21 * 9u128.pow(21));
        assert_eq!(memo.bounds.get(1).lower, 0);
    }
}
