// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuring and running a search.

use thiserror::Error;

use crate::numeric::Width;

/// Errors raised before a search starts. A search that starts always completes.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The maximum digit length must be at least 1.
    #[error("maximum digit length must be at least 1, got {0}")]
    InvalidMaxLength(usize),

    /// A dedicated worker pool needs at least one thread.
    #[error("worker thread count must be at least 1")]
    InvalidThreadCount,

    /// Digit-power sums for `max_len` digits do not fit the integer width.
    #[error(
        "{width} cannot hold digit-power sums for {max_len} digits \
         (largest supported length is {limit})"
    )]
    CapacityExceeded {
        width: Width,
        max_len: usize,
        limit: usize,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
