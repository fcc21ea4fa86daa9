// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::SearchError;
use crate::memo::max_supported_length;
use crate::numeric::constants::DEFAULT_MAX_LENGTH;
use crate::numeric::Width;

/// Parameters of one search.
///
/// # Example
///
/// ```
/// use armstrong_search::{SearchConfig, Width};
///
/// let config = SearchConfig::new(21).with_threads(4);
/// assert_eq!(config.resolved_width().unwrap(), Width::U128);
/// assert_eq!(SearchConfig::new(17).resolved_width().unwrap(), Width::U64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search digit lengths `1..=max_len`.
    pub max_len: usize,
    pub width: Width,
    /// Worker threads; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl SearchConfig {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            width: Width::Auto,
            threads: None,
        }
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check everything that can be checked without building tables.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_len < 1 {
            return Err(SearchError::InvalidMaxLength(self.max_len));
        }
        if self.threads == Some(0) {
            return Err(SearchError::InvalidThreadCount);
        }
        self.resolved_width().map(|_| ())
    }

    /// The concrete width the search will run with.
    ///
    /// `Auto` picks `u64` when it can hold the sums, `u128` otherwise.
    pub fn resolved_width(&self) -> Result<Width, SearchError> {
        let fits = |width: Width| self.max_len <= width_limit(width);
        let width = match self.width {
            Width::Auto if fits(Width::U64) => Width::U64,
            Width::Auto => Width::U128,
            explicit => explicit,
        };
        if fits(width) {
            Ok(width)
        } else {
            Err(SearchError::CapacityExceeded {
                width,
                max_len: self.max_len,
                limit: width_limit(width),
            })
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

/// Largest supported digit length for a width (`Auto` means the widest).
pub fn width_limit(width: Width) -> usize {
    match width {
        Width::U64 => max_supported_length::<u64>(),
        Width::U128 | Width::Auto => max_supported_length::<u128>(),
    }
}
