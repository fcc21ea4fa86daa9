// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy enumeration of digit multisets.
//!
//! [`Combinations`] drives the search engine with the program
//! `ChooseDigits -> Suspend`. Each call to `next` resumes the engine, which
//! backtracks out of the previous suspension into the next combination and
//! suspends again. Nothing is computed ahead of the consumer, and a fresh
//! `Combinations` restarts from the beginning.
//!
//! # Example
//!
//! ```
//! use armstrong_search::enumerate::Combinations;
//!
//! let first: Vec<String> = Combinations::new(2)
//!     .unwrap()
//!     .take(3)
//!     .map(|m| m.to_string())
//!     .collect();
//! assert_eq!(first, ["00", "01", "02"]);
//! assert_eq!(Combinations::new(3).unwrap().count(), 220);
//! ```

use std::sync::Arc;

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::SearchError;
use crate::memo::MemoizedData;
use crate::predicates::{ChooseDigitsPredicate, SuspendPredicate};
use crate::state::DigitMultiset;

/// Every non-decreasing digit sequence of one length, in lexicographic order.
pub struct Combinations {
    ctx: SearchContext<u128>,
    engine: Option<SearchEngine<u128>>,
}

impl Combinations {
    /// Enumerate multisets of `length` digits.
    ///
    /// Fails for lengths the 128-bit tables cannot cover.
    pub fn new(length: usize) -> Result<Self, SearchError> {
        let memo = Arc::new(MemoizedData::new(length)?);
        let engine = EngineBuilder::<u128>::new()
            .add(Box::new(ChooseDigitsPredicate::exhaustive()))
            .terminal(Box::new(SuspendPredicate))
            .build();
        Ok(Self {
            ctx: SearchContext::new(memo, length),
            engine: Some(engine),
        })
    }

    pub fn length(&self) -> usize {
        self.ctx.length
    }
}

impl Iterator for Combinations {
    type Item = DigitMultiset;

    fn next(&mut self) -> Option<DigitMultiset> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        if self.engine.is_none() {
            return None;
        }
        DigitMultiset::from_sorted(self.ctx.chosen_digits())
    }
}
