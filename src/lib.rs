// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of narcissistic (Armstrong) numbers.
//!
//! A number with `L` decimal digits is narcissistic when the sum of its digits,
//! each raised to the power `L`, equals the number itself (`153 = 1³ + 5³ + 3³`).
//!
//! The digit-power sum depends only on the multiset of digits, not on their
//! order, so rather than testing every number we enumerate digit multisets:
//! `C(L+9, 9)` of them for length `L`, about 14 million for `L = 21` instead
//! of 10²¹ numbers. Each multiset yields one candidate sum, which is accepted
//! when its own digits are exactly that multiset.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data shared by every length task:
//! - Power table `d^L` for all digits and lengths
//! - Lower and upper bounds of each length
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state owned by one length task, tracked on the trail:
//! - Trail - records digit changes for O(1) backtracking
//! - Chosen digits and their running power sums
//! - The numbers found so far for this length
//!
//! # Search Algorithm
//!
//! Each length runs a predicate program on the backtracking engine:
//!
//! 1. **ChooseDigitsPredicate**: choose a non-decreasing digit sequence,
//!    abandoning prefixes whose sums cannot land in range
//! 2. **ValidatePredicate**: check the candidate sum against the multiset
//! 3. **FailPredicate**: backtrack into the next combination
//!
//! # Parallelization
//!
//! Lengths are independent. The [`SearchCoordinator`] runs one task per length
//! on a rayon pool and merges each task's results into a shared set once the
//! task is done. The merged set is sorted at the end, so the output does not
//! depend on the number of workers.
//!
//! # Example
//!
//! ```
//! use armstrong_search::{search, SearchConfig};
//!
//! let report = search(&SearchConfig::new(4)).unwrap();
//! let numbers = report.numbers.to_u128_vec();
//! assert_eq!(&numbers[10..], &[153, 370, 371, 407, 1634, 8208, 9474]);
//! ```

pub mod config;
pub mod context;
pub mod coordinator;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod memo;
pub mod numeric;
pub mod predicates;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use coordinator::{search, Numbers, SearchCoordinator, SearchReport};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use enumerate::Combinations;
pub use error::SearchError;
pub use numeric::{WideInteger, Width};
pub use state::DigitMultiset;
pub use trail::Trail;
