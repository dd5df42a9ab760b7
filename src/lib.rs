//! Exact Longest Common Subsequence (LCS) for arbitrary sequences.
//!
//! This crate computes, for two slices of comparable elements, the LCS
//! length, the aligned index pairs and the subsequence values, using the
//! classical O(m·n) dynamic program. It is meant to be embedded in diffing,
//! alignment or similarity-scoring code.
//!
//! ## Core idea
//! 1. Wrap the two sequences in an [`Lcs`] calculator.
//! 2. Ask for what you need: [`Lcs::length`], [`Lcs::index_pairs`],
//!    [`Lcs::values`] or the raw [`Lcs::table`].
//! 3. Each artifact is computed at most once and cached for the lifetime of
//!    the calculator.
//!
//! The length alone never needs the full table: unless a table is already
//! cached it is computed with a single rolling row in O(min(m, n)) space.
//!
//! ## Quick start
//! ```
//! use lcs_dp::{IndexPair, Lcs};
//!
//! let a = [1, 2, 3, 4, 1];
//! let b = [3, 4, 1, 2, 1, 3];
//! let lcs = Lcs::new(&a, &b);
//! assert_eq!(lcs.length(), 3);
//! assert_eq!(lcs.values(), &[&1, &2, &3]);
//! assert_eq!(lcs.index_pairs()[0], IndexPair::new(0, 2));
//! ```
//!
//! ## Cancellation
//! Every operation has a `try_*` form taking a [`CancelSignal`]. The signal is
//! polled once per outer-loop iteration of the table fill and of the rolling
//! length pass. A cancelled call returns an error and caches nothing, so it
//! can simply be retried.
//!
//! ```
//! use lcs_dp::{CancelToken, Lcs, LcsError};
//!
//! let a: Vec<u32> = (0..1000).collect();
//! let lcs = Lcs::new(&a, &a);
//! let token = CancelToken::new();
//! token.cancel();
//! assert_eq!(lcs.try_values(&token), Err(LcsError::requested()));
//! assert_eq!(lcs.values().len(), 1000);
//! ```
//!
//! ## Features
//! - `parallel`: score batches of pairs on the rayon pool ([`batch`]).
//! - `tracing`: emit spans around table, rolling and traceback passes.
//! - `heavy`: enable large stress tests.

pub mod batch;
pub mod builder;
pub mod calculator;
pub mod cancel;
pub mod error;
pub mod length;
pub mod table;
pub mod traceback;
pub mod traits;

pub use crate::builder::LcsBuilder;
pub use crate::calculator::{lcs_length, lcs_values, Lcs};
pub use crate::cancel::{CancelSignal, CancelToken, Uncancellable};
pub use crate::error::{CancelCause, LcsError};
pub use crate::table::LcsTable;
pub use crate::traceback::IndexPair;
pub use crate::traits::{EqMatcher, Matcher};
