//! The calculator: two borrowed sequences plus compute-once caches.
//!
//! Each artifact (table, index pairs, values) lives in a [`OnceCell`] that is
//! either empty or holds the final value. A cell is filled only by a
//! computation that ran to completion, so a cancelled call leaves the
//! calculator exactly as it was and the next call starts over.
//!
//! `Lcs` is `!Sync` because of the cells: concurrent first calls from several
//! threads are rejected at compile time. Move it to a thread, or wrap it in a
//! `Mutex`, if it has to be shared.

use std::cell::OnceCell;
use std::fmt;

use crate::cancel::{infallible, CancelSignal, Uncancellable};
use crate::length::rolling_length;
use crate::table::{build_table, LcsTable};
use crate::traceback::{trace_index_pairs, IndexPair};
use crate::traits::{EqMatcher, Matcher};

/// LCS calculator over `left` and `right`.
///
/// Every operation comes in two forms: `try_*` takes a [`CancelSignal`] and
/// returns its error if the signal fires; the plain form cannot be cancelled
/// and therefore cannot fail.
///
/// ```
/// use lcs_dp::Lcs;
///
/// let a = ["A", "B", "C", "B", "D", "A", "B"];
/// let b = ["B", "D", "C", "A", "B", "A"];
/// let lcs = Lcs::new(&a, &b);
/// assert_eq!(lcs.length(), 4);
/// assert_eq!(lcs.index_pairs().len(), 4);
/// assert_eq!(lcs.values().len(), 4);
/// ```
pub struct Lcs<'a, T, M = EqMatcher> {
    left: &'a [T],
    right: &'a [T],
    matcher: M,
    table: OnceCell<LcsTable>,
    index_pairs: OnceCell<Vec<IndexPair>>,
    values: OnceCell<Vec<&'a T>>,
}

impl<'a, T: PartialEq> Lcs<'a, T> {
    /// Calculator matching elements with `PartialEq`.
    pub fn new(left: &'a [T], right: &'a [T]) -> Self {
        Self::with_matcher(left, right, EqMatcher)
    }
}

impl<'a, T, M: Matcher<T>> Lcs<'a, T, M> {
    /// Calculator with a custom match predicate.
    pub fn with_matcher(left: &'a [T], right: &'a [T], matcher: M) -> Self {
        Self {
            left,
            right,
            matcher,
            table: OnceCell::new(),
            index_pairs: OnceCell::new(),
            values: OnceCell::new(),
        }
    }

    /// The first sequence, exactly as supplied.
    pub fn left(&self) -> &'a [T] {
        self.left
    }

    /// The second sequence, exactly as supplied.
    pub fn right(&self) -> &'a [T] {
        self.right
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// The full DP table, built on first use.
    pub fn table(&self) -> &LcsTable {
        infallible(self.try_table(&Uncancellable))
    }

    /// Cancellable [`table`](Self::table).
    ///
    /// A cached table is returned without consulting `signal`.
    pub fn try_table<S: CancelSignal>(&self, signal: &S) -> Result<&LcsTable, S::Error> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let table = build_table(self.left, self.right, &self.matcher, signal)?;
        Ok(self.table.get_or_init(|| table))
    }

    /// LCS length.
    pub fn length(&self) -> usize {
        infallible(self.try_length(&Uncancellable))
    }

    /// Cancellable [`length`](Self::length).
    ///
    /// Reads the final table cell if the table is already cached, otherwise
    /// runs the O(min(m, n))-space rolling computation, which does not
    /// populate the table cache.
    pub fn try_length<S: CancelSignal>(&self, signal: &S) -> Result<usize, S::Error> {
        match self.table.get() {
            Some(table) => Ok(table.final_cell()),
            None => self.try_rolling_length(signal),
        }
    }

    /// Always run the rolling computation, even if a table is cached.
    pub fn try_rolling_length<S: CancelSignal>(&self, signal: &S) -> Result<usize, S::Error> {
        rolling_length(self.left, self.right, &self.matcher, signal)
    }

    /// Matched positions in ascending order.
    pub fn index_pairs(&self) -> &[IndexPair] {
        infallible(self.try_index_pairs(&Uncancellable))
    }

    /// Cancellable [`index_pairs`](Self::index_pairs); only the table build it
    /// may trigger can be interrupted.
    pub fn try_index_pairs<S: CancelSignal>(&self, signal: &S) -> Result<&[IndexPair], S::Error> {
        if let Some(pairs) = self.index_pairs.get() {
            return Ok(pairs);
        }
        let table = self.try_table(signal)?;
        let pairs = trace_index_pairs(table, self.left, self.right, &self.matcher);
        Ok(self.index_pairs.get_or_init(|| pairs))
    }

    /// The common subsequence, as references into `left`.
    pub fn values(&self) -> &[&'a T] {
        infallible(self.try_values(&Uncancellable))
    }

    /// Cancellable [`values`](Self::values).
    pub fn try_values<S: CancelSignal>(&self, signal: &S) -> Result<&[&'a T], S::Error> {
        if let Some(values) = self.values.get() {
            return Ok(values);
        }
        let left = self.left;
        let values: Vec<&'a T> = self
            .try_index_pairs(signal)?
            .iter()
            .map(|pair| &left[pair.left])
            .collect();
        Ok(self.values.get_or_init(|| values))
    }

    /// Owned copy of [`values`](Self::values).
    pub fn values_cloned(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().iter().map(|&v| v.clone()).collect()
    }
}

impl<T, M> fmt::Debug for Lcs<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lcs")
            .field("left_len", &self.left.len())
            .field("right_len", &self.right.len())
            .field("table_cached", &self.table.get().is_some())
            .field("index_pairs_cached", &self.index_pairs.get().is_some())
            .field("values_cached", &self.values.get().is_some())
            .finish()
    }
}

/// LCS length of `a` and `b` in O(min(m, n)) space.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    infallible(rolling_length(a, b, &EqMatcher, &Uncancellable))
}

/// One longest common subsequence of `a` and `b`, cloned out of `a`.
pub fn lcs_values<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    Lcs::new(a, b).values_cloned()
}
