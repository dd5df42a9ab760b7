//! Full DP table construction.
//!
//! `table[x][y]` is the LCS length of `left[0..x)` and `right[0..y)`:
//!
//! ```text
//! table[x][y] = table[x-1][y-1] + 1                    if left[x-1] ~ right[y-1]
//!             = max(table[x-1][y], table[x][y-1])      otherwise
//! ```
//!
//! Row 0 and column 0 are the zero base case. The fill runs column by column
//! (outer `y`, inner `x`) and polls the cancel signal before each column.

use crate::cancel::{poll, CancelSignal};
use crate::traits::Matcher;

/// Immutable `(m+1) × (n+1)` LCS length table, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows, `left.len() + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `right.len() + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `left[0..x)` and `right[0..y)`.
    ///
    /// # Panics
    /// Panics if `x >= rows()` or `y >= cols()`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> usize {
        assert!(x < self.rows && y < self.cols, "cell ({x}, {y}) out of bounds");
        self.cells[x * self.cols + y]
    }

    /// Row `x` as a slice of `cols()` values.
    pub fn row(&self, x: usize) -> &[usize] {
        let start = x * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// `table[m][n]`, the LCS length of the full sequences.
    #[inline]
    pub fn final_cell(&self) -> usize {
        // rows, cols >= 1 always, so the table is never empty.
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: usize) {
        self.cells[x * self.cols + y] = value;
    }
}

/// Build the full table, polling `signal` before every column.
///
/// On cancellation the partially filled table is dropped and the signal's
/// error is returned.
pub fn build_table<T, M, S>(
    left: &[T],
    right: &[T],
    matcher: &M,
    signal: &S,
) -> Result<LcsTable, S::Error>
where
    M: Matcher<T> + ?Sized,
    S: CancelSignal,
{
    let rows = left.len() + 1;
    let cols = right.len() + 1;

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("build_table", rows, cols);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut table = LcsTable::zeroed(rows, cols);

    for y in 1..cols {
        poll(signal, "build_table")?;
        let r = &right[y - 1];
        for x in 1..rows {
            let value = if matcher.matches(&left[x - 1], r) {
                table.get(x - 1, y - 1) + 1
            } else {
                table.get(x - 1, y).max(table.get(x, y - 1))
            };
            table.set(x, y, value);
        }
    }

    Ok(table)
}
