//! Backward walk over a finished table to recover aligned index pairs.

use crate::table::LcsTable;
use crate::traits::Matcher;

/// One matched position: `left[self.left]` pairs with `right[self.right]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPair {
    pub left: usize,
    pub right: usize,
}

impl IndexPair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl From<(usize, usize)> for IndexPair {
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        (pair.left, pair.right)
    }
}

/// Recover the LCS as ascending index pairs.
///
/// Walks from `(m, n)` toward the origin. A match is written at its rank
/// `table[x][y] - 1`, so the output comes out ascending without a reverse.
/// On a mismatch the walk moves to the larger neighbour, preferring `x - 1`
/// when they tie.
///
/// `table` must have been built from the same `left`, `right` and `matcher`.
pub fn trace_index_pairs<T, M>(
    table: &LcsTable,
    left: &[T],
    right: &[T],
    matcher: &M,
) -> Vec<IndexPair>
where
    M: Matcher<T> + ?Sized,
{
    debug_assert_eq!(table.rows(), left.len() + 1);
    debug_assert_eq!(table.cols(), right.len() + 1);

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("traceback", length = table.final_cell());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut pairs = vec![IndexPair::default(); table.final_cell()];
    let (mut x, mut y) = (left.len(), right.len());

    while x > 0 && y > 0 {
        if matcher.matches(&left[x - 1], &right[y - 1]) {
            pairs[table.get(x, y) - 1] = IndexPair::new(x - 1, y - 1);
            x -= 1;
            y -= 1;
        } else if table.get(x - 1, y) >= table.get(x, y - 1) {
            x -= 1;
        } else {
            y -= 1;
        }
    }

    pairs
}
