//! Length-only LCS in O(min(m, n)) space.
//!
//! Same recurrence as [`crate::table`], but only one row of the table is kept.
//! The row spans the shorter input; when `right` is the longer one the two
//! slices are swapped locally; the caller's slices are untouched.

use crate::cancel::{poll, CancelSignal};
use crate::traits::Matcher;

/// LCS length of `left` and `right` using a single rolling row.
///
/// Polls `signal` once per outer iteration. On cancellation nothing is kept.
pub fn rolling_length<T, M, S>(
    left: &[T],
    right: &[T],
    matcher: &M,
    signal: &S,
) -> Result<usize, S::Error>
where
    M: Matcher<T> + ?Sized,
    S: CancelSignal,
{
    // The matcher is assumed symmetric, so swapping the roles only changes
    // which sequence drives the outer loop.
    let (outer, inner) = if right.len() > left.len() {
        (right, left)
    } else {
        (left, right)
    };

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("rolling_length", outer = outer.len(), inner = inner.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = inner.len();
    let mut curr = vec![0usize; n + 1];

    for o in outer {
        poll(signal, "rolling_length")?;
        // `diag` holds table[i-1][j-1]: the value curr[j-1] had before this pass.
        let mut diag = 0;
        for j in 1..=n {
            let up = curr[j];
            curr[j] = if matcher.matches(o, &inner[j - 1]) {
                diag + 1
            } else {
                up.max(curr[j - 1])
            };
            diag = up;
        }
    }

    Ok(curr[n])
}
