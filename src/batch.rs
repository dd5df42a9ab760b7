//! Scoring many independent sequence pairs.
//!
//! Each pair runs the rolling-length computation on its own; with the
//! `parallel` feature the pairs are spread over the rayon pool. Every pair is
//! still a single-threaded computation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cancel::{infallible, CancelSignal, Uncancellable};
use crate::length::rolling_length;
use crate::traits::EqMatcher;

/// A borrowed `(left, right)` input pair.
pub type SeqPair<'a, T> = (&'a [T], &'a [T]);

/// LCS length of every pair, in input order.
#[cfg(feature = "parallel")]
pub fn lengths<T: PartialEq + Sync>(pairs: &[SeqPair<'_, T>]) -> Vec<usize> {
    infallible(try_lengths(pairs, &Uncancellable))
}

/// LCS length of every pair, in input order.
#[cfg(not(feature = "parallel"))]
pub fn lengths<T: PartialEq>(pairs: &[SeqPair<'_, T>]) -> Vec<usize> {
    infallible(try_lengths(pairs, &Uncancellable))
}

/// Cancellable [`lengths`]. The first error observed is returned and all
/// results are discarded.
#[cfg(feature = "parallel")]
pub fn try_lengths<T, S>(pairs: &[SeqPair<'_, T>], signal: &S) -> Result<Vec<usize>, S::Error>
where
    T: PartialEq + Sync,
    S: CancelSignal + Sync,
    S::Error: Send,
{
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("batch_lengths", pairs = pairs.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .par_iter()
        .map(|&(left, right)| rolling_length(left, right, &EqMatcher, signal))
        .collect()
}

/// Cancellable [`lengths`]. The first error observed is returned and all
/// results are discarded.
#[cfg(not(feature = "parallel"))]
pub fn try_lengths<T, S>(pairs: &[SeqPair<'_, T>], signal: &S) -> Result<Vec<usize>, S::Error>
where
    T: PartialEq,
    S: CancelSignal,
{
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("batch_lengths", pairs = pairs.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .iter()
        .map(|&(left, right)| rolling_length(left, right, &EqMatcher, signal))
        .collect()
}

/// Similarity ratio `2·LCS / (|a| + |b|)`, in `[0, 1]`.
///
/// Two empty sequences are identical and score `1.0`.
pub fn similarity<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let common = infallible(rolling_length(a, b, &EqMatcher, &Uncancellable));
    (2 * common) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;

    #[test]
    fn lengths_in_input_order() {
        let a = b"ABCBDAB".to_vec();
        let b = b"BDCABA".to_vec();
        let e: Vec<u8> = Vec::new();
        let pairs: Vec<SeqPair<'_, u8>> = vec![
            (&a[..], &b[..]),
            (&a[..], &a[..]),
            (&e[..], &b[..]),
            (&b[..], &a[..]),
        ];
        assert_eq!(lengths(&pairs), vec![4, 7, 0, 4]);
    }

    #[test]
    fn empty_batch() {
        let pairs: Vec<SeqPair<'_, u8>> = Vec::new();
        assert!(lengths(&pairs).is_empty());
    }

    #[test]
    fn cancelled_batch_fails() {
        let a = [1, 2, 3];
        let pairs: Vec<SeqPair<'_, i32>> = vec![(&a[..], &a[..]), (&a[..], &a[..])];
        let token = CancelToken::new();
        token.cancel();
        assert!(try_lengths(&pairs, &token).is_err());
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity::<u8>(&[], &[]), 1.0);
        assert_eq!(similarity(b"ABC", b""), 0.0);
        assert_eq!(similarity(b"ABC", b"ABC"), 1.0);
        assert_eq!(similarity(b"AB", b"AC"), 0.5);
    }
}
