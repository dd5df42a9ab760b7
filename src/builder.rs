use crate::traits::{EqMatcher, Matcher};
use crate::Lcs;

/// Step-by-step construction of an [`Lcs`] calculator.
///
/// ```
/// use lcs_dp::LcsBuilder;
///
/// let a = ["Apple", "banana", "Cherry"];
/// let b = ["apple", "CHERRY"];
/// let lcs = LcsBuilder::new(&a, &b)
///     .matcher(|x: &&str, y: &&str| x.eq_ignore_ascii_case(y))
///     .build();
/// assert_eq!(lcs.length(), 2);
/// ```
pub struct LcsBuilder<'a, T, M = EqMatcher> {
    left: &'a [T],
    right: &'a [T],
    matcher: M,
}

impl<'a, T> LcsBuilder<'a, T> {
    pub fn new(left: &'a [T], right: &'a [T]) -> Self {
        Self {
            left,
            right,
            matcher: EqMatcher,
        }
    }
}

impl<'a, T, M> LcsBuilder<'a, T, M> {
    /// Replace the match predicate.
    pub fn matcher<N: Matcher<T>>(self, matcher: N) -> LcsBuilder<'a, T, N> {
        LcsBuilder {
            left: self.left,
            right: self.right,
            matcher,
        }
    }

    /// Exchange the roles of the two sequences.
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            matcher: self.matcher,
        }
    }
}

impl<'a, T, M: Matcher<T>> LcsBuilder<'a, T, M> {
    pub fn build(self) -> Lcs<'a, T, M> {
        Lcs::with_matcher(self.left, self.right, self.matcher)
    }
}
