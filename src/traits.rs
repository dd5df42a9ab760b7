//! The equality predicate used to decide which elements match.
//!
//! Every pass of the algorithm (table fill, rolling length, traceback) asks a
//! [`Matcher`] whether `left[i]` and `right[j]` are the same element. The
//! default, [`EqMatcher`], defers to `PartialEq`, which for derived impls is
//! structural equality all the way down (`Vec`s, tuples, nested structs and
//! enums). Callers that need a looser notion of sameness supply a closure.
//!
//! Whatever predicate is used must be total and consistent: reflexive and
//! symmetric. A predicate that is not symmetric makes `LCS(a, b)` and
//! `LCS(b, a)` disagree, and one that changes its answer between calls can
//! make the traceback disagree with the table it walks.

/// Decides whether two elements count as a match.
pub trait Matcher<T: ?Sized> {
    fn matches(&self, a: &T, b: &T) -> bool;
}

/// Structural equality via `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqMatcher;

impl<T: PartialEq + ?Sized> Matcher<T> for EqMatcher {
    #[inline]
    fn matches(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn matches(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
