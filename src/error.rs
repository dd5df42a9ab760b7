//! Error taxonomy.
//!
//! Cancellation is the only way an LCS computation can fail: inputs are never
//! invalid and element comparison is total.

use thiserror::Error;

/// Why a computation was interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelCause {
    /// [`crate::CancelToken::cancel`] was called.
    Requested,
    /// The deadline attached to the token passed.
    DeadlineExceeded,
}

/// Errors returned by the cancellable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LcsError {
    /// A cancellation checkpoint observed the signal.
    #[error("lcs computation cancelled: {0}")]
    Cancelled(CancelCause),
}

impl LcsError {
    /// Shorthand for an explicitly requested cancellation.
    pub fn requested() -> Self {
        Self::Cancelled(CancelCause::Requested)
    }

    /// Shorthand for a missed deadline.
    pub fn deadline_exceeded() -> Self {
        Self::Cancelled(CancelCause::DeadlineExceeded)
    }

    pub fn cause(&self) -> CancelCause {
        match self {
            Self::Cancelled(cause) => *cause,
        }
    }

    /// True when the interruption came from a deadline rather than `cancel()`.
    pub fn is_deadline(&self) -> bool {
        self.cause() == CancelCause::DeadlineExceeded
    }
}

impl std::fmt::Display for CancelCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelCause::Requested => f.write_str("cancellation requested"),
            CancelCause::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}
