//! Cooperative cancellation.
//!
//! Long-running passes (table construction, rolling length) call
//! [`CancelSignal::checkpoint`] once per outer-loop iteration. Work already in
//! flight inside one iteration is never preempted, so the worst-case overrun
//! after a cancel is a single inner pass.
//!
//! Two signals ship with the crate:
//! - [`Uncancellable`]: never fires; its error type is [`Infallible`], which is
//!   how the plain (non-`try_`) calculator methods are statically infallible.
//! - [`CancelToken`]: a shared flag plus an optional deadline.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::LcsError;

/// A polled interrupt source.
pub trait CancelSignal {
    /// Error surfaced when the signal has fired.
    type Error;

    /// Return `Err` if the computation should stop now.
    fn checkpoint(&self) -> Result<(), Self::Error>;
}

/// Signal that never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uncancellable;

impl CancelSignal for Uncancellable {
    type Error = Infallible;

    #[inline]
    fn checkpoint(&self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Cloneable cancellation handle.
///
/// Clones share the same flag, so a token can be handed to a worker while the
/// owner keeps a clone to call [`cancel`](Self::cancel) from another thread.
/// A deadline, if set, is fixed at construction and shared by all clones.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that also fires once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            flag: Arc::default(),
            deadline: Some(deadline),
        }
    }

    /// Token that fires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) has been called. Does not consult the deadline.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl CancelSignal for CancelToken {
    type Error = LcsError;

    fn checkpoint(&self) -> Result<(), LcsError> {
        if self.is_cancelled() {
            return Err(LcsError::requested());
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(LcsError::deadline_exceeded()),
            _ => Ok(()),
        }
    }
}

impl CancelSignal for AtomicBool {
    type Error = LcsError;

    #[inline]
    fn checkpoint(&self) -> Result<(), LcsError> {
        if self.load(Ordering::Acquire) {
            Err(LcsError::requested())
        } else {
            Ok(())
        }
    }
}

impl<S: CancelSignal + ?Sized> CancelSignal for &S {
    type Error = S::Error;

    #[inline]
    fn checkpoint(&self) -> Result<(), S::Error> {
        (**self).checkpoint()
    }
}

/// Poll `signal`, emitting a debug event when it fires.
#[inline]
pub(crate) fn poll<S: CancelSignal>(signal: &S, site: &'static str) -> Result<(), S::Error> {
    let result = signal.checkpoint();
    if result.is_err() {
        trace_cancelled(site);
    }
    result
}

#[cfg(feature = "tracing")]
fn trace_cancelled(site: &'static str) {
    tracing::debug!(site, "lcs computation cancelled at checkpoint");
}

#[cfg(not(feature = "tracing"))]
#[inline]
fn trace_cancelled(_site: &'static str) {}

/// Unwrap a result whose error type is uninhabited.
#[inline]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
