use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use thiserror::Error;

/// Marker for a cooperatively aborted operation.
///
/// Converts into the Canceled variant of the async outcome families. As an
/// error it is what `into_result` produces for a canceled outcome, and async
/// families recognize it again when converting errors back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation was canceled")]
pub struct Canceled;

/// Cancellation signal handed to continuations and handlers.
///
/// The runtime driving the awaited work owns the token and decides when to
/// cancel it. Outcome combinators never poll it; they only forward it so a
/// handler can check it or pass it further down a chain it starts itself.
#[derive(Debug, Default, Clone)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }

    /// Returns `Err(Canceled)` once cancellation was requested.
    ///
    /// ```
    /// use outcomes_core::{AsyncOutcome, CancellationToken};
    ///
    /// fn step(token: &CancellationToken) -> AsyncOutcome<u32> {
    ///     match token.check() {
    ///         Ok(()) => AsyncOutcome::from_value(1),
    ///         Err(canceled) => canceled.into(),
    ///     }
    /// }
    ///
    /// let token = CancellationToken::new();
    /// assert!(step(&token).is_success());
    /// token.cancel();
    /// assert!(step(&token).is_canceled());
    /// ```
    pub fn check(&self) -> Result<(), Canceled> {
        if self.is_canceled() {
            Err(Canceled)
        } else {
            Ok(())
        }
    }
}
