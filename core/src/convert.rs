//! Bridges between outcome families.
//!
//! Widening conversions (a coarse family into one with more variants) are
//! lossless and exposed both as `From` impls and as named methods. Narrowing
//! ones are lossy: a failure collapses into its materialized fault. There is
//! no way back from a coarse family into a richer one beyond what the coarse
//! outcome already carried.

use crate::{
    async_outcome::AsyncOutcome, async_rich::AsyncRichOutcome, outcome::Outcome,
    rich::RichOutcome,
};

impl<T> From<Outcome<T>> for RichOutcome<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.run(RichOutcome::Value)
    }
}

impl<T> From<Outcome<T>> for AsyncOutcome<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.run(AsyncOutcome::Value)
    }
}

impl<T> From<Outcome<T>> for AsyncRichOutcome<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.run(AsyncRichOutcome::Value)
    }
}

impl<T> From<RichOutcome<T>> for AsyncRichOutcome<T> {
    fn from(outcome: RichOutcome<T>) -> Self {
        outcome.run(AsyncRichOutcome::Value)
    }
}

impl<T> From<AsyncOutcome<T>> for AsyncRichOutcome<T> {
    fn from(outcome: AsyncOutcome<T>) -> Self {
        outcome.run(AsyncRichOutcome::Value)
    }
}

impl<T> Outcome<T> {
    pub fn into_rich(self) -> RichOutcome<T> {
        self.into()
    }

    pub fn into_async(self) -> AsyncOutcome<T> {
        self.into()
    }

    pub fn into_async_rich(self) -> AsyncRichOutcome<T> {
        self.into()
    }
}

impl<T> RichOutcome<T> {
    pub fn into_async_rich(self) -> AsyncRichOutcome<T> {
        self.into()
    }

    /// Lossy: a failure becomes its materialized fault.
    pub fn into_outcome(self) -> Outcome<T> {
        match self {
            RichOutcome::Value(value) => Outcome::Value(value),
            RichOutcome::Failure(failure) => Outcome::Fault(failure.as_fault()),
            RichOutcome::Fault(fault) => Outcome::Fault(fault),
        }
    }

    /// Lossy: a failure becomes its materialized fault.
    pub fn into_async_outcome(self) -> AsyncOutcome<T> {
        self.into_outcome().into_async()
    }
}

impl<T> AsyncOutcome<T> {
    pub fn into_async_rich(self) -> AsyncRichOutcome<T> {
        self.into()
    }
}

impl<T> AsyncRichOutcome<T> {
    /// Lossy: a failure becomes its materialized fault; cancellation and
    /// values map straight across.
    pub fn into_async_outcome(self) -> AsyncOutcome<T> {
        match self {
            AsyncRichOutcome::Value(value) => AsyncOutcome::Value(value),
            AsyncRichOutcome::Canceled => AsyncOutcome::Canceled,
            AsyncRichOutcome::Failure(failure) => AsyncOutcome::Fault(failure.as_fault()),
            AsyncRichOutcome::Fault(fault) => AsyncOutcome::Fault(fault),
        }
    }
}
