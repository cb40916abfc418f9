use crate::{
    cancel::{Canceled, CancellationToken},
    failure::Failure,
    fault::Fault,
};
use std::future::Future;

/// The union of every terminal state: value, cooperative cancellation,
/// business failure, or fault.
///
/// Merging ranks them Fault > Failure > Canceled > Value.
///
/// ```
/// use outcomes_core::{AsyncRichOutcome, Failure};
///
/// let merged = AsyncRichOutcome::<()>::canceled()
///     .merge(AsyncRichOutcome::from_failure(Failure::new("declined")));
///
/// assert!(merged.is_failure());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncRichOutcome<T = ()> {
    Value(T),
    Canceled,
    Failure(Failure),
    Fault(Fault),
}

outcome_family!(
    AsyncRichOutcome,
    [From<Fault> + From<Failure> + From<Canceled>]
);
cancel_aware!(
    AsyncRichOutcome,
    [From<Fault> + From<Failure> + From<Canceled>]
);
failure_aware!(AsyncRichOutcome);
arity_helpers!(AsyncRichOutcome);

impl<T> AsyncRichOutcome<T> {
    pub fn from_error(error: anyhow::Error) -> Self {
        if error.is::<Canceled>() {
            AsyncRichOutcome::Canceled
        } else {
            AsyncRichOutcome::Fault(Fault::from(error))
        }
    }

    fn split<O>(self) -> Result<T, O>
    where
        O: From<Fault> + From<Failure> + From<Canceled>,
    {
        match self {
            AsyncRichOutcome::Value(value) => Ok(value),
            AsyncRichOutcome::Canceled => Err(O::from(Canceled)),
            AsyncRichOutcome::Failure(failure) => Err(O::from(failure)),
            AsyncRichOutcome::Fault(fault) => Err(O::from(fault)),
        }
    }

    pub fn combine<U>(self, other: AsyncRichOutcome<U>) -> AsyncRichOutcome<(T, U)> {
        match (self, other) {
            (AsyncRichOutcome::Fault(a), AsyncRichOutcome::Fault(b)) => {
                AsyncRichOutcome::Fault(Fault::aggregate(a, b))
            }
            (AsyncRichOutcome::Fault(fault), _) | (_, AsyncRichOutcome::Fault(fault)) => {
                AsyncRichOutcome::Fault(fault)
            }
            (AsyncRichOutcome::Failure(a), AsyncRichOutcome::Failure(b)) => {
                AsyncRichOutcome::Failure(a.combine(&b))
            }
            (AsyncRichOutcome::Failure(failure), _) | (_, AsyncRichOutcome::Failure(failure)) => {
                AsyncRichOutcome::Failure(failure)
            }
            (AsyncRichOutcome::Canceled, _) | (_, AsyncRichOutcome::Canceled) => {
                AsyncRichOutcome::Canceled
            }
            (AsyncRichOutcome::Value(a), AsyncRichOutcome::Value(b)) => {
                AsyncRichOutcome::Value((a, b))
            }
        }
    }

    pub fn fold<R, V, C, L, F>(self, on_value: V, on_canceled: C, on_failure: L, on_fault: F) -> R
    where
        V: FnOnce(T) -> R,
        C: FnOnce() -> R,
        L: FnOnce(Failure) -> R,
        F: FnOnce(Fault) -> R,
    {
        match self {
            AsyncRichOutcome::Value(value) => on_value(value),
            AsyncRichOutcome::Canceled => on_canceled(),
            AsyncRichOutcome::Failure(failure) => on_failure(failure),
            AsyncRichOutcome::Fault(fault) => on_fault(fault),
        }
    }

    pub async fn fold_async<R, V, VF, C, CF, L, LF, F, FF>(
        self,
        on_value: V,
        on_canceled: C,
        on_failure: L,
        on_fault: F,
    ) -> R
    where
        V: FnOnce(T) -> VF,
        VF: Future<Output = R>,
        C: FnOnce() -> CF,
        CF: Future<Output = R>,
        L: FnOnce(Failure) -> LF,
        LF: Future<Output = R>,
        F: FnOnce(Fault) -> FF,
        FF: Future<Output = R>,
    {
        match self {
            AsyncRichOutcome::Value(value) => on_value(value).await,
            AsyncRichOutcome::Canceled => on_canceled().await,
            AsyncRichOutcome::Failure(failure) => on_failure(failure).await,
            AsyncRichOutcome::Fault(fault) => on_fault(fault).await,
        }
    }

    pub async fn fold_async_with_token<R, V, VF, C, CF, L, LF, F, FF>(
        self,
        token: &CancellationToken,
        on_value: V,
        on_canceled: C,
        on_failure: L,
        on_fault: F,
    ) -> R
    where
        V: FnOnce(T, CancellationToken) -> VF,
        VF: Future<Output = R>,
        C: FnOnce(CancellationToken) -> CF,
        CF: Future<Output = R>,
        L: FnOnce(Failure, CancellationToken) -> LF,
        LF: Future<Output = R>,
        F: FnOnce(Fault, CancellationToken) -> FF,
        FF: Future<Output = R>,
    {
        let token = token.clone();
        match self {
            AsyncRichOutcome::Value(value) => on_value(value, token).await,
            AsyncRichOutcome::Canceled => on_canceled(token).await,
            AsyncRichOutcome::Failure(failure) => on_failure(failure, token).await,
            AsyncRichOutcome::Fault(fault) => on_fault(fault, token).await,
        }
    }

    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            AsyncRichOutcome::Value(value) => Ok(value),
            AsyncRichOutcome::Canceled => Err(anyhow::Error::new(Canceled)),
            AsyncRichOutcome::Failure(failure) => Err(failure.as_fault().into_error()),
            AsyncRichOutcome::Fault(fault) => Err(fault.into_error()),
        }
    }
}
