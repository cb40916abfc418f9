use crate::{
    cancel::{Canceled, CancellationToken},
    fault::Fault,
};
use std::future::Future;

/// Outcome of asynchronous work: a value, a cooperative cancellation, or a
/// fault.
///
/// Cancellation is data here, not an interrupt. Once a chain holds
/// `Canceled`, every later `attach`, `run` or `combine` short-circuits without
/// consulting any token again.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncOutcome<T = ()> {
    Value(T),
    Canceled,
    Fault(Fault),
}

outcome_family!(AsyncOutcome, [From<Fault> + From<Canceled>]);
cancel_aware!(AsyncOutcome, [From<Fault> + From<Canceled>]);
arity_helpers!(AsyncOutcome);

impl<T> AsyncOutcome<T> {
    /// Classifies an error caught at a boundary: a `Canceled` error becomes the
    /// Canceled variant, anything else a fault.
    pub fn from_error(error: anyhow::Error) -> Self {
        if error.is::<Canceled>() {
            AsyncOutcome::Canceled
        } else {
            AsyncOutcome::Fault(Fault::from(error))
        }
    }

    fn split<O>(self) -> Result<T, O>
    where
        O: From<Fault> + From<Canceled>,
    {
        match self {
            AsyncOutcome::Value(value) => Ok(value),
            AsyncOutcome::Canceled => Err(O::from(Canceled)),
            AsyncOutcome::Fault(fault) => Err(O::from(fault)),
        }
    }

    /// Merges two independent outcomes into a pair, ranking
    /// Fault > Canceled > Value.
    pub fn combine<U>(self, other: AsyncOutcome<U>) -> AsyncOutcome<(T, U)> {
        match (self, other) {
            (AsyncOutcome::Fault(a), AsyncOutcome::Fault(b)) => {
                AsyncOutcome::Fault(Fault::aggregate(a, b))
            }
            (AsyncOutcome::Fault(fault), _) | (_, AsyncOutcome::Fault(fault)) => {
                AsyncOutcome::Fault(fault)
            }
            (AsyncOutcome::Canceled, _) | (_, AsyncOutcome::Canceled) => AsyncOutcome::Canceled,
            (AsyncOutcome::Value(a), AsyncOutcome::Value(b)) => AsyncOutcome::Value((a, b)),
        }
    }

    pub fn fold<R, V, C, F>(self, on_value: V, on_canceled: C, on_fault: F) -> R
    where
        V: FnOnce(T) -> R,
        C: FnOnce() -> R,
        F: FnOnce(Fault) -> R,
    {
        match self {
            AsyncOutcome::Value(value) => on_value(value),
            AsyncOutcome::Canceled => on_canceled(),
            AsyncOutcome::Fault(fault) => on_fault(fault),
        }
    }

    /// Asynchronous `fold`. Dispatch happens before any suspension; only the
    /// chosen handler's future is awaited.
    pub async fn fold_async<R, V, VF, C, CF, F, FF>(
        self,
        on_value: V,
        on_canceled: C,
        on_fault: F,
    ) -> R
    where
        V: FnOnce(T) -> VF,
        VF: Future<Output = R>,
        C: FnOnce() -> CF,
        CF: Future<Output = R>,
        F: FnOnce(Fault) -> FF,
        FF: Future<Output = R>,
    {
        match self {
            AsyncOutcome::Value(value) => on_value(value).await,
            AsyncOutcome::Canceled => on_canceled().await,
            AsyncOutcome::Fault(fault) => on_fault(fault).await,
        }
    }

    /// `fold_async` whose handlers receive the caller's token, so they can
    /// start further cooperative work under it.
    pub async fn fold_async_with_token<R, V, VF, C, CF, F, FF>(
        self,
        token: &CancellationToken,
        on_value: V,
        on_canceled: C,
        on_fault: F,
    ) -> R
    where
        V: FnOnce(T, CancellationToken) -> VF,
        VF: Future<Output = R>,
        C: FnOnce(CancellationToken) -> CF,
        CF: Future<Output = R>,
        F: FnOnce(Fault, CancellationToken) -> FF,
        FF: Future<Output = R>,
    {
        let token = token.clone();
        match self {
            AsyncOutcome::Value(value) => on_value(value, token).await,
            AsyncOutcome::Canceled => on_canceled(token).await,
            AsyncOutcome::Fault(fault) => on_fault(fault, token).await,
        }
    }

    /// Materializes the outcome at a boundary; cancellation surfaces as a
    /// `Canceled` error.
    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            AsyncOutcome::Value(value) => Ok(value),
            AsyncOutcome::Canceled => Err(anyhow::Error::new(Canceled)),
            AsyncOutcome::Fault(fault) => Err(fault.into_error()),
        }
    }
}
