use crate::fault::Fault;
use std::future::Future;

/// Two-variant outcome: the operation either produced its value or faulted.
///
/// The payload is `()` for the void form, a single `T`, or a tuple for the
/// pair form. Build it with the constructors or `From` conversions, chain it
/// with `attach`, `combine` and `run`, and finish the chain with `fold`.
///
/// ```
/// use outcomes_core::Outcome;
///
/// let total = Outcome::from_value(5)
///     .attach("ok")
///     .fold(|(n, tag)| format!("{}:{}", n, tag), |fault| fault.message());
///
/// assert_eq!(total, "5:ok");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T = ()> {
    Value(T),
    Fault(Fault),
}

outcome_family!(Outcome, [From<Fault>]);
arity_helpers!(Outcome);

impl<T> Outcome<T> {
    /// Classifies an error caught at a boundary. A wrapped `Fault` keeps its
    /// identity.
    pub fn from_error(error: anyhow::Error) -> Self {
        Outcome::Fault(Fault::from(error))
    }

    fn split<O>(self) -> Result<T, O>
    where
        O: From<Fault>,
    {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Fault(fault) => Err(O::from(fault)),
        }
    }

    /// Merges two independent outcomes into a pair.
    ///
    /// Two faults aggregate into one; a single fault wins outright.
    pub fn combine<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Outcome::Value(a), Outcome::Value(b)) => Outcome::Value((a, b)),
            (Outcome::Fault(a), Outcome::Fault(b)) => Outcome::Fault(Fault::aggregate(a, b)),
            (Outcome::Fault(fault), _) | (_, Outcome::Fault(fault)) => Outcome::Fault(fault),
        }
    }

    /// Consumes the outcome, calling exactly one handler.
    pub fn fold<R, V, F>(self, on_value: V, on_fault: F) -> R
    where
        V: FnOnce(T) -> R,
        F: FnOnce(Fault) -> R,
    {
        match self {
            Outcome::Value(value) => on_value(value),
            Outcome::Fault(fault) => on_fault(fault),
        }
    }

    /// Asynchronous `fold`; suspends only inside the chosen handler.
    pub async fn fold_async<R, V, VF, F, FF>(self, on_value: V, on_fault: F) -> R
    where
        V: FnOnce(T) -> VF,
        VF: Future<Output = R>,
        F: FnOnce(Fault) -> FF,
        FF: Future<Output = R>,
    {
        match self {
            Outcome::Value(value) => on_value(value).await,
            Outcome::Fault(fault) => on_fault(fault).await,
        }
    }

    /// Materializes the outcome at a boundary.
    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Fault(fault) => Err(fault.into_error()),
        }
    }
}
