use log::{debug, warn};
use std::{
    any::Any,
    fmt::{self, Debug, Display},
    sync::{Arc, OnceLock},
};
use thiserror::Error;

/// Process-wide sentinel faults.
///
/// Both variants are materialized once, on first use, and every call site
/// receives a handle to the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unexpected {
    /// Generic abort, used when no better fault is known.
    #[error("the operation aborted unexpectedly")]
    Error,

    /// An outcome reached a state it cannot represent, e.g. a default
    /// instance that was never constructed from a real result.
    #[error("reached an outcome state that cannot be represented")]
    Impossible,
}

/// Raised in place of a missing value or a missing fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("argument `{0}` cannot be null")]
pub struct ArgumentNull(pub &'static str);

/// Both sides of a merge faulted; keeps every fault that took part.
#[derive(Debug)]
pub struct AggregateFault {
    faults: Vec<Fault>,
}

impl AggregateFault {
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }
}

impl Display for AggregateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one or more faults occurred:")?;
        for (i, fault) in self.faults.iter().enumerate() {
            write!(f, " ({}) {}", i, fault)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateFault {}

/// A panic captured by `catch_unwind` on any outcome family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation panicked: {message}")]
pub struct Panicked {
    pub message: String,
}

static ERROR: OnceLock<Fault> = OnceLock::new();
static IMPOSSIBLE: OnceLock<Fault> = OnceLock::new();

/// Unexpected failure payload carried by every outcome family.
///
/// A `Fault` is a cheap, shareable handle: clones point to the same underlying
/// error, and equality is identity. Wrapping an error that already is a
/// `Fault` returns the original handle instead of nesting it.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<anyhow::Error>,
}

impl Fault {
    /// Wraps any error into a fault.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let error: anyhow::Error = error.into();
        Self::from(error)
    }

    /// Creates a fault out of a plain message.
    pub fn msg<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self::from(anyhow::Error::msg(message))
    }

    /// Shared generic abort sentinel.
    pub fn error() -> Self {
        ERROR
            .get_or_init(|| Self::new(Unexpected::Error))
            .clone()
    }

    /// Shared sentinel for unrepresentable outcome states.
    pub fn impossible() -> Self {
        IMPOSSIBLE
            .get_or_init(|| Self::new(Unexpected::Impossible))
            .clone()
    }

    pub fn argument_null(name: &'static str) -> Self {
        Self::new(ArgumentNull(name))
    }

    /// Merges two faults into a single one referencing both.
    pub fn aggregate(first: Fault, second: Fault) -> Self {
        debug!(
            "Fault::aggregate - merging faults: '{}' and '{}'",
            first, second
        );
        Self::new(AggregateFault {
            faults: vec![first, second],
        })
    }

    /// Builds the fault for a panic payload caught by `catch_unwind`.
    pub(crate) fn panicked(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => String::from("unknown panic payload"),
            },
        };
        warn!("Fault::panicked - captured panic: {}", message);
        Self::new(Panicked { message })
    }

    /// Returns the faults an aggregate was built from, or `self` alone.
    pub fn faults(&self) -> Vec<Fault> {
        match self.downcast_ref::<AggregateFault>() {
            Some(aggregate) => aggregate.faults().to_vec(),
            None => vec![self.clone()],
        }
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.inner.is::<E>()
    }

    pub fn is_impossible(&self) -> bool {
        self.downcast_ref::<Unexpected>() == Some(&Unexpected::Impossible)
    }

    pub fn is_error(&self) -> bool {
        self.downcast_ref::<Unexpected>() == Some(&Unexpected::Error)
    }

    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Turns the fault back into an `anyhow::Error` at a boundary.
    ///
    /// The returned error wraps this handle, so converting it into an outcome
    /// again yields the very same fault.
    pub fn into_error(self) -> anyhow::Error {
        anyhow::Error::new(self)
    }
}

/// Unwraps faults that went through `into_error` so identity survives
/// a round trip through `anyhow`.
impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Fault>() {
            Ok(fault) => fault,
            Err(error) => Self {
                inner: Arc::new(error),
            },
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Fault {}

impl Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fault").field(&self.message()).finish()
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner, f)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_shared() {
        assert_eq!(Fault::error(), Fault::error());
        assert_eq!(Fault::impossible(), Fault::impossible());
        assert_ne!(Fault::error(), Fault::impossible());

        assert!(Fault::impossible().is_impossible());
        assert!(!Fault::impossible().is_error());
        assert!(Fault::error().is_error());
    }

    #[test]
    fn equality_is_identity() {
        let a = Fault::msg("boom");
        let b = Fault::msg("boom");

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn round_trip_through_anyhow_keeps_identity() {
        let fault = Fault::impossible();
        let back = Fault::from(fault.clone().into_error());

        assert_eq!(fault, back);
        assert!(back.is_impossible());
    }

    #[test]
    fn aggregate_references_both() {
        let first = Fault::msg("first");
        let second = Fault::msg("second");
        let merged = Fault::aggregate(first.clone(), second.clone());

        assert_eq!(merged.faults(), vec![first, second]);
        assert!(merged.message().contains("first"));
        assert!(merged.message().contains("second"));
    }

    #[test]
    fn single_fault_lists_itself() {
        let fault = Fault::new(ArgumentNull("value"));

        assert_eq!(fault.faults(), vec![fault.clone()]);
        assert_eq!(
            fault.downcast_ref::<ArgumentNull>(),
            Some(&ArgumentNull("value"))
        );
        assert_eq!(fault.message(), "argument `value` cannot be null");
    }
}
