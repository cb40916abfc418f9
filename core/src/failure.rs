use crate::fault::Fault;
use log::{debug, trace};
use std::{
    fmt::{self, Debug, Display},
    sync::{Arc, OnceLock},
};
use thiserror::Error;

/// Error type a `Failure` turns into when a caller asks for its fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FailureError {
    pub message: String,
}

static GENERIC: OnceLock<Failure> = OnceLock::new();

/// A recognized, expected rejection: "the request was understood and refused".
///
/// Holds a human-readable message. The fault representation is built only
/// when someone calls [`Failure::as_fault`], at most once per failure; clones
/// share both the message and that cache.
///
/// ```
/// use outcomes_core::Failure;
///
/// let failure = Failure::new("card declined");
/// assert!(!failure.is_materialized());
///
/// let fault = failure.as_fault();
/// assert_eq!(fault, failure.as_fault());
/// ```
#[derive(Clone)]
pub struct Failure {
    inner: Arc<FailureInner>,
}

struct FailureInner {
    message: String,
    fault: OnceLock<Fault>,
}

impl Failure {
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            inner: Arc::new(FailureInner {
                message: message.into(),
                fault: OnceLock::new(),
            }),
        }
    }

    /// Shared failure without any specific reason.
    pub fn generic() -> Self {
        GENERIC
            .get_or_init(|| Self::new("the operation failed"))
            .clone()
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Returns the fault form of this failure, building it on first call.
    pub fn as_fault(&self) -> Fault {
        self.inner
            .fault
            .get_or_init(|| {
                trace!(
                    "Failure::as_fault - materializing fault for '{}'",
                    self.inner.message
                );
                Fault::new(FailureError {
                    message: self.inner.message.clone(),
                })
            })
            .clone()
    }

    /// Whether `as_fault` has been called on this failure (or a clone of it).
    pub fn is_materialized(&self) -> bool {
        self.inner.fault.get().is_some()
    }

    /// Joins two failures into one; messages are concatenated with "and".
    pub fn combine(&self, other: &Failure) -> Failure {
        debug!(
            "Failure::combine - joining failures: '{}' and '{}'",
            self.message(),
            other.message()
        );
        Failure::new(format!("{} and {}", self.message(), other.message()))
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.message() == other.message()
    }
}

impl Eq for Failure {}

impl Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.message()).finish()
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_is_built_lazily_and_once() {
        let failure = Failure::new("out of stock");
        assert!(!failure.is_materialized());

        let clone = failure.clone();
        let first = failure.as_fault();
        assert!(clone.is_materialized());

        let second = clone.as_fault();
        assert_eq!(first, second);
        assert_eq!(
            first.downcast_ref::<FailureError>(),
            Some(&FailureError {
                message: "out of stock".into()
            })
        );
    }

    #[test]
    fn combine_joins_messages() {
        let combined = Failure::new("a").combine(&Failure::new("b"));

        assert_eq!(combined.message(), "a and b");
        assert!(!combined.is_materialized());
    }

    #[test]
    fn generic_is_shared() {
        let a = Failure::generic();
        let b = Failure::generic();

        a.as_fault();
        assert!(b.is_materialized());
        assert_eq!(a.message(), "the operation failed");
    }
}
