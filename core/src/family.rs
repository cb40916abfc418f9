//! Surface shared by every outcome family.
//!
//! Each family module defines its enum plus the handful of operations whose
//! shape depends on the variants it carries (`split`, `combine`, `fold`,
//! `from_error`). Everything expressible on top of those is generated here,
//! once per family.

/// Constructors, predicates, conversions and the value-side combinators
/// (`map`, `attach`, `attach_with`, `run`, `run_async`).
///
/// The bracketed bounds list what a target outcome must absorb for `run` to
/// propagate every non-Value variant of the receiver.
macro_rules! outcome_family {
    ($name:ident, [$($bound:tt)+]) => {
        impl<T> $name<T> {
            /// Wraps a successful value.
            pub fn from_value(value: T) -> Self {
                $name::Value(value)
            }

            pub fn from_fault(fault: $crate::fault::Fault) -> Self {
                $name::Fault(fault)
            }

            /// Guards against treating "no value" as success: `None` turns into
            /// an `ArgumentNull` fault instead of a Value.
            pub fn from_nullable(value: Option<T>) -> Self {
                match value {
                    Some(value) => $name::Value(value),
                    None => $name::Fault($crate::fault::Fault::argument_null("value")),
                }
            }

            /// Same guard for the fault side: a missing error is itself reported
            /// as an `ArgumentNull` fault.
            pub fn from_nullable_fault<E>(error: Option<E>) -> Self
            where
                E: Into<anyhow::Error>,
            {
                match error {
                    Some(error) => Self::from_error(error.into()),
                    None => $name::Fault($crate::fault::Fault::argument_null("fault")),
                }
            }

            /// Fault carrying the shared generic abort sentinel.
            pub fn error() -> Self {
                $name::Fault($crate::fault::Fault::error())
            }

            /// Fault carrying the shared unrepresentable-state sentinel.
            pub fn impossible() -> Self {
                $name::Fault($crate::fault::Fault::impossible())
            }

            /// Runs `f`, turning a panic into a fault.
            pub fn catch_unwind<F>(f: F) -> Self
            where
                F: FnOnce() -> T + std::panic::UnwindSafe,
            {
                match std::panic::catch_unwind(f) {
                    Ok(value) => $name::Value(value),
                    Err(payload) => $name::Fault($crate::fault::Fault::panicked(payload)),
                }
            }

            pub fn is_success(&self) -> bool {
                matches!(self, $name::Value(_))
            }

            /// True only for the Fault variant (sentinels included).
            pub fn is_fault(&self) -> bool {
                matches!(self, $name::Fault(_))
            }

            pub fn value(&self) -> Option<&T> {
                match self {
                    $name::Value(value) => Some(value),
                    _ => None,
                }
            }

            pub fn into_value(self) -> Option<T> {
                match self {
                    $name::Value(value) => Some(value),
                    _ => None,
                }
            }

            pub fn fault(&self) -> Option<&$crate::fault::Fault> {
                match self {
                    $name::Fault(fault) => Some(fault),
                    _ => None,
                }
            }

            /// Transforms the value, leaving every other variant as it is.
            pub fn map<U, F>(self, f: F) -> $name<U>
            where
                F: FnOnce(T) -> U,
            {
                match self.split::<$name<U>>() {
                    Ok(value) => $name::Value(f(value)),
                    Err(propagated) => propagated,
                }
            }

            /// Pairs the current value with `value`.
            pub fn attach<U>(self, value: U) -> $name<(T, U)> {
                self.map(|current| (current, value))
            }

            /// Invokes `f` on the current value and combines both outcomes.
            ///
            /// `f` is never called when the receiver is not a Value.
            pub fn attach_with<U, F>(self, f: F) -> $name<(T, U)>
            where
                F: FnOnce(&T) -> $name<U>,
            {
                match self.split::<$name<(T, U)>>() {
                    Ok(current) => {
                        let other = f(&current);
                        $name::Value(current).combine(other)
                    }
                    Err(propagated) => propagated,
                }
            }

            /// Binds the value into a continuation producing another outcome.
            ///
            /// The target may be any family able to carry this family's
            /// non-Value variants. On a non-Value receiver `f` is skipped and
            /// the variant is re-wrapped into the target type.
            pub fn run<O, F>(self, f: F) -> O
            where
                F: FnOnce(T) -> O,
                O: $($bound)+,
            {
                match self.split::<O>() {
                    Ok(value) => f(value),
                    Err(propagated) => propagated,
                }
            }

            /// Asynchronous `run`: the continuation's future is the only
            /// suspension point. A non-Value receiver resolves on first poll
            /// without calling `f`.
            pub async fn run_async<O, Fut, F>(self, f: F) -> O
            where
                F: FnOnce(T) -> Fut,
                Fut: std::future::Future<Output = O>,
                O: $($bound)+,
            {
                match self.split::<O>() {
                    Ok(value) => f(value).await,
                    Err(propagated) => propagated,
                }
            }
        }

        /// An outcome nobody constructed is the Impossible fault.
        impl<T> Default for $name<T> {
            fn default() -> Self {
                log::warn!(
                    "{}::default - outcome used without construction, treating it as impossible",
                    stringify!($name)
                );
                Self::impossible()
            }
        }

        impl<T> From<$crate::fault::Fault> for $name<T> {
            fn from(fault: $crate::fault::Fault) -> Self {
                $name::Fault(fault)
            }
        }

        impl<T> From<anyhow::Error> for $name<T> {
            fn from(error: anyhow::Error) -> Self {
                Self::from_error(error)
            }
        }

        impl<T, E> From<Result<T, E>> for $name<T>
        where
            E: Into<anyhow::Error>,
        {
            fn from(result: Result<T, E>) -> Self {
                match result {
                    Ok(value) => $name::Value(value),
                    Err(error) => Self::from_error(error.into()),
                }
            }
        }
    };
}

/// Token-forwarding variants of `run` for the async families.
macro_rules! cancel_aware {
    ($name:ident, [$($bound:tt)+]) => {
        impl<T> $name<T> {
            /// `run` whose continuation also receives the caller's token.
            pub fn run_with_token<O, F>(self, token: &$crate::cancel::CancellationToken, f: F) -> O
            where
                F: FnOnce(T, &$crate::cancel::CancellationToken) -> O,
                O: $($bound)+,
            {
                match self.split::<O>() {
                    Ok(value) => f(value, token),
                    Err(propagated) => propagated,
                }
            }

            /// `run_async` whose continuation also receives the caller's token.
            pub async fn run_async_with_token<O, Fut, F>(
                self,
                token: &$crate::cancel::CancellationToken,
                f: F,
            ) -> O
            where
                F: FnOnce(T, $crate::cancel::CancellationToken) -> Fut,
                Fut: std::future::Future<Output = O>,
                O: $($bound)+,
            {
                match self.split::<O>() {
                    Ok(value) => f(value, token.clone()).await,
                    Err(propagated) => propagated,
                }
            }

            /// Outcome of the canceled variant.
            pub fn canceled() -> Self {
                $name::Canceled
            }

            pub fn from_cancellation() -> Self {
                $name::Canceled
            }

            pub fn is_canceled(&self) -> bool {
                matches!(self, $name::Canceled)
            }
        }

        impl<T> From<$crate::cancel::Canceled> for $name<T> {
            fn from(_: $crate::cancel::Canceled) -> Self {
                $name::Canceled
            }
        }
    };
}

/// Accessors of the business-failure channel for the rich families.
macro_rules! failure_aware {
    ($name:ident) => {
        impl<T> $name<T> {
            pub fn from_failure(failure: $crate::failure::Failure) -> Self {
                $name::Failure(failure)
            }

            /// Outcome carrying the shared generic failure.
            pub fn failed() -> Self {
                $name::Failure($crate::failure::Failure::generic())
            }

            pub fn is_failure(&self) -> bool {
                matches!(self, $name::Failure(_))
            }

            pub fn failure(&self) -> Option<&$crate::failure::Failure> {
                match self {
                    $name::Failure(failure) => Some(failure),
                    _ => None,
                }
            }
        }

        impl<T> From<$crate::failure::Failure> for $name<T> {
            fn from(failure: $crate::failure::Failure) -> Self {
                $name::Failure(failure)
            }
        }
    };
}

/// Arity conveniences: void receivers and pair receivers.
macro_rules! arity_helpers {
    ($name:ident) => {
        impl $name<()> {
            pub fn success() -> Self {
                $name::Value(())
            }

            /// Attach on a void outcome: the value becomes the payload.
            pub fn with_value<U>(self, value: U) -> $name<U> {
                self.map(|()| value)
            }

            /// Attach a dependent outcome on a void outcome.
            pub fn with_outcome<U, F>(self, f: F) -> $name<U>
            where
                F: FnOnce() -> $name<U>,
            {
                self.attach_with(|_| f()).map(|((), value)| value)
            }

            /// Combine for void outcomes.
            pub fn merge(self, other: $name<()>) -> $name<()> {
                self.combine(other).map(|((), ())| ())
            }
        }

        impl<A, B> $name<(A, B)> {
            /// Attach on a pair outcome, producing a triple.
            pub fn attach_third<C>(self, value: C) -> $name<(A, B, C)> {
                self.attach(value).map(|((a, b), c)| (a, b, c))
            }

            pub fn attach_third_with<C, F>(self, f: F) -> $name<(A, B, C)>
            where
                F: FnOnce(&A, &B) -> $name<C>,
            {
                self.attach_with(|(a, b)| f(a, b))
                    .map(|((a, b), c)| (a, b, c))
            }
        }
    };
}
