//! Outcome values and their combinators.
//!
//! Everything lives in [`outcomes_core`]; this crate re-exports it and adds a
//! [`prelude`] for glob imports.
//!
//! ```
//! use outcomes::prelude::*;
//!
//! let merged = AsyncRichOutcome::from_value(1).combine(AsyncRichOutcome::<i32>::canceled());
//! assert!(merged.is_canceled());
//! ```
//!
//! `#[derive(IntoFailure)]` expands to paths under `outcomes_core`, so crates
//! using the derive depend on `outcomes-core` directly.

pub use outcomes_core::*;

pub mod prelude {
    pub use outcomes_core::{
        AsyncOutcome, AsyncRichOutcome, Canceled, CancellationToken, Failure, Fault, Outcome,
        RichOutcome,
    };
}
