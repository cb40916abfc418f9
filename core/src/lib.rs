//! Outcome values for composing operations without panicking or juggling
//! ad-hoc flags.
//!
//! Four families describe how an operation terminated:
//!
//! | Family | Variants |
//! |---|---|
//! | [`Outcome`] | Value, Fault |
//! | [`RichOutcome`] | Value, Failure, Fault |
//! | [`AsyncOutcome`] | Value, Canceled, Fault |
//! | [`AsyncRichOutcome`] | Value, Canceled, Failure, Fault |
//!
//! Every family offers the same combinators: `attach` (zip), `combine`
//! (merge), `run` (bind) and `fold` (the total match), plus their async
//! forms. When two outcomes are merged the worse one wins, ranked
//! Fault > Failure > Canceled > Value.
//!
//! ```
//! use outcomes_core::{Failure, RichOutcome};
//!
//! fn reserve(qty: u32) -> RichOutcome<u32> {
//!     if qty > 10 {
//!         Failure::new("not enough stock").into()
//!     } else {
//!         RichOutcome::from_value(qty)
//!     }
//! }
//!
//! let message = reserve(3)
//!     .attach_with(|qty| reserve(*qty + 1))
//!     .fold(
//!         |(a, b)| format!("reserved {} and {}", a, b),
//!         |failure| failure.to_string(),
//!         |fault| fault.to_string(),
//!     );
//!
//! assert_eq!(message, "reserved 3 and 4");
//! ```

#[macro_use]
mod family;

pub mod async_outcome;
pub mod async_rich;
pub mod cancel;
mod convert;
pub mod failure;
pub mod fault;
pub mod outcome;
pub mod rich;
pub mod testing;

pub use async_outcome::AsyncOutcome;
pub use async_rich::AsyncRichOutcome;
pub use cancel::{Canceled, CancellationToken};
pub use failure::{Failure, FailureError};
pub use fault::{AggregateFault, ArgumentNull, Fault, Panicked, Unexpected};
pub use outcome::Outcome;
pub use rich::RichOutcome;

pub use outcomes_macros::IntoFailure;
