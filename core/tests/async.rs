use futures_executor::block_on;
use outcomes_core::{
    testing::{poll_once, CallProbe},
    AsyncOutcome, AsyncRichOutcome, CancellationToken, Failure, Fault, Outcome, RichOutcome,
};
use std::task::Poll;


/// Stand-in for work driven by an external runtime.
async fn fetch(id: u32, token: CancellationToken) -> AsyncRichOutcome<String> {
    if token.is_canceled() {
        return AsyncRichOutcome::canceled();
    }
    match id {
        0 => Failure::new("unknown id").into(),
        id => AsyncRichOutcome::from_value(format!("item-{}", id)),
    }
}

#[test]
fn run_async_chain_with_token() {
    tools::init_logging();
    let token = CancellationToken::new();

    let outcome = block_on(AsyncRichOutcome::from_value(7u32).run_async_with_token(&token, fetch));
    assert_eq!(outcome, AsyncRichOutcome::Value("item-7".to_string()));

    let outcome = block_on(AsyncRichOutcome::from_value(0u32).run_async_with_token(&token, fetch));
    assert_eq!(outcome.failure().map(Failure::message), Some("unknown id"));

    token.cancel();
    let outcome = block_on(AsyncRichOutcome::from_value(7u32).run_async_with_token(&token, fetch));
    assert!(outcome.is_canceled());
}

#[test]
fn terminal_receivers_never_suspend() {
    let probe = CallProbe::new();
    let token = CancellationToken::new();

    let mut fault = Box::pin(AsyncRichOutcome::<u32>::error().run_async(|id| {
        probe.hit();
        fetch(id, CancellationToken::new())
    }));
    let mut failed = Box::pin(RichOutcome::<u32>::failed().run_async(|id| {
        probe.hit();
        fetch(id, CancellationToken::new())
    }));
    let mut canceled = Box::pin(AsyncOutcome::<u32>::canceled().run_async_with_token(
        &token,
        |id, token| {
            probe.hit();
            fetch(id, token)
        },
    ));

    assert_eq!(poll_once(&mut fault), Poll::Ready(AsyncRichOutcome::error()));
    assert_eq!(
        poll_once(&mut failed),
        Poll::Ready(AsyncRichOutcome::Failure(Failure::generic()))
    );
    assert_eq!(poll_once(&mut canceled), Poll::Ready(AsyncRichOutcome::Canceled));
    assert_eq!(probe.count(), 0);
}

#[test]
fn sync_outcome_binds_into_async_family() {
    let outcome: AsyncOutcome<u32> = block_on(
        Outcome::from_value(2u32).run_async(|v| async move { AsyncOutcome::from_value(v * 3) }),
    );

    assert_eq!(outcome, AsyncOutcome::Value(6));
}

#[test]
fn fold_async_for_each_family() {
    let plain = block_on(Outcome::<u8>::impossible().fold_async(
        |_| async { "value" },
        |fault| async move {
            if fault.is_impossible() {
                "impossible"
            } else {
                "fault"
            }
        },
    ));
    assert_eq!(plain, "impossible");

    let rich = block_on(RichOutcome::from_value(1).fold_async(
        |v| async move { v + 1 },
        |_| async { 0 },
        |_| async { -1 },
    ));
    assert_eq!(rich, 2);

    let cancel = block_on(AsyncOutcome::<u8>::canceled().fold_async(
        |_| async { "value" },
        || async { "canceled" },
        |_| async { "fault" },
    ));
    assert_eq!(cancel, "canceled");

    let token = CancellationToken::new();
    let lost = AsyncRichOutcome::<u8>::from_fault(Fault::msg("lost"));
    let message = block_on(lost.fold_async_with_token(
        &token,
        |_, _| async { String::new() },
        |_| async { String::new() },
        |_, _| async { String::new() },
        |fault, token| async move { format!("{} (canceled: {})", fault, token.is_canceled()) },
    ));
    assert_eq!(message, "lost (canceled: false)");
}

#[test]
fn narrowing_then_folding_keeps_message() {
    let outcome =
        AsyncRichOutcome::<()>::from_failure(Failure::new("declined")).into_async_outcome();

    let message = outcome.fold(|_| String::new(), String::new, |fault| fault.message());
    assert_eq!(message, "declined");
}
