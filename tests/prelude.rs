use outcomes::prelude::*;

#[test]
fn prelude_covers_a_full_chain() {
    let _ = env_logger::builder().is_test(true).try_init();

    let token = CancellationToken::new();
    let outcome = Outcome::from_value(2)
        .into_async_rich()
        .attach("pair")
        .run_with_token(&token, |(n, tag), token| match token.check() {
            Ok(()) => AsyncRichOutcome::from_value(format!("{}-{}", tag, n)),
            Err(canceled) => canceled.into(),
        });

    assert_eq!(outcome, AsyncRichOutcome::Value("pair-2".to_string()));

    token.cancel();
    let outcome: AsyncOutcome<()> = token.check().into();
    assert!(outcome.fold(|_| false, || true, |_| false));
}
