use futures_executor::block_on;
use log::info;
use outcomes_core::{
    AsyncRichOutcome, CancellationToken, Failure, IntoFailure, RichOutcome,
};
use std::fmt;

#[derive(Debug, IntoFailure)]
enum Rejection {
    OutOfStock(&'static str),
    Declined,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OutOfStock(item) => write!(f, "{} is out of stock", item),
            Rejection::Declined => f.write_str("payment declined"),
        }
    }
}

fn reserve(item: &'static str) -> RichOutcome<u32> {
    match item {
        "socks" => RichOutcome::from_value(5),
        "hat" => RichOutcome::from_value(20),
        other => Failure::from(Rejection::OutOfStock(other)).into(),
    }
}

async fn charge(amount: u32, token: CancellationToken) -> AsyncRichOutcome<String> {
    if let Err(canceled) = token.check() {
        return canceled.into();
    }
    if amount > 50 {
        return Failure::from(Rejection::Declined).into();
    }
    AsyncRichOutcome::from_value(format!("receipt for {}", amount))
}

async fn checkout(items: &[&'static str], token: &CancellationToken) -> String {
    let total = items
        .iter()
        .map(|item| reserve(*item))
        .fold(RichOutcome::from_value(0), |acc, next| {
            acc.combine(next).map(|(a, b)| a + b)
        });

    total
        .into_async_rich()
        .run_async_with_token(token, charge)
        .await
        .fold(
            |receipt| receipt,
            || String::from("checkout canceled"),
            |failure| format!("rejected: {}", failure),
            |fault| format!("fault: {}", fault),
        )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let token = CancellationToken::new();

    info!("{}", block_on(checkout(&["socks", "hat"], &token)));
    info!("{}", block_on(checkout(&["socks", "scarf", "gloves"], &token)));
    info!("{}", block_on(checkout(&["hat", "hat", "hat"], &token)));

    token.cancel();
    info!("{}", block_on(checkout(&["socks"], &token)));

    Ok(())
}
