//! Helpers for exercising outcome chains in tests.
use std::{
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    task::{Context, Poll, Wake, Waker},
};

/// Counts how many times a continuation fired.
///
/// Clones share the counter, so a probe can be moved into a closure and
/// checked afterwards.
///
/// ```
/// use outcomes_core::{testing::CallProbe, Outcome};
///
/// let probe = CallProbe::new();
/// let _ = Outcome::<i32>::error().run(|v| {
///     probe.hit();
///     Outcome::from_value(v)
/// });
/// assert_eq!(probe.count(), 0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct CallProbe {
    hits: Arc<AtomicUsize>,
}

impl CallProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
    fn wake_by_ref(self: &Arc<Self>) {}
}

fn noop_waker() -> Waker {
    Arc::new(NoopWaker).into()
}

/// Polls a future exactly once with a waker that does nothing.
///
/// `Poll::Ready` on the first poll means the future never yielded to a
/// scheduler.
pub fn poll_once<F>(fut: &mut F) -> Poll<F::Output>
where
    F: Future + Unpin,
{
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    Pin::new(fut).poll(&mut cx)
}
