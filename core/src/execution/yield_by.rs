use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::consumer::Consumer;

/// Drives a consumer, returning `Pending` after every `step` pulls so other
/// tasks on the same executor get a turn.
#[must_use = "futures do nothing unless polled"]
pub struct YieldBy<C: Consumer> {
    pub(crate) consumer: C,
    pub(crate) n: usize,
    pub(crate) step: usize,
}

impl<C> Unpin for YieldBy<C> where C: Consumer + Unpin {}

impl<C: Consumer + Unpin> Future for YieldBy<C> {
    type Output = C::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            if self.n == self.step {
                self.n = 0;
                tracing::trace!(step = self.step, "yielding to executor");
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
            if let Some(ret) = Pin::new(&mut self.consumer).consume() {
                return Poll::Ready(ret);
            }
            self.n += 1;
        }
    }
}
