use core::{
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::Stream;
use pin_project_lite::pin_project;

use super::Sequence;
use crate::step::Step;

pin_project! {
    /// A sequence seen as an always-ready [`Stream`] of pairs.
    #[must_use = "streams do nothing unless polled"]
    pub struct IntoStream<S> {
        #[pin]
        pub(super) seq: S,
    }
}

impl<S: Sequence> Stream for IntoStream<S> {
    type Item = (S::Key, S::Value);

    fn poll_next(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            match this.seq.as_mut().pull() {
                Step::Ready(pair) => return Poll::Ready(Some(pair)),
                Step::NotYet => continue,
                Step::Done => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use core::{future::poll_fn, pin::pin};

    use futures_core::Stream;

    use crate::prelude::*;

    #[test]
    fn drains_as_stream() {
        let stream = to_seq(vec![1, 2, 3, 4]).filter(|v| v % 2 == 0).into_stream();
        let mut stream = pin!(stream);
        let out = spin_on::spin_on(async {
            let mut out = Vec::new();
            while let Some(pair) = poll_fn(|cx| stream.as_mut().poll_next(cx)).await {
                out.push(pair);
            }
            out
        });
        assert_eq!(out, vec![(1, 2), (3, 4)]);
    }
}
