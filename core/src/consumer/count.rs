use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{seq::Sequence, step::Step};

pin_project! {
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Count<S> {
        pub(crate) count: usize,
        #[pin]
        pub(crate) seq: S,
    }
}

impl<S: Sequence> Consumer for Count<S> {
    type Output = usize;

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        if let Some(len) = this.seq.exact_size() {
            tracing::trace!(len, "count answered from exact size");
            return Some(*this.count + len);
        }
        match this.seq.pull() {
            Step::NotYet => None,
            Step::Ready(_) => {
                *this.count += 1;
                None
            }
            Step::Done => Some(*this.count),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn exact_size_consumes_nothing() {
        let pulls = Cell::new(0);
        let n = to_seq(vec![1, 2, 3, 4])
            .map(|v| {
                pulls.set(pulls.get() + 1);
                v
            })
            .count()
            .run();
        assert_eq!(n, 4);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn drains_without_exact_size() {
        let n = to_seq(vec![1, 2, 3, 4]).filter(|v| v % 2 == 1).count().run();
        assert_eq!(n, 2);
    }

    #[test]
    fn empty() {
        assert_eq!(to_seq(Vec::<u8>::new()).count().run(), 0);
    }
}
