//! Short-circuiting consumers: `any`, `all` and `search`.

use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{seq::Sequence, step::Step};

pin_project! {
    /// The first value satisfying the predicate, or `None` once the
    /// sequence is exhausted.
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Search<S, P> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) predicate: P,
    }
}

impl<S, P> Consumer for Search<S, P>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    type Output = Option<S::Value>;

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        match this.seq.pull() {
            Step::Ready((_, v)) if (this.predicate)(&v) => Some(Some(v)),
            Step::Ready(_) | Step::NotYet => None,
            Step::Done => Some(None),
        }
    }
}

pin_project! {
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Any<S, P> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) predicate: P,
    }
}

impl<S, P> Consumer for Any<S, P>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    type Output = bool;

    fn consume(self: Pin<&mut Self>) -> Option<bool> {
        let this = self.project();
        match this.seq.pull() {
            Step::Ready((_, v)) if (this.predicate)(&v) => Some(true),
            Step::Ready(_) | Step::NotYet => None,
            Step::Done => Some(false),
        }
    }
}

pin_project! {
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct All<S, P> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) predicate: P,
    }
}

impl<S, P> Consumer for All<S, P>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    type Output = bool;

    fn consume(self: Pin<&mut Self>) -> Option<bool> {
        let this = self.project();
        match this.seq.pull() {
            Step::Ready((_, v)) if !(this.predicate)(&v) => Some(false),
            Step::Ready(_) | Step::NotYet => None,
            Step::Done => Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::prelude::*;

    #[test]
    fn any_stops_at_first_match() {
        let pulls = Cell::new(0);
        let found = to_seq(vec![1, 4, 5, 6])
            .map(|v| {
                pulls.set(pulls.get() + 1);
                v
            })
            .any(|v| v % 2 == 0)
            .run();
        assert!(found);
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn all_stops_at_first_miss() {
        assert!(!range(1, i64::MAX).all(|v| *v < 10).run());
        assert!(to_seq(Vec::<u8>::new()).all(|_| false).run());
        assert!(!to_seq(Vec::<u8>::new()).any(|_| true).run());
    }

    #[test]
    fn search_returns_value() {
        let words = vec!["pear", "apple", "plum"];
        assert_eq!(
            to_seq(words.clone()).search(|w| w.starts_with('a')).run(),
            Some("apple")
        );
        assert_eq!(to_seq(words).search(|w| w.is_empty()).run(), None);
    }
}
