use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    /// Reports `Done` forever once the inner sequence has.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Fuse<S> {
        #[pin]
        pub(super) seq: S,
        pub(super) done: bool,
    }
}

impl<S> Fuse<S> {
    pub(super) fn new(seq: S) -> Self {
        Self { seq, done: false }
    }
}

impl<S: Sequence> Sequence for Fuse<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.project();

        if *this.done {
            Step::Done
        } else {
            let next = this.seq.pull();
            if next.is_done() {
                *this.done = true;
            }
            next
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.seq.size_hint()
        }
    }

    fn exact_size(&self) -> Option<usize> {
        if self.done {
            Some(0)
        } else {
            self.seq.exact_size()
        }
    }
}

impl<S: Rewind> Rewind for Fuse<S> {
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        *this.done = false;
        this.seq.rewind();
    }
}

pin_project! {
    /// Drains `first`, then `second`. Keys pass through unmodified.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Chain<S, U> {
        #[pin]
        pub(super) first: Fuse<S>,
        #[pin]
        pub(super) second: Fuse<U>,
    }
}

impl<S, U> Sequence for Chain<S, U>
where
    S: Sequence,
    U: Sequence<Key = S::Key, Value = S::Value>,
{
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let mut this = self.project();

        if !this.first.done {
            match this.first.as_mut().pull() {
                Step::Done => {}
                next => return next,
            }
        }

        this.second.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo_a, hi_a) = self.first.size_hint();
        let (lo_b, hi_b) = self.second.size_hint();
        let upper = match (hi_a, hi_b) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (lo_a.saturating_add(lo_b), upper)
    }

    fn exact_size(&self) -> Option<usize> {
        self.first
            .exact_size()?
            .checked_add(self.second.exact_size()?)
    }
}

impl<S, U> Rewind for Chain<S, U>
where
    S: Rewind,
    U: Rewind<Key = S::Key, Value = S::Value>,
{
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        this.first.rewind();
        this.second.rewind();
    }
}

/// Drains any number of same-typed sequences in order.
#[must_use = "sequences do nothing unless pulled"]
pub struct ChainAll<S> {
    pub(super) seqs: Vec<S>,
    pub(super) current: usize,
}

impl<S: Sequence + Unpin> Sequence for ChainAll<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.get_mut();
        while let Some(seq) = this.seqs.get_mut(this.current) {
            match Pin::new(seq).pull() {
                Step::Done => this.current += 1,
                next => return next,
            }
        }
        Step::Done
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seqs[self.current.min(self.seqs.len())..]
            .iter()
            .map(Sequence::size_hint)
            .fold((0, Some(0)), |(lo, hi), (l, h)| {
                let hi = match (hi, h) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (lo.saturating_add(l), hi)
            })
    }

    fn exact_size(&self) -> Option<usize> {
        self.seqs[self.current.min(self.seqs.len())..]
            .iter()
            .try_fold(0usize, |acc, seq| acc.checked_add(seq.exact_size()?))
    }
}

impl<S: Rewind + Unpin> Rewind for ChainAll<S> {
    fn rewind(self: Pin<&mut Self>) {
        let this = self.get_mut();
        for seq in &mut this.seqs {
            Pin::new(seq).rewind();
        }
        this.current = 0;
    }
}

/// Builds a [`ChainAll`] over `seqs`.
pub fn chain_all<I>(seqs: I) -> ChainAll<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence + Unpin,
{
    ChainAll {
        seqs: seqs.into_iter().collect(),
        current: 0,
    }
}
