use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::{bound::Bound, step::Step};

pin_project! {
    /// Drops the first `start` elements, then yields at most `length` more.
    ///
    /// The dropped prefix is pulled one element per step. Nothing is pulled
    /// once `length` elements have been yielded.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Slice<S> {
        #[pin]
        pub(super) seq: S,
        pub(super) start: usize,
        pub(super) length: Bound,
        pub(super) skip: usize,
        pub(super) remaining: Bound,
    }
}

impl<S> Slice<S> {
    pub(super) fn new(seq: S, start: usize, length: Bound) -> Self {
        Self {
            seq,
            start,
            length,
            skip: start,
            remaining: length,
        }
    }
}

impl<S: Sequence> Sequence for Slice<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.project();
        if this.remaining.is_exhausted() {
            return Step::Done;
        }

        match this.seq.pull() {
            Step::Ready(pair) => {
                if *this.skip > 0 {
                    *this.skip -= 1;
                    Step::NotYet
                } else {
                    this.remaining.decrement();
                    Step::Ready(pair)
                }
            }
            step => step,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining.is_exhausted() {
            return (0, Some(0));
        }
        let (lo, hi) = self.seq.size_hint();
        let lo = lo.saturating_sub(self.skip);
        let hi = hi.map(|hi| hi.saturating_sub(self.skip));
        let hi = self.remaining.clamp(hi);
        (hi.map_or(lo, |hi| lo.min(hi)), hi)
    }

    fn exact_size(&self) -> Option<usize> {
        if self.remaining.is_exhausted() {
            return Some(0);
        }
        let available = self.seq.exact_size()?.saturating_sub(self.skip);
        self.remaining.clamp(Some(available))
    }
}

impl<S: Rewind> Rewind for Slice<S> {
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        *this.skip = *this.start;
        *this.remaining = *this.length;
        this.seq.rewind();
    }
}
