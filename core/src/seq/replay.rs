use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    /// Records every pair it pulls so it can be rewound.
    ///
    /// After a rewind the recorded pairs are replayed before the source is
    /// pulled again. Memory grows with the longest prefix ever pulled.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Replay<S: Sequence> {
        #[pin]
        pub(super) seq: S,
        pub(super) record: Vec<(S::Key, S::Value)>,
        pub(super) pos: usize,
        pub(super) done: bool,
    }
}

impl<S: Sequence> Replay<S> {
    pub(super) fn new(seq: S) -> Self {
        Self {
            seq,
            record: Vec::new(),
            pos: 0,
            done: false,
        }
    }
}

impl<S> Sequence for Replay<S>
where
    S: Sequence,
    S::Key: Clone,
    S::Value: Clone,
{
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.project();
        if let Some(pair) = this.record.get(*this.pos) {
            *this.pos += 1;
            return Step::Ready(pair.clone());
        }
        if *this.done {
            return Step::Done;
        }

        match this.seq.pull() {
            Step::Ready(pair) => {
                this.record.push(pair.clone());
                *this.pos += 1;
                Step::Ready(pair)
            }
            Step::NotYet => Step::NotYet,
            Step::Done => {
                *this.done = true;
                Step::Done
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let replayed = self.record.len() - self.pos;
        if self.done {
            return (replayed, Some(replayed));
        }
        let (lo, hi) = self.seq.size_hint();
        (
            lo.saturating_add(replayed),
            hi.and_then(|hi| hi.checked_add(replayed)),
        )
    }

    fn exact_size(&self) -> Option<usize> {
        let replayed = self.record.len() - self.pos;
        if self.done {
            Some(replayed)
        } else {
            self.seq.exact_size()?.checked_add(replayed)
        }
    }
}

impl<S> Rewind for Replay<S>
where
    S: Sequence,
    S::Key: Clone,
    S::Value: Clone,
{
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        tracing::trace!(recorded = this.record.len(), "rewinding replay");
        *this.pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use core::pin::Pin;

    use crate::prelude::*;

    #[test]
    fn replays_after_partial_pull() {
        let mut seq = to_seq(vec![1, 2, 3]).rewindable();
        assert_eq!(seq.next(), Some((0, 1)));
        Pin::new(&mut seq).rewind();
        assert_eq!(seq.exact_size(), Some(3));
        assert_eq!((&mut seq).values().to_array().run(), vec![1, 2, 3]);
        Pin::new(&mut seq).rewind();
        assert_eq!(seq.count().run(), 3);
    }

    #[test]
    fn source_pulled_once() {
        let pulls = std::cell::Cell::new(0);
        let mut seq = to_seq(vec!['a', 'b'])
            .map(|v| {
                pulls.set(pulls.get() + 1);
                v
            })
            .rewindable();
        for _ in 0..3 {
            Pin::new(&mut seq).rewind();
            assert_eq!((&mut seq).to_array().run(), vec!['a', 'b']);
        }
        assert_eq!(pulls.get(), 2);
    }
}
