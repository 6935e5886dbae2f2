use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{IntoSequence, Sequence};
use crate::step::Step;

pin_project! {
    /// Concatenates the sub-sequences `f` returns for each value. Every
    /// element keeps the key its sub-sequence gave it.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct FlatMap<S, U, F> {
        #[pin] pub(super) seq: S,
        #[pin] pub(super) inner: Option<U>,
        pub(super) f: F,
    }
}

impl<S, U, F, I> Sequence for FlatMap<S, U, F>
where
    S: Sequence,
    U: Sequence,
    I: IntoSequence<Seq = U>,
    F: FnMut(S::Value) -> I,
{
    type Key = U::Key;
    type Value = U::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        let mut this = self.project();

        if let Some(inner) = this.inner.as_mut().as_pin_mut() {
            match inner.pull() {
                Step::Done => this.inner.set(None),
                step => return step,
            }
        }

        match this.seq.pull() {
            Step::Ready((_, value)) => {
                this.inner.set(Some((this.f)(value).into_seq()));
                Step::NotYet
            }
            Step::NotYet => Step::NotYet,
            Step::Done => Step::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn sub_sequences_keep_their_keys() {
        let out = to_seq(vec![1, 3])
            .flat_map(|n| vec![n, n + 1])
            .to_array_with_keys::<Vec<_>>()
            .run();
        assert_eq!(out, vec![(0, 1), (1, 2), (0, 3), (1, 4)]);
    }

    #[test]
    fn empty_sub_sequences_are_skipped() {
        let out = to_seq(vec![0, 2, 0, 1])
            .flat_map(|n| repeat(n, Bound::Limit(n)))
            .to_array()
            .run();
        assert_eq!(out, vec![2, 2, 1]);
    }
}
