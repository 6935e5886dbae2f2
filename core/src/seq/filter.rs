use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Filter<S, P> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) predicate: P,
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => Step::NotYet,
            Step::Ready((k, v)) => {
                if (this.predicate)(&v) {
                    Step::Ready((k, v))
                } else {
                    Step::NotYet
                }
            }
            Step::Done => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.seq.size_hint().1)
    }
}

pin_project! {
    /// Like [`Filter`], with the key visible to the predicate.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct FilterWithKey<S, P> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) predicate: P,
    }
}

impl<S, P> Sequence for FilterWithKey<S, P>
where
    S: Sequence,
    P: FnMut(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        let this = self.project();
        match this.seq.pull() {
            Step::Ready((k, v)) if !(this.predicate)(&k, &v) => Step::NotYet,
            step => step,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.seq.size_hint().1)
    }
}

impl<S: Rewind, P> Rewind for Filter<S, P>
where
    Self: Sequence,
{
    fn rewind(self: Pin<&mut Self>) {
        self.project().seq.rewind()
    }
}

impl<S: Rewind, P> Rewind for FilterWithKey<S, P>
where
    Self: Sequence,
{
    fn rewind(self: Pin<&mut Self>) {
        self.project().seq.rewind()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn filter_keeps_original_keys() {
        let kept = to_seq(vec![1, 2, 3, 4])
            .filter(|v| v % 2 == 0)
            .to_array_with_keys::<Vec<_>>()
            .run();
        assert_eq!(kept, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn rejected_candidates_report_not_yet() {
        let mut seq = to_seq(vec![1, 2]).filter(|v| *v > 1);
        assert_eq!(core::pin::Pin::new(&mut seq).pull(), Step::NotYet);
        assert_eq!(core::pin::Pin::new(&mut seq).pull(), Step::Ready((1, 2)));
        assert_eq!(core::pin::Pin::new(&mut seq).pull(), Step::Done);
    }

    #[test]
    fn filter_with_key() {
        let odd_positions = to_seq(vec!["a", "b", "c", "d"])
            .filter_with_key(|k, _| k % 2 == 1)
            .to_array()
            .run();
        assert_eq!(odd_positions, vec!["b", "d"]);
    }
}
