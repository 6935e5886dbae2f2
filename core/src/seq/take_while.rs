use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Sequence;
use crate::step::Step;

pin_project! {
    /// Yields while the predicate holds. The first failing element is
    /// pulled and dropped; nothing is pulled after it.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct TakeWhile<S, P> {
        #[pin]
        pub(super) seq: S,
        pub(super) predicate: P,
        pub(super) done: bool,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.project();
        if *this.done {
            return Step::Done;
        }

        match this.seq.pull() {
            Step::NotYet => Step::NotYet,
            Step::Ready((k, v)) => {
                if (this.predicate)(&v) {
                    Step::Ready((k, v))
                } else {
                    *this.done = true;
                    Step::Done
                }
            }
            Step::Done => {
                *this.done = true;
                Step::Done
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.seq.size_hint().1)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn stops_at_first_failure() {
        let out = to_seq(vec![3, 1, 4, -1, 5])
            .take_while(|v| *v > 0)
            .to_array()
            .run();
        assert_eq!(out, vec![3, 1, 4]);
    }

    #[test]
    fn failing_element_is_consumed() {
        let mut source = to_seq(vec![3, 1, 4, -1, 5]);
        let head = (&mut source).take_while(|v| *v > 0).to_array().run();
        assert_eq!(head, vec![3, 1, 4]);
        assert_eq!(source.values().to_array().run(), vec![5]);
    }

    #[test]
    fn works_on_infinite_input() {
        let out = range_step(1, i64::MAX, 2)
            .unwrap()
            .take_while(|v| *v < 8)
            .to_array()
            .run();
        assert_eq!(out, vec![1, 3, 5, 7]);
    }
}
