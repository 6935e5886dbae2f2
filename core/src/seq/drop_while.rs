use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Sequence;
use crate::step::Step;

pin_project! {
    /// Skips while the predicate holds, then yields everything from the
    /// first failing element on.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct DropWhile<S, P> {
        #[pin]
        pub(super) seq: S,
        pub(super) predicate: Option<P>,
    }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => Step::NotYet,
            Step::Ready((k, v)) => match this.predicate {
                Some(p) => {
                    if !p(&v) {
                        *this.predicate = None;
                        Step::Ready((k, v))
                    } else {
                        Step::NotYet
                    }
                }
                None => Step::Ready((k, v)),
            },
            Step::Done => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.predicate {
            Some(_) => (0, self.seq.size_hint().1),
            None => self.seq.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn yields_from_first_failure() {
        let out = to_seq(vec![3, 1, 4, -1, 5])
            .drop_while(|v| *v > 0)
            .to_array_with_keys::<Vec<_>>()
            .run();
        assert_eq!(out, vec![(3, -1), (4, 5)]);
    }

    #[test]
    fn predicate_not_consulted_after_failure() {
        let out = to_seq(vec![0, 5, 0, 6])
            .drop_while(|v| *v == 0)
            .to_array()
            .run();
        assert_eq!(out, vec![5, 0, 6]);
    }
}
