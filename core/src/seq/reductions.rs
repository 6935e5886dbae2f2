use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Sequence;
use crate::step::Step;

pin_project! {
    /// The running fold: one accumulator per consumed element, keyed `0..`.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Reductions<S, F, A> {
        #[pin]
        pub(super) seq: S,
        pub(super) f: F,
        pub(super) acc: Option<A>,
        pub(super) index: usize,
    }
}

impl<S, F, A> Sequence for Reductions<S, F, A>
where
    S: Sequence,
    F: FnMut(A, S::Value, S::Key) -> A,
    A: Clone,
{
    type Key = usize;
    type Value = A;

    fn pull(self: Pin<&mut Self>) -> Step<(usize, A)> {
        let this = self.project();
        match this.seq.pull() {
            Step::Ready((k, v)) => {
                let Some(acc) = this.acc.take() else {
                    return Step::Done;
                };
                let acc = (this.f)(acc, v, k);
                *this.acc = Some(acc.clone());
                let index = *this.index;
                *this.index += 1;
                Step::Ready((index, acc))
            }
            Step::NotYet => Step::NotYet,
            Step::Done => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn running_sums() {
        let out = to_seq(vec![1, 2, 3, 4, 5])
            .reductions(0, |acc, v, _| acc + v)
            .to_array()
            .run();
        assert_eq!(out, vec![1, 3, 6, 10, 15]);
    }

    #[test]
    fn fold_sees_keys() {
        let out = to_seq(vec!["a", "b"])
            .reductions(String::new(), |mut acc, v, k| {
                acc.push_str(&format!("{k}{v}"));
                acc
            })
            .to_array_with_keys::<Vec<_>>()
            .run();
        assert_eq!(out, vec![(0, "0a".to_owned()), (1, "0a1b".to_owned())]);
    }

    #[test]
    fn lazy_over_infinite_input() {
        let out = repeat(2, Bound::Unbounded)
            .reductions(1, |acc, v, _| acc * v)
            .take(4)
            .to_array()
            .run();
        assert_eq!(out, vec![2, 4, 8, 16]);
    }
}
