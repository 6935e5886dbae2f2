use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{seq::Sequence, step::Step};

pin_project! {
    /// Left fold with `acc = f(acc, value, key)`.
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Reduce<S, F, A> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) f: F,
        pub(crate) acc: Option<A>,
    }
}

impl<S, F, A> Consumer for Reduce<S, F, A>
where
    S: Sequence,
    F: FnMut(A, S::Value, S::Key) -> A,
{
    type Output = A;

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => None,
            Step::Ready((k, v)) => {
                if let Some(acc) = this.acc.take() {
                    *this.acc = Some((this.f)(acc, v, k));
                }
                None
            }
            Step::Done => this.acc.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn sum() {
        let total = to_seq(vec![1, 2, 3, 4, 5])
            .reduce(0, |acc, v, _| acc + v)
            .run();
        assert_eq!(total, 15);
    }

    #[test]
    fn empty_returns_init() {
        let total = to_seq(Vec::<i32>::new()).reduce(7, |acc, v, _| acc + v).run();
        assert_eq!(total, 7);
    }

    #[test]
    fn sees_keys() {
        let weighted = to_seq(vec![10, 20, 30])
            .reduce(0, |acc, v, k| acc + v * k)
            .run();
        assert_eq!(weighted, 80);
    }
}
