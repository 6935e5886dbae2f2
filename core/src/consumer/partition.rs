use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{seq::Sequence, step::Step};

pin_project! {
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Partition<S, P, B> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) predicate: P,
        pub(crate) res: Option<(B, B)>,
    }
}

impl<S, P, B> Consumer for Partition<S, P, B>
where
    S: Sequence,
    P: FnMut(&S::Value) -> bool,
    B: Default + Extend<S::Value>,
{
    type Output = (B, B);

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => None,
            Step::Ready((_, v)) => {
                if let Some((yes, no)) = this.res.as_mut() {
                    if (this.predicate)(&v) {
                        yes.extend(Some(v));
                    } else {
                        no.extend(Some(v));
                    }
                }
                None
            }
            Step::Done => this.res.take(),
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
    fn evens_and_odds() {
        let (even, odd): (Vec<_>, Vec<_>) = range(1, 6)
            .partition(|v| v % 2 == 0)
            .run();
        assert_eq!(even, vec![2, 4, 6]);
        assert_eq!(odd, vec![1, 3, 5]);
    }
}
