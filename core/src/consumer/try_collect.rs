use core::{mem, pin::Pin};

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{seq::Sequence, step::Step};

pin_project! {
    /// Collects `Ok` values, stopping at the first `Err`.
    ///
    /// On failure the error is returned together with everything collected
    /// before it.
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct TryCollect<S, C> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) collection: C,
    }
}

impl<T, E, S, C> Consumer for TryCollect<S, C>
where
    S: Sequence<Value = Result<T, E>>,
    C: Default + Extend<T>,
{
    type Output = Result<C, (E, C)>;

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => None,
            Step::Ready((_, e)) => match e {
                Ok(e) => {
                    this.collection.extend(Some(e));
                    None
                }
                Err(err) => Some(Err((err, mem::take(this.collection)))),
            },
            Step::Done => Some(Ok(mem::take(this.collection))),
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
    fn stops_at_first_error() {
        let parsed: Result<Vec<i32>, _> = to_seq(vec!["1", "2", "x", "4"])
            .map(str::parse::<i32>)
            .try_collect()
            .run();
        let (_, partial) = parsed.unwrap_err();
        assert_eq!(partial, vec![1, 2]);
    }

    #[test]
    fn all_ok() {
        let parsed: Result<Vec<i32>, _> = to_seq(vec!["1", "2"])
            .map(str::parse::<i32>)
            .try_collect()
            .run();
        assert_eq!(parsed.unwrap(), vec![1, 2]);
    }
}
