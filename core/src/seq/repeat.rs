use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::{bound::Bound, step::Step};

pin_project! {
    /// One value, cloned `times` times (forever when unbounded).
    #[derive(Debug, Clone)]
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Repeat<T> {
        value: T,
        times: Bound,
        index: usize,
    }
}

impl<T> Repeat<T> {
    pub fn new(value: T, times: Bound) -> Self {
        Self {
            value,
            times,
            index: 0,
        }
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Key = usize;
    type Value = T;

    fn pull(self: Pin<&mut Self>) -> Step<(usize, T)> {
        let this = self.project();
        match this.times.limit() {
            Some(limit) if *this.index >= limit => Step::Done,
            _ => {
                let key = *this.index;
                *this.index += 1;
                Step::Ready((key, this.value.clone()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.exact_size() {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }

    fn exact_size(&self) -> Option<usize> {
        self.times
            .limit()
            .map(|limit| limit.saturating_sub(self.index))
    }
}

impl<T: Clone> Rewind for Repeat<T> {
    fn rewind(self: Pin<&mut Self>) {
        *self.project().index = 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn bounded_repeat() {
        let out = repeat("hi", Bound::Limit(3)).to_array_with_keys::<Vec<_>>().run();
        assert_eq!(out, vec![(0, "hi"), (1, "hi"), (2, "hi")]);
        assert_eq!(repeat(0, Bound::Limit(0)).count().run(), 0);
    }

    #[test]
    fn unbounded_repeat_is_lazy() {
        let seq = repeat(7, Bound::Unbounded);
        assert_eq!(seq.exact_size(), None);
        assert_eq!(seq.take(4).reduce(0, |acc, v, _| acc + v).run(), 28);
    }

    #[test]
    fn signed_counts_are_validated() {
        assert!(Bound::try_from(-2i64).is_err());
        let times = Bound::try_from(2i64).unwrap();
        assert_eq!(repeat('z', times).to_array().run(), vec!['z', 'z']);
    }
}
