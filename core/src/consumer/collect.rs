use core::{mem, pin::Pin};

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{seq::Sequence, step::Step};

pin_project! {
    /// Extends a collection with one entry per pulled pair.
    ///
    /// `entry` picks what is stored: the value alone for `to_array` and
    /// `collect`, the whole pair for `to_array_with_keys`.
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Collect<S: Sequence, C, T> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) collection: C,
        pub(crate) entry: fn(S::Key, S::Value) -> T,
    }
}

impl<S, C, T> Consumer for Collect<S, C, T>
where
    S: Sequence,
    C: Default + Extend<T>,
{
    type Output = C;

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => None,
            Step::Ready((k, v)) => {
                this.collection.extend(Some((this.entry)(k, v)));
                None
            }
            Step::Done => Some(mem::take(this.collection)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use crate::prelude::*;

    #[test]
    fn to_array_discards_keys() {
        let map = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(to_seq(&map).copied().to_array().run(), vec![1, 2]);
    }

    #[test]
    fn later_keys_overwrite() {
        let first = BTreeMap::from([("a", 1), ("b", 2)]);
        let second = BTreeMap::from([("a", 3)]);
        let merged = to_seq(first)
            .chain(to_seq(second))
            .to_array_with_keys::<BTreeMap<_, _>>()
            .run();
        assert_eq!(merged, BTreeMap::from([("a", 3), ("b", 2)]));
    }

    #[test]
    fn collect_into_set() {
        let set: HashSet<_> = to_seq(vec![1, 1, 2]).collect().run();
        assert_eq!(set.len(), 2);
    }
}
