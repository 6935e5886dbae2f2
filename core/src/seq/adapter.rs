//! Sources: containers and iterators presented as sequences.

use core::pin::Pin;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};

use pin_project_lite::pin_project;

use super::{IntoSequence, Rewind, Sequence};
use crate::step::Step;

pin_project! {
    /// Values of an iterator keyed by position.
    #[derive(Debug, Clone)]
    #[must_use = "sequences do nothing unless pulled"]
    pub struct FromValues<I> {
        iter: I,
        index: usize,
        exact: bool,
    }
}

impl<I: Iterator> Sequence for FromValues<I> {
    type Key = usize;
    type Value = I::Item;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        let this = self.project();
        match this.iter.next() {
            Some(value) => {
                let key = *this.index;
                *this.index += 1;
                Step::Ready((key, value))
            }
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.exact.then(|| self.iter.size_hint().0)
    }
}

/// Presents any iterable of values as a sequence keyed `0..`.
pub fn from_values<I: IntoIterator>(values: I) -> FromValues<I::IntoIter> {
    FromValues {
        iter: values.into_iter(),
        index: 0,
        exact: false,
    }
}

pin_project! {
    /// Key-value pairs of an iterator, passed through unchanged.
    #[derive(Debug, Clone)]
    #[must_use = "sequences do nothing unless pulled"]
    pub struct FromPairs<I> {
        iter: I,
        exact: bool,
    }
}

impl<I, K, V> Sequence for FromPairs<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    fn pull(self: Pin<&mut Self>) -> Step<(K, V)> {
        match self.project().iter.next() {
            Some(pair) => Step::Ready(pair),
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.exact.then(|| self.iter.size_hint().0)
    }
}

/// Presents any iterable of `(key, value)` pairs as a sequence.
pub fn from_pairs<K, V, I>(pairs: I) -> FromPairs<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
{
    FromPairs {
        iter: pairs.into_iter(),
        exact: false,
    }
}

pin_project! {
    /// Borrowed slice elements keyed by position. Rewindable.
    #[derive(Debug)]
    #[must_use = "sequences do nothing unless pulled"]
    pub struct SliceSeq<'a, T> {
        slice: &'a [T],
        pos: usize,
    }
}

impl<T> Clone for SliceSeq<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slice: self.slice,
            pos: self.pos,
        }
    }
}

impl<'a, T> Sequence for SliceSeq<'a, T> {
    type Key = usize;
    type Value = &'a T;

    fn pull(self: Pin<&mut Self>) -> Step<(usize, &'a T)> {
        let this = self.project();
        let slice: &'a [T] = *this.slice;
        match slice.get(*this.pos) {
            Some(value) => {
                let key = *this.pos;
                *this.pos += 1;
                Step::Ready((key, value))
            }
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len() - self.pos;
        (remaining, Some(remaining))
    }

    fn exact_size(&self) -> Option<usize> {
        Some(self.slice.len() - self.pos)
    }
}

impl<T> Rewind for SliceSeq<'_, T> {
    fn rewind(self: Pin<&mut Self>) {
        *self.project().pos = 0;
    }
}

pin_project! {
    /// Borrowed entries of a map. Rewindable.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Entries<'a, M: ?Sized, I> {
        map: &'a M,
        iter: I,
    }
}

impl<'a, M, I, K, V> Sequence for Entries<'a, M, I>
where
    M: ?Sized,
    I: ExactSizeIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    type Key = &'a K;
    type Value = &'a V;

    fn pull(self: Pin<&mut Self>) -> Step<(&'a K, &'a V)> {
        match self.project().iter.next() {
            Some(entry) => Step::Ready(entry),
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

impl<'a, M, I, K, V> Rewind for Entries<'a, M, I>
where
    M: ?Sized,
    &'a M: IntoIterator<IntoIter = I>,
    I: ExactSizeIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        let map: &'a M = *this.map;
        *this.iter = map.into_iter();
    }
}

impl<T> IntoSequence for Vec<T> {
    type Key = usize;
    type Value = T;
    type Seq = FromValues<std::vec::IntoIter<T>>;

    fn into_seq(self) -> Self::Seq {
        FromValues {
            iter: self.into_iter(),
            index: 0,
            exact: true,
        }
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Key = usize;
    type Value = T;
    type Seq = FromValues<core::array::IntoIter<T, N>>;

    fn into_seq(self) -> Self::Seq {
        FromValues {
            iter: self.into_iter(),
            index: 0,
            exact: true,
        }
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Key = usize;
    type Value = &'a T;
    type Seq = SliceSeq<'a, T>;

    fn into_seq(self) -> Self::Seq {
        SliceSeq {
            slice: self,
            pos: 0,
        }
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Key = usize;
    type Value = &'a T;
    type Seq = SliceSeq<'a, T>;

    fn into_seq(self) -> Self::Seq {
        self.as_slice().into_seq()
    }
}

impl<K, V> IntoSequence for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Seq = FromPairs<btree_map::IntoIter<K, V>>;

    fn into_seq(self) -> Self::Seq {
        FromPairs {
            iter: self.into_iter(),
            exact: true,
        }
    }
}

impl<K, V, H> IntoSequence for HashMap<K, V, H> {
    type Key = K;
    type Value = V;
    type Seq = FromPairs<hash_map::IntoIter<K, V>>;

    fn into_seq(self) -> Self::Seq {
        FromPairs {
            iter: self.into_iter(),
            exact: true,
        }
    }
}

impl<'a, K, V> IntoSequence for &'a BTreeMap<K, V> {
    type Key = &'a K;
    type Value = &'a V;
    type Seq = Entries<'a, BTreeMap<K, V>, btree_map::Iter<'a, K, V>>;

    fn into_seq(self) -> Self::Seq {
        Entries {
            map: self,
            iter: self.iter(),
        }
    }
}

impl<'a, K, V, H> IntoSequence for &'a HashMap<K, V, H> {
    type Key = &'a K;
    type Value = &'a V;
    type Seq = Entries<'a, HashMap<K, V, H>, hash_map::Iter<'a, K, V>>;

    fn into_seq(self) -> Self::Seq {
        Entries {
            map: self,
            iter: self.iter(),
        }
    }
}

/// A sequence seen as a std [`Iterator`] of pairs.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<S> {
    pub(super) seq: S,
}

impl<S: Sequence + Unpin> Iterator for Iter<S> {
    type Item = (S::Key, S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match Pin::new(&mut self.seq).pull() {
                Step::Ready(pair) => return Some(pair),
                Step::NotYet => continue,
                Step::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{from_pairs, from_values};
    use crate::prelude::*;

    #[test]
    fn vec_keys_are_positions() {
        let pairs = to_seq(vec!["a", "b"]).to_array_with_keys::<Vec<_>>().run();
        assert_eq!(pairs, vec![(0, "a"), (1, "b")]);
    }

    #[test]
    fn borrowed_slice_rewinds() {
        let data = [1, 2, 3];
        let mut seq = to_seq(&data[..]);
        assert_eq!(seq.next(), Some((0, &1)));
        assert_eq!(seq.exact_size(), Some(2));
        core::pin::Pin::new(&mut seq).rewind();
        assert_eq!(seq.copied().to_array().run(), vec![1, 2, 3]);
    }

    #[test]
    fn map_entries_keep_keys() {
        let map = BTreeMap::from([("x", 1), ("y", 2)]);
        let mut entries = to_seq(&map);
        assert_eq!(entries.exact_size(), Some(2));
        assert_eq!(entries.next(), Some((&"x", &1)));
        core::pin::Pin::new(&mut entries).rewind();
        assert_eq!(entries.count().run(), 2);

        let owned = to_seq(map).to_array_with_keys::<BTreeMap<_, _>>().run();
        assert_eq!(owned.get("y"), Some(&2));
    }

    #[test]
    fn iterators_report_no_exact_size() {
        let values = from_values((0..4).filter(|v| v % 2 == 0));
        assert_eq!(values.exact_size(), None);
        assert_eq!(values.to_array().run(), vec![0, 2]);

        let pairs = from_pairs([("k", 1), ("k", 2)]);
        assert_eq!(pairs.keys().to_array().run(), vec!["k", "k"]);
    }

    #[test]
    fn std_iterator_view() {
        let evens: Vec<_> = to_seq(vec![1, 2, 3, 4])
            .filter(|v| v % 2 == 0)
            .iter()
            .map(|(_, v)| v)
            .collect();
        assert_eq!(evens, vec![2, 4]);
    }
}
