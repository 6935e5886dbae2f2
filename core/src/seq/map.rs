use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Map<S, F> {
        #[pin] pub(super) seq: S,
        pub(super) f: F,
    }
}

impl<S, F, T> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Value) -> T,
{
    type Key = S::Key;
    type Value = T;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, T)> {
        let this = self.project();
        this.seq.pull().map_value(this.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct MapKeys<S, F> {
        #[pin] pub(super) seq: S,
        pub(super) f: F,
    }
}

impl<S, F, K> Sequence for MapKeys<S, F>
where
    S: Sequence,
    F: FnMut(S::Key) -> K,
{
    type Key = K;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(K, Self::Value)> {
        let this = self.project();
        let f = this.f;
        this.seq.pull().map(|(k, v)| (f(k), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct MapWithKey<S, F> {
        #[pin] pub(super) seq: S,
        pub(super) f: F,
    }
}

impl<S, F, T> Sequence for MapWithKey<S, F>
where
    S: Sequence,
    F: FnMut(&S::Key, S::Value) -> T,
{
    type Key = S::Key;
    type Value = T;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, T)> {
        let this = self.project();
        let f = this.f;
        this.seq.pull().map(|(k, v)| {
            let v = f(&k, v);
            (k, v)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

pin_project! {
    /// Keys each value by `f(&value)`, discarding the original key.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Reindex<S, F> {
        #[pin] pub(super) seq: S,
        pub(super) f: F,
    }
}

impl<S, F, K> Sequence for Reindex<S, F>
where
    S: Sequence,
    F: FnMut(&S::Value) -> K,
{
    type Key = K;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(K, Self::Value)> {
        let this = self.project();
        let f = this.f;
        this.seq.pull().map(|(_, v)| (f(&v), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Cloned<S> {
        #[pin] pub(super) seq: S,
    }
}

impl<'a, S, T: 'a> Sequence for Cloned<S>
where
    S: Sequence<Value = &'a T>,
    T: Clone,
{
    type Key = S::Key;
    type Value = T;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, T)> {
        self.project().seq.pull().map_value(T::clone)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Copied<S> {
        #[pin] pub(super) seq: S,
    }
}

impl<'a, S, T: 'a> Sequence for Copied<S>
where
    S: Sequence<Value = &'a T>,
    T: Copy,
{
    type Key = S::Key;
    type Value = T;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, T)> {
        self.project().seq.pull().map_value(|v| *v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

impl<S: Rewind> Rewind for Cloned<S>
where
    Cloned<S>: Sequence,
{
    fn rewind(self: Pin<&mut Self>) {
        self.project().seq.rewind()
    }
}

impl<S: Rewind> Rewind for Copied<S>
where
    Copied<S>: Sequence,
{
    fn rewind(self: Pin<&mut Self>) {
        self.project().seq.rewind()
    }
}

macro_rules! rewind_through {
    ($($ty:ident),*) => {$(
        impl<S: Rewind, F> Rewind for $ty<S, F>
        where
            $ty<S, F>: Sequence,
        {
            fn rewind(self: Pin<&mut Self>) {
                self.project().seq.rewind()
            }
        }
    )*};
}

rewind_through!(Map, MapKeys, MapWithKey, Reindex);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::prelude::*;

    #[test]
    fn map_leaves_keys() {
        let pairs = to_seq(vec![1, 2, 3])
            .map(|v| v * 2)
            .to_array_with_keys::<Vec<_>>()
            .run();
        assert_eq!(pairs, vec![(0, 2), (1, 4), (2, 6)]);
    }

    #[test]
    fn colliding_mapped_keys_keep_last() {
        let map = to_seq(vec![10, 20, 30])
            .map_keys(|k| k % 2)
            .to_array_with_keys::<HashMap<_, _>>()
            .run();
        assert_eq!(map[&0], 30);
        assert_eq!(map[&1], 20);
    }

    #[test]
    fn map_with_key_sees_key() {
        let out = to_seq(vec!["a", "b"])
            .map_with_key(|k, v| format!("{k}{v}"))
            .to_array()
            .run();
        assert_eq!(out, vec!["0a", "1b"]);
    }

    #[test]
    fn reindex_by_value() {
        let people = vec![("ada", 36), ("alan", 41)];
        let by_name = to_seq(people)
            .reindex(|(name, _)| *name)
            .map(|(_, age)| age)
            .to_array_with_keys::<HashMap<_, _>>()
            .run();
        assert_eq!(by_name["alan"], 41);
    }

    #[test]
    fn map_preserves_exact_size() {
        let seq = to_seq(vec![1, 2, 3]).map(|v| v + 1);
        assert_eq!(seq.exact_size(), Some(3));
        assert_eq!(seq.count().run(), 3);
    }

    #[test]
    fn cloned_from_borrowed() {
        let words = vec![String::from("a"), String::from("b")];
        let owned: Vec<String> = to_seq(&words).cloned().to_array().run();
        assert_eq!(owned, words);
    }
}
