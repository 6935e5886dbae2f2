use core::pin::Pin;

use super::{
    adapter::Iter,
    chain::{Chain, Fuse},
    chunk::Chunk,
    cursor::Cursor,
    drop_while::DropWhile,
    enumerate::{Enumerate, Keys, Values},
    filter::{Filter, FilterWithKey},
    flat_map::FlatMap,
    flatten::Flatten,
    flip::Flip,
    map::{Cloned, Copied, Map, MapKeys, MapWithKey, Reindex},
    product::Product,
    reductions::Reductions,
    replay::Replay,
    slice::Slice,
    stream::IntoStream,
    take_while::TakeWhile,
    zip::Zip,
    IntoSequence, Rewind, Sequence,
};
use crate::{
    bound::Bound,
    consumer::{
        collect::Collect,
        count::Count,
        join::Join,
        partition::Partition,
        reduce::Reduce,
        search::{All, Any, Search},
        try_collect::TryCollect,
    },
    error::Result,
    step::Step,
};

/// Extension trait for [`Sequence`].
pub trait SequenceExt: Sequence {
    /// Pulls until the next element or the end.
    ///
    /// ```
    /// use lazyseq_core::prelude::*;
    ///
    /// let mut seq = to_seq(vec![1, 2, 3]).filter(|v| v % 2 == 1);
    /// assert_eq!(seq.next(), Some((0, 1)));
    /// assert_eq!(seq.next(), Some((2, 3)));
    /// assert_eq!(seq.next(), None);
    /// ```
    fn next(&mut self) -> Option<(Self::Key, Self::Value)>
    where
        Self: Unpin,
    {
        loop {
            match Pin::new(&mut *self).pull() {
                Step::Ready(pair) => return Some(pair),
                Step::NotYet => continue,
                Step::Done => return None,
            }
        }
    }

    /// A std [`Iterator`] over the pairs.
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter { seq: self }
    }

    fn cursor(self) -> Cursor<Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }

    /// Stops pulling upstream after the first `Done`.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    fn map<T, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Value) -> T,
    {
        Map { seq: self, f }
    }

    fn map_keys<K, F>(self, f: F) -> MapKeys<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Key) -> K,
    {
        MapKeys { seq: self, f }
    }

    fn map_with_key<T, F>(self, f: F) -> MapWithKey<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Key, Self::Value) -> T,
    {
        MapWithKey { seq: self, f }
    }

    fn reindex<K, F>(self, f: F) -> Reindex<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Value) -> K,
    {
        Reindex { seq: self, f }
    }

    /// Maps each value to a sub-sequence and concatenates them, keeping
    /// the keys each sub-sequence produces.
    ///
    /// ```
    /// use lazyseq_core::prelude::*;
    ///
    /// let out = to_seq(vec![1, 2])
    ///     .flat_map(|n| repeat(n, Bound::Limit(n)))
    ///     .to_array()
    ///     .run();
    /// assert_eq!(out, vec![1, 2, 2]);
    /// ```
    fn flat_map<I, F>(self, f: F) -> FlatMap<Self, I::Seq, F>
    where
        Self: Sized,
        I: IntoSequence,
        F: FnMut(Self::Value) -> I,
    {
        FlatMap {
            seq: self,
            inner: None,
            f,
        }
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value) -> bool,
    {
        Filter {
            seq: self,
            predicate,
        }
    }

    fn filter_with_key<P>(self, predicate: P) -> FilterWithKey<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        FilterWithKey {
            seq: self,
            predicate,
        }
    }

    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
    {
        Keys::new(self)
    }

    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    fn flip(self) -> Flip<Self>
    where
        Self: Sized,
    {
        Flip { seq: self }
    }

    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sequence<Value = &'a T> + Sized,
        T: Clone + 'a,
    {
        Cloned { seq: self }
    }

    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sequence<Value = &'a T> + Sized,
        T: Copy + 'a,
    {
        Copied { seq: self }
    }

    /// Pairs values positionally, stopping at the shorter side. Keys are
    /// `0..`.
    fn zip<U>(self, other: U) -> Zip<Self, U::Seq>
    where
        Self: Sized,
        U: IntoSequence,
    {
        Zip::new(self, other.into_seq())
    }

    fn chain<U>(self, other: U) -> Chain<Self, U::Seq>
    where
        Self: Sized,
        U: IntoSequence<Key = Self::Key, Value = Self::Value>,
    {
        Chain {
            first: Fuse::new(self),
            second: Fuse::new(other.into_seq()),
        }
    }

    /// Cartesian product with `other`, which is re-iterated once per
    /// element of `self`.
    ///
    /// ```
    /// use lazyseq_core::prelude::*;
    ///
    /// let out = range(1, 2)
    ///     .product(to_seq(&['a', 'b'][..]).copied())
    ///     .to_array()
    ///     .run();
    /// assert_eq!(out, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    ///
    /// An owned `Vec` is drained as it is read and cannot restart, so it is
    /// refused as the right operand:
    ///
    /// ```compile_fail
    /// use lazyseq_core::prelude::*;
    ///
    /// let out = range(1, 2).product(vec!['a', 'b']).to_array().run();
    /// ```
    ///
    /// Making it replayable first is accepted:
    ///
    /// ```
    /// use lazyseq_core::prelude::*;
    ///
    /// let out = range(1, 2).product(to_seq(vec!['a', 'b']).rewindable()).count().run();
    /// assert_eq!(out, 4);
    /// ```
    fn product<U>(self, other: U) -> Product<Self, U::Seq>
    where
        Self: Sized,
        Self::Key: Clone,
        Self::Value: Clone,
        U: IntoSequence,
        U::Seq: Rewind,
    {
        Product::new(self, other.into_seq())
    }

    fn slice(self, start: usize, length: Bound) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self, start, length)
    }

    fn take(self, n: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self, 0, Bound::Limit(n))
    }

    fn drop(self, n: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        Slice::new(self, n, Bound::Unbounded)
    }

    /// Batches of `size` values, the last one possibly shorter.
    fn chunk(self, size: usize) -> Result<Chunk<Self, Self::Value>>
    where
        Self: Sized,
    {
        Chunk::new(self, size, |_, v| v)
    }

    /// Batches of `size` pairs that keep their original keys.
    fn chunk_with_keys(self, size: usize) -> Result<Chunk<Self, (Self::Key, Self::Value)>>
    where
        Self: Sized,
    {
        Chunk::new(self, size, |k, v| (k, v))
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value) -> bool,
    {
        TakeWhile {
            seq: self,
            predicate,
            done: false,
        }
    }

    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value) -> bool,
    {
        DropWhile {
            seq: self,
            predicate: Some(predicate),
        }
    }

    fn reductions<A, F>(self, init: A, f: F) -> Reductions<Self, F, A>
    where
        Self: Sized,
        A: Clone,
        F: FnMut(A, Self::Value, Self::Key) -> A,
    {
        Reductions {
            seq: self,
            f,
            acc: Some(init),
            index: 0,
        }
    }

    /// Splices [`Nested`](super::flatten::Nested) sub-sequences into the
    /// output, descending at most `levels` deep.
    fn flatten(self, levels: Bound) -> Flatten<Self>
    where
        Self: Sized,
    {
        Flatten::new(self, levels)
    }

    /// Records pulled pairs so the sequence can be rewound.
    fn rewindable(self) -> Replay<Self>
    where
        Self: Sized,
    {
        Replay::new(self)
    }

    fn into_stream(self) -> IntoStream<Self>
    where
        Self: Sized,
    {
        IntoStream { seq: self }
    }

    fn reduce<A, F>(self, init: A, f: F) -> Reduce<Self, F, A>
    where
        Self: Sized,
        F: FnMut(A, Self::Value, Self::Key) -> A,
    {
        Reduce {
            seq: self,
            f,
            acc: Some(init),
        }
    }

    fn count(self) -> Count<Self>
    where
        Self: Sized,
    {
        Count {
            seq: self,
            count: 0,
        }
    }

    fn any<P>(self, predicate: P) -> Any<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value) -> bool,
    {
        Any {
            seq: self,
            predicate,
        }
    }

    fn all<P>(self, predicate: P) -> All<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value) -> bool,
    {
        All {
            seq: self,
            predicate,
        }
    }

    fn search<P>(self, predicate: P) -> Search<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Value) -> bool,
    {
        Search {
            seq: self,
            predicate,
        }
    }

    fn join(self, separator: &str) -> Join<Self>
    where
        Self: Sized,
    {
        Join {
            seq: self,
            separator: separator.to_owned(),
            out: String::new(),
            position: 0,
        }
    }

    fn to_array(self) -> Collect<Self, Vec<Self::Value>, Self::Value>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Materializes the pairs into any keyed collection. Later duplicate
    /// keys overwrite earlier ones in maps.
    fn to_array_with_keys<C>(self) -> Collect<Self, C, (Self::Key, Self::Value)>
    where
        Self: Sized,
        C: Default + Extend<(Self::Key, Self::Value)>,
    {
        #[allow(unused_mut)]
        let mut collection: C = Default::default();
        #[cfg(feature = "nightly")]
        collection.extend_reserve(self.size_hint().0);
        Collect {
            seq: self,
            collection,
            entry: |k, v| (k, v),
        }
    }

    fn collect<C>(self) -> Collect<Self, C, Self::Value>
    where
        Self: Sized,
        C: Default + Extend<Self::Value>,
    {
        #[allow(unused_mut)]
        let mut collection: C = Default::default();
        #[cfg(feature = "nightly")]
        collection.extend_reserve(self.size_hint().0);
        Collect {
            seq: self,
            collection,
            entry: |_, v| v,
        }
    }

    fn partition<B, P>(self, predicate: P) -> Partition<Self, P, B>
    where
        Self: Sized,
        B: Default + Extend<Self::Value>,
        P: FnMut(&Self::Value) -> bool,
    {
        Partition {
            seq: self,
            predicate,
            res: Some((Default::default(), Default::default())),
        }
    }

    fn try_collect<T, E, C>(self) -> TryCollect<Self, C>
    where
        Self: Sequence<Value = core::result::Result<T, E>> + Sized,
        C: Default + Extend<T>,
    {
        #[allow(unused_mut)]
        let mut collection: C = Default::default();
        #[cfg(feature = "nightly")]
        collection.extend_reserve(self.size_hint().0);
        TryCollect {
            seq: self,
            collection,
        }
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
