//! The pull protocol and every lazy combinator built on it.
//!
//! A [`Sequence`] produces `(key, value)` pairs one [`Step`] at a time.
//! Combinators wrap one or more upstream sequences and are sequences
//! themselves; nothing runs until a consumer starts pulling.

pub mod adapter;
pub mod chain;
pub mod chunk;
pub mod cursor;
pub mod drop_while;
pub mod enumerate;
pub mod ext;
pub mod filter;
pub mod flat_map;
pub mod flatten;
pub mod flip;
pub mod map;
pub mod product;
pub mod range;
pub mod reductions;
pub mod repeat;
pub mod replay;
pub mod slice;
pub mod stream;
pub mod take_while;
pub mod zip;

use core::{ops::DerefMut, pin::Pin};

use crate::step::Step;

/// A lazily produced, possibly infinite series of key-value pairs.
#[must_use = "sequences do nothing unless pulled"]
pub trait Sequence {
    type Key;
    type Value;

    /// Does at most one unit of work and reports what it produced.
    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// The exact number of remaining elements, when it is known without
    /// pulling.
    fn exact_size(&self) -> Option<usize> {
        None
    }
}

/// A sequence that can restart from its first element without losing data.
pub trait Rewind: Sequence {
    fn rewind(self: Pin<&mut Self>);
}

impl<S: Sequence + Unpin + ?Sized> Sequence for &mut S {
    type Key = S::Key;
    type Value = S::Value;

    fn pull(mut self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        S::pull(Pin::new(&mut **self))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        (**self).exact_size()
    }
}

impl<S: Rewind + Unpin + ?Sized> Rewind for &mut S {
    fn rewind(mut self: Pin<&mut Self>) {
        S::rewind(Pin::new(&mut **self))
    }
}

impl<P> Sequence for Pin<P>
where
    P: DerefMut + Unpin,
    P::Target: Sequence,
{
    type Key = <P::Target as Sequence>::Key;
    type Value = <P::Target as Sequence>::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        self.get_mut().as_mut().pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        (**self).exact_size()
    }
}

impl<P> Rewind for Pin<P>
where
    P: DerefMut + Unpin,
    P::Target: Rewind,
{
    fn rewind(self: Pin<&mut Self>) {
        self.get_mut().as_mut().rewind()
    }
}

/// A type-erased, heap-pinned sequence.
pub type BoxSequence<'a, K, V> = Pin<Box<dyn Sequence<Key = K, Value = V> + 'a>>;

/// Conversion into a [`Sequence`].
///
/// Implemented for every sequence (identity), owned and borrowed vectors,
/// slices and arrays, and owned and borrowed `BTreeMap`/`HashMap`. Other
/// iterables go through [`adapter::from_values`] or [`adapter::from_pairs`].
pub trait IntoSequence {
    type Key;
    type Value;
    type Seq: Sequence<Key = Self::Key, Value = Self::Value>;

    fn into_seq(self) -> Self::Seq;
}

impl<S: Sequence> IntoSequence for S {
    type Key = S::Key;
    type Value = S::Value;
    type Seq = S;

    #[inline]
    fn into_seq(self) -> Self::Seq {
        self
    }
}

/// Wraps any supported input into a [`Sequence`] without copying values.
///
/// ```
/// use lazyseq_core::prelude::*;
///
/// let squares = to_seq(vec![1, 2, 3]).map(|v| v * v).to_array().run();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[inline]
pub fn to_seq<T: IntoSequence>(input: T) -> T::Seq {
    input.into_seq()
}

/// Compile-time witness that `T` exposes the sequence capability.
///
/// A call only compiles when `T: IntoSequence`, so it always returns
/// `true`; types without the capability are rejected by the compiler
/// rather than answered with `false`. For a runtime answer over
/// heterogeneous nested data use [`flatten::Nested::is_iterable`].
#[inline]
pub const fn is_iterable<T: IntoSequence>(_: &T) -> bool {
    true
}
