use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    /// Pairs up values of two sequences, keyed `0..`. Stops as soon as
    /// either side is exhausted.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Zip<A: Sequence, B> {
        #[pin]
        pub(super) a: A,
        #[pin]
        pub(super) b: B,
        // Left value waiting for the right side to produce.
        pub(super) pending: Option<A::Value>,
        pub(super) index: usize,
        pub(super) done: bool,
    }
}

impl<A: Sequence, B> Zip<A, B> {
    pub(super) fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            pending: None,
            index: 0,
            done: false,
        }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Key = usize;
    type Value = (A::Value, B::Value);

    fn pull(self: Pin<&mut Self>) -> Step<(usize, Self::Value)> {
        let this = self.project();
        if *this.done {
            return Step::Done;
        }

        let left = match this.pending.take() {
            Some(left) => left,
            None => match this.a.pull() {
                Step::Ready((_, value)) => value,
                Step::NotYet => return Step::NotYet,
                Step::Done => {
                    *this.done = true;
                    return Step::Done;
                }
            },
        };

        match this.b.pull() {
            Step::Ready((_, right)) => {
                let index = *this.index;
                *this.index += 1;
                Step::Ready((index, (left, right)))
            }
            Step::NotYet => {
                *this.pending = Some(left);
                Step::NotYet
            }
            Step::Done => {
                *this.done = true;
                Step::Done
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let pending = usize::from(self.pending.is_some());
        let (lo_a, hi_a) = self.a.size_hint();
        let (lo_b, hi_b) = self.b.size_hint();
        let lo = lo_a.saturating_add(pending).min(lo_b);
        let hi = match (hi_a.and_then(|a| a.checked_add(pending)), hi_b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
        (lo, hi)
    }

    fn exact_size(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let a = self
            .a
            .exact_size()?
            .checked_add(usize::from(self.pending.is_some()))?;
        Some(a.min(self.b.exact_size()?))
    }
}

impl<A: Rewind, B: Rewind> Rewind for Zip<A, B> {
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        *this.pending = None;
        *this.index = 0;
        *this.done = false;
        this.a.rewind();
        this.b.rewind();
    }
}

pin_project! {
    /// Uses the values of `keys` as keys for the values of `values`.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct ZipKeyValue<A: Sequence, B> {
        #[pin]
        pub(super) zip: Zip<A, B>,
    }
}

impl<A: Sequence, B: Sequence> Sequence for ZipKeyValue<A, B> {
    type Key = A::Value;
    type Value = B::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(A::Value, B::Value)> {
        self.project().zip.pull().map(|(_, pair)| pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.zip.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.zip.exact_size()
    }
}

impl<A: Rewind, B: Rewind> Rewind for ZipKeyValue<A, B> {
    fn rewind(self: Pin<&mut Self>) {
        self.project().zip.rewind()
    }
}

/// Builds a [`ZipKeyValue`]: `keys` supplies keys, `values` supplies values.
pub fn zip_key_value<A: Sequence, B: Sequence>(keys: A, values: B) -> ZipKeyValue<A, B> {
    ZipKeyValue {
        zip: Zip::new(keys, values),
    }
}

/// Zips any number of same-typed sequences into rows of values.
#[must_use = "sequences do nothing unless pulled"]
pub struct ZipAll<S: Sequence> {
    pub(super) seqs: Vec<S>,
    pub(super) row: Vec<S::Value>,
    pub(super) index: usize,
    pub(super) done: bool,
}

impl<S: Sequence + Unpin> Unpin for ZipAll<S> {}

impl<S: Sequence + Unpin> Sequence for ZipAll<S> {
    type Key = usize;
    type Value = Vec<S::Value>;

    fn pull(self: Pin<&mut Self>) -> Step<(usize, Vec<S::Value>)> {
        let this = self.get_mut();
        if this.done {
            return Step::Done;
        }
        if this.seqs.is_empty() {
            this.done = true;
            return Step::Done;
        }

        // Resume where a previous pull stopped on `NotYet`.
        while let Some(seq) = this.seqs.get_mut(this.row.len()) {
            match Pin::new(seq).pull() {
                Step::Ready((_, value)) => this.row.push(value),
                Step::NotYet => return Step::NotYet,
                Step::Done => {
                    this.row.clear();
                    this.done = true;
                    return Step::Done;
                }
            }
        }

        let row = core::mem::replace(&mut this.row, Vec::with_capacity(this.seqs.len()));
        let index = this.index;
        this.index += 1;
        Step::Ready((index, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.seqs.is_empty() {
            return (0, Some(0));
        }
        self.seqs
            .iter()
            .map(Sequence::size_hint)
            .fold((usize::MAX, None), |(lo, hi), (l, h)| {
                let hi = match (hi, h) {
                    (Some(a), Some(b)) => Some(core::cmp::min(a, b)),
                    (a, b) => a.or(b),
                };
                (lo.min(l), hi)
            })
    }
}

impl<S: Rewind + Unpin> Rewind for ZipAll<S> {
    fn rewind(self: Pin<&mut Self>) {
        let this = self.get_mut();
        for seq in &mut this.seqs {
            Pin::new(seq).rewind();
        }
        this.row.clear();
        this.index = 0;
        this.done = false;
    }
}

/// Builds a [`ZipAll`] over `seqs`. With no inputs the result is empty.
pub fn zip_all<I>(seqs: I) -> ZipAll<I::Item>
where
    I: IntoIterator,
    I::Item: Sequence + Unpin,
{
    let seqs: Vec<_> = seqs.into_iter().collect();
    ZipAll {
        row: Vec::with_capacity(seqs.len()),
        seqs,
        index: 0,
        done: false,
    }
}

/// Zips two or more sequences into flat tuples of values.
///
/// ```
/// use lazyseq_core::{prelude::*, zip};
///
/// let rows = zip!(to_seq(vec![1, 2]), to_seq(vec!['a', 'b']), to_seq(vec![true]))
///     .to_array()
///     .run();
/// assert_eq!(rows, vec![(1, 'a', true)]);
/// ```
#[macro_export]
macro_rules! zip {
    ($a:expr, $b:expr $(,)?) => {
        $crate::seq::ext::SequenceExt::zip($a, $b)
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::seq::ext::SequenceExt::map(
            $crate::zip!($crate::zip!($a, $b), $c),
            |((a, b), c)| (a, b, c),
        )
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::seq::ext::SequenceExt::map(
            $crate::zip!($crate::zip!($a, $b, $c), $d),
            |((a, b, c), d)| (a, b, c, d),
        )
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::seq::ext::SequenceExt::map(
            $crate::zip!($crate::zip!($a, $b, $c, $d), $e),
            |((a, b, c, d), e)| (a, b, c, d, e),
        )
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr $(,)?) => {
        $crate::seq::ext::SequenceExt::map(
            $crate::zip!($crate::zip!($a, $b, $c, $d, $e), $f),
            |((a, b, c, d, e), f)| (a, b, c, d, e, f),
        )
    };
}
