//! Cartesian products. The rightmost operand varies fastest and is
//! re-iterated once per combination of the operands before it, so every
//! operand but the first must be [`Rewind`]. Wrap anything else in
//! [`Replay`](super::replay::Replay) first.

use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Product<A: Sequence, B> {
        #[pin]
        pub(super) a: A,
        #[pin]
        pub(super) b: B,
        pub(super) left: Option<(A::Key, A::Value)>,
        pub(super) done: bool,
    }
}

impl<A: Sequence, B> Product<A, B> {
    pub(super) fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            left: None,
            done: false,
        }
    }
}

impl<A, B> Sequence for Product<A, B>
where
    A: Sequence,
    A::Key: Clone,
    A::Value: Clone,
    B: Rewind,
{
    type Key = (A::Key, B::Key);
    type Value = (A::Value, B::Value);

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        let mut this = self.project();
        if *this.done {
            return Step::Done;
        }

        if this.left.is_none() {
            match this.a.pull() {
                Step::Ready(left) => {
                    this.b.as_mut().rewind();
                    *this.left = Some(left);
                }
                Step::NotYet => return Step::NotYet,
                Step::Done => {
                    *this.done = true;
                    return Step::Done;
                }
            }
        }

        let Some((left_key, left_value)) = this.left.as_ref() else {
            return Step::NotYet;
        };
        match this.b.pull() {
            Step::Ready((k, v)) => Step::Ready(((left_key.clone(), k), (left_value.clone(), v))),
            Step::NotYet => Step::NotYet,
            Step::Done => {
                tracing::trace!("right operand exhausted, advancing left");
                *this.left = None;
                Step::NotYet
            }
        }
    }
}

impl<A, B> Rewind for Product<A, B>
where
    A: Rewind,
    A::Key: Clone,
    A::Value: Clone,
    B: Rewind,
{
    fn rewind(self: Pin<&mut Self>) {
        let this = self.project();
        *this.left = None;
        *this.done = false;
        this.a.rewind();
    }
}

/// Cartesian product over a runtime number of same-typed operands.
///
/// Keys and values come out as one `Vec` per combination. With no operands
/// there is exactly one, empty, combination.
#[must_use = "sequences do nothing unless pulled"]
pub struct ProductAll<S: Sequence> {
    pub(super) seqs: Vec<S>,
    pub(super) keys: Vec<S::Key>,
    pub(super) values: Vec<S::Value>,
    // The operand at `keys.len()` must restart before its next pull.
    pub(super) fresh: bool,
    pub(super) done: bool,
}

impl<S: Sequence + Unpin> Unpin for ProductAll<S> {}

impl<S> Sequence for ProductAll<S>
where
    S: Rewind + Unpin,
    S::Key: Clone,
    S::Value: Clone,
{
    type Key = Vec<S::Key>;
    type Value = Vec<S::Value>;

    fn pull(self: Pin<&mut Self>) -> Step<(Self::Key, Self::Value)> {
        let this = self.get_mut();
        if this.done {
            return Step::Done;
        }
        if this.seqs.is_empty() {
            this.done = true;
            return Step::Ready((Vec::new(), Vec::new()));
        }

        loop {
            let depth = this.keys.len();
            let mut seq = Pin::new(&mut this.seqs[depth]);
            if this.fresh {
                seq.as_mut().rewind();
                this.fresh = false;
            }

            match seq.pull() {
                Step::Ready((k, v)) => {
                    if depth + 1 == this.seqs.len() {
                        let mut keys = this.keys.clone();
                        keys.push(k);
                        let mut values = this.values.clone();
                        values.push(v);
                        return Step::Ready((keys, values));
                    }
                    this.keys.push(k);
                    this.values.push(v);
                    this.fresh = true;
                }
                Step::NotYet => return Step::NotYet,
                Step::Done => {
                    if this.keys.pop().is_none() {
                        this.done = true;
                        return Step::Done;
                    }
                    this.values.pop();
                }
            }
        }
    }
}

impl<S> Rewind for ProductAll<S>
where
    S: Rewind + Unpin,
    S::Key: Clone,
    S::Value: Clone,
{
    fn rewind(self: Pin<&mut Self>) {
        let this = self.get_mut();
        this.keys.clear();
        this.values.clear();
        this.fresh = true;
        this.done = false;
    }
}

/// Builds a [`ProductAll`] over `seqs`.
pub fn product_all<I>(seqs: I) -> ProductAll<I::Item>
where
    I: IntoIterator,
    I::Item: Rewind + Unpin,
{
    let seqs: Vec<_> = seqs.into_iter().collect();
    ProductAll {
        keys: Vec::with_capacity(seqs.len()),
        values: Vec::with_capacity(seqs.len()),
        seqs,
        fresh: true,
        done: false,
    }
}

/// Cartesian product of two or more sequences with flat key and value
/// tuples. Every operand after the first must be [`Rewind`].
#[macro_export]
macro_rules! product {
    ($a:expr, $b:expr $(,)?) => {
        $crate::seq::ext::SequenceExt::product($a, $b)
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::__flat_product!($crate::product!($a, $b), $c, |((a, b), c)| (a, b, c))
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::__flat_product!(
            $crate::product!($a, $b, $c),
            $d,
            |((a, b, c), d)| (a, b, c, d)
        )
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::__flat_product!(
            $crate::product!($a, $b, $c, $d),
            $e,
            |((a, b, c, d), e)| (a, b, c, d, e)
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flat_product {
    ($left:expr, $right:expr, |$pat:pat_param| $flat:expr) => {
        $crate::seq::ext::SequenceExt::map(
            $crate::seq::ext::SequenceExt::map_keys(
                $crate::seq::ext::SequenceExt::product($left, $right),
                |$pat| $flat,
            ),
            |$pat| $flat,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::product_all;
    use crate::prelude::*;

    #[test]
    fn rightmost_varies_fastest() {
        let out = range(1, 2)
            .product(range(3, 4))
            .to_array()
            .run();
        assert_eq!(out, vec![(1, 3), (1, 4), (2, 3), (2, 4)]);
    }

    #[test]
    fn keys_are_key_tuples() {
        let keys = to_seq(vec!['a', 'b'])
            .product(to_seq(&['x', 'y'][..]))
            .keys()
            .to_array()
            .run();
        assert_eq!(keys, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn replay_makes_any_operand_usable() {
        let right = to_seq(vec![10, 20]).map(|v| v + 1).rewindable();
        let sums = to_seq(vec![1, 2]).product(right).map(|(a, b)| a + b).to_array().run();
        assert_eq!(sums, vec![12, 22, 13, 23]);
    }

    #[test]
    fn empty_operand_yields_nothing() {
        let empty: Vec<u8> = Vec::new();
        let out = to_seq(vec![1, 2, 3]).product(to_seq(&empty)).count().run();
        assert_eq!(out, 0);
    }

    #[test]
    fn product_macro_three_way() {
        let out = crate::product!(
            range(0, 1),
            range(0, 1),
            range(0, 1)
        )
        .to_array_with_keys::<Vec<_>>()
        .run();
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], ((0, 0, 0), (0, 0, 0)));
        assert_eq!(out[5].1, (1, 0, 1));
    }

    #[test]
    fn product_all_matches_nested_loops() {
        let seqs = vec![
            range(1, 2),
            range(3, 3),
            range(5, 6),
        ];
        let rows = product_all(seqs).to_array().run();
        assert_eq!(
            rows,
            vec![vec![1, 3, 5], vec![1, 3, 6], vec![2, 3, 5], vec![2, 3, 6]]
        );
    }

    #[test]
    fn product_all_edges() {
        let nothing: Vec<crate::seq::range::Range<i32>> = Vec::new();
        let rows = product_all(nothing).to_array_with_keys::<Vec<_>>().run();
        assert_eq!(rows, vec![(vec![], vec![])]);

        let (full, empty): ([u8; 2], [u8; 0]) = ([1, 2], []);
        let with_empty = vec![to_seq(&full[..]), to_seq(&empty[..]), to_seq(&full[..])];
        assert_eq!(product_all(with_empty).count().run(), 0);
    }

    #[test]
    fn product_all_rewinds() {
        fn assert_unpin<T: Unpin>(_: &T) {}

        let mut rows = product_all(vec![range(0, 1), range(0, 1)]);
        assert_unpin(&rows);
        assert_eq!(rows.next(), Some((vec![0, 0], vec![0, 0])));
        assert_eq!(rows.next(), Some((vec![0, 1], vec![0, 1])));
        core::pin::Pin::new(&mut rows).rewind();
        assert_eq!(rows.count().run(), 4);
    }
}
