use core::{fmt, pin::Pin};

use pin_project_lite::pin_project;

use super::{BoxSequence, IntoSequence, Sequence};
use crate::{bound::Bound, step::Step};

/// A value that is either a leaf or a further sequence of nested values.
///
/// Heterogeneous nested data (`[1, [2, [3, 4]], [5]]`) is modelled with this
/// type so [`flatten`](crate::seq::ext::SequenceExt::flatten) can decide at
/// run time which elements to descend into.
pub enum Nested<K, V> {
    Leaf(V),
    Seq(BoxSequence<'static, K, Nested<K, V>>),
}

impl<K, V> Nested<K, V> {
    pub fn leaf(value: V) -> Self {
        Nested::Leaf(value)
    }

    pub fn seq<I>(input: I) -> Self
    where
        I: IntoSequence<Key = K, Value = Nested<K, V>>,
        I::Seq: 'static,
    {
        Nested::Seq(Box::pin(input.into_seq()))
    }

    /// `true` for sub-sequences, `false` for leaves.
    #[inline]
    pub fn is_iterable(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }

    pub fn into_leaf(self) -> Option<V> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }
}

impl<V: 'static> Nested<usize, V> {
    /// A positional list of nested values.
    pub fn list(items: Vec<Nested<usize, V>>) -> Self {
        Nested::seq(items)
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Nested<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Nested::Seq(_) => f.write_str("Seq(..)"),
        }
    }
}

pin_project! {
    /// Splices nested sub-sequences into the outer sequence.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Flatten<S: Sequence> {
        #[pin]
        pub(super) seq: S,
        pub(super) stack: Vec<BoxSequence<'static, S::Key, S::Value>>,
        pub(super) levels: Bound,
    }
}

impl<S: Sequence> Flatten<S> {
    pub(super) fn new(seq: S, levels: Bound) -> Self {
        Self {
            seq,
            stack: Vec::new(),
            levels,
        }
    }
}

impl<S, K, V> Sequence for Flatten<S>
where
    S: Sequence<Key = K, Value = Nested<K, V>>,
{
    type Key = K;
    type Value = Nested<K, V>;

    fn pull(self: Pin<&mut Self>) -> Step<(K, Nested<K, V>)> {
        let this = self.project();
        let (key, value) = match this.stack.last_mut() {
            Some(inner) => match inner.as_mut().pull() {
                Step::Ready(pair) => pair,
                Step::NotYet => return Step::NotYet,
                Step::Done => {
                    this.stack.pop();
                    return Step::NotYet;
                }
            },
            None => match this.seq.pull() {
                Step::Ready(pair) => pair,
                Step::NotYet => return Step::NotYet,
                Step::Done => return Step::Done,
            },
        };

        let descend = match this.levels.limit() {
            None => true,
            Some(levels) => this.stack.len() < levels,
        };
        match value {
            Nested::Seq(inner) if descend => {
                this.stack.push(inner);
                Step::NotYet
            }
            value => Step::Ready((key, value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.levels.is_exhausted() {
            self.seq.size_hint()
        } else {
            (0, None)
        }
    }

    fn exact_size(&self) -> Option<usize> {
        if self.levels.is_exhausted() {
            self.seq.exact_size()
        } else {
            None
        }
    }
}
