//! Re-keying by position: `enumerate`, `keys` and `values`.

use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

macro_rules! positional {
    ($(#[$meta:meta])* $name:ident, $value:ty, |$k:ident, $v:ident| $emit:expr) => {
        pin_project! {
            $(#[$meta])*
            #[must_use = "sequences do nothing unless pulled"]
            pub struct $name<S> {
                #[pin]
                pub(super) seq: S,
                pub(super) index: usize,
            }
        }

        impl<S: Sequence> $name<S> {
            pub(super) fn new(seq: S) -> Self {
                Self { seq, index: 0 }
            }
        }

        impl<S: Sequence> Sequence for $name<S> {
            type Key = usize;
            type Value = $value;

            fn pull(self: Pin<&mut Self>) -> Step<(usize, Self::Value)> {
                let this = self.project();
                this.seq.pull().map(|($k, $v)| {
                    let index = *this.index;
                    *this.index += 1;
                    (index, $emit)
                })
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.seq.size_hint()
            }

            fn exact_size(&self) -> Option<usize> {
                self.seq.exact_size()
            }
        }

        impl<S: Rewind> Rewind for $name<S> {
            fn rewind(self: Pin<&mut Self>) {
                let this = self.project();
                *this.index = 0;
                this.seq.rewind();
            }
        }
    };
}

positional!(
    /// Keys `0..n`, each value the original `(key, value)` pair.
    Enumerate,
    (S::Key, S::Value),
    |k, v| (k, v)
);

positional!(
    /// The original keys, keyed `0..n`.
    Keys,
    S::Key,
    |k, _v| k
);

positional!(
    /// The original values, keyed `0..n`.
    Values,
    S::Value,
    |_k, v| v
);
