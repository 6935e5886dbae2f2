#![cfg_attr(feature = "nightly", feature(extend_one))]

//! Lazy key-value sequences.
//!
//! Every combinator is a [`Sequence`](seq::Sequence) that pulls its
//! upstream only on demand, and every eager operation is a
//! [`Consumer`](consumer::Consumer) that is executed explicitly.
//!
//! ```
//! use lazyseq_core::prelude::*;
//!
//! let total = range(1, 10)
//!     .filter(|v| v % 3 == 0)
//!     .map(|v| v * v)
//!     .reduce(0, |acc, v, _| acc + v)
//!     .run();
//! assert_eq!(total, 9 + 36 + 81);
//! ```

pub mod bound;
pub mod consumer;
pub mod error;
pub mod execution;
pub mod seq;
pub mod step;

use seq::{
    range::{Numeric, Range},
    repeat::Repeat,
};

pub use seq::{
    adapter::{from_pairs, from_values},
    chain::chain_all,
    is_iterable,
    product::product_all,
    to_seq,
    zip::{zip_all, zip_key_value},
};

/// `start..=end` stepping by one toward `end`.
pub fn range<T: Numeric>(start: T, end: T) -> Range<T> {
    Range::new(start, end)
}

/// `start..=end` stepping by `step`.
///
/// Fails with [`Error::ZeroStep`](error::Error::ZeroStep) or
/// [`Error::StepDirection`](error::Error::StepDirection) when `step` cannot
/// lead from `start` to `end`.
pub fn range_step<T: Numeric>(start: T, end: T, step: T) -> error::Result<Range<T>> {
    Range::with_step(start, end, step)
}

/// `value` repeated `times` times, or forever.
pub fn repeat<T: Clone>(value: T, times: bound::Bound) -> Repeat<T> {
    Repeat::new(value, times)
}

pub mod prelude {
    pub use crate::{
        bound::Bound,
        consumer::{Consumer, ConsumerExt},
        error::Error,
        range, range_step, repeat,
        seq::{
            cursor::Cursor, ext::SequenceExt, flatten::Nested, to_seq, IntoSequence, Rewind,
            Sequence,
        },
        step::Step,
    };
}
