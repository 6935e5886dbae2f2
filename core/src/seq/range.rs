//! Arithmetic sequences.
//!
//! The `n`th element is computed directly as `start + n·step` rather than
//! by repeated addition, so floating-point steps do not drift. An element
//! is emitted iff it does not pass `end` under exact comparison: no
//! epsilon is applied, and `end` is included only when some `n` lands on
//! it exactly.

use core::{cmp::Ordering, fmt::Debug, pin::Pin};

use num_traits::{Num, NumCast};
use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::{
    error::{Error, Result},
    step::Step,
};

/// Numbers a [`Range`] can step through.
pub trait Numeric: Num + NumCast + PartialOrd + Copy + Debug {
    /// `start + n·step` (or `start - n·step` when `negate`), `None` once it
    /// is not representable.
    fn offset(start: Self, n: usize, step: Self, negate: bool) -> Option<Self>;

    /// How many elements lie between `start` and `end` inclusive when the
    /// answer is exact and representable.
    fn span_len(start: Self, end: Self, step: Self, negate: bool) -> Option<usize>;
}

macro_rules! integer_numeric {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn offset(start: Self, n: usize, step: Self, negate: bool) -> Option<Self> {
                // Widen first: `n` may not fit the element type even when
                // the element does (`i8::MIN + 255`).
                let wide = i128::try_from(n).ok().and_then(|n| {
                    let delta = n.checked_mul(<i128 as NumCast>::from(step)?)?;
                    let start = <i128 as NumCast>::from(start)?;
                    let value = if negate {
                        start.checked_sub(delta)?
                    } else {
                        start.checked_add(delta)?
                    };
                    <$t as NumCast>::from(value)
                });
                if wide.is_some() {
                    return wide;
                }
                let delta = <$t as NumCast>::from(n)?.checked_mul(step)?;
                if negate {
                    start.checked_sub(delta)
                } else {
                    start.checked_add(delta)
                }
            }

            fn span_len(start: Self, end: Self, step: Self, negate: bool) -> Option<usize> {
                let start = <i128 as NumCast>::from(start)?;
                let end = <i128 as NumCast>::from(end)?;
                let mut step = <i128 as NumCast>::from(step)?;
                if negate {
                    step = -step;
                }
                let steps = end.checked_sub(start)?.checked_div(step)?;
                usize::try_from(steps).ok()?.checked_add(1)
            }
        }
    )*};
}

integer_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_numeric {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn offset(start: Self, n: usize, step: Self, negate: bool) -> Option<Self> {
                let delta = <$t as NumCast>::from(n)? * step;
                Some(if negate { start - delta } else { start + delta })
            }

            // Rounding makes a closed form disagree with the exact
            // comparison rule, so float ranges are counted by draining.
            fn span_len(_: Self, _: Self, _: Self, _: bool) -> Option<usize> {
                None
            }
        }
    )*};
}

float_numeric!(f32, f64);

pin_project! {
    #[derive(Debug, Clone)]
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Range<T> {
        start: T,
        end: T,
        step: T,
        // Subtract `step` instead of adding it; lets unsigned ranges count
        // down with the default step.
        negate: bool,
        ascending: bool,
        index: usize,
        done: bool,
    }
}

impl<T: Numeric> Range<T> {
    /// A range from `start` to `end` inclusive, stepping by one in the
    /// direction of `end`.
    pub fn new(start: T, end: T) -> Self {
        let ascending = start <= end;
        Self {
            start,
            end,
            step: T::one(),
            negate: !ascending,
            ascending,
            index: 0,
            done: false,
        }
    }

    /// A range from `start` to `end` inclusive, stepping by `step`.
    ///
    /// `step` must be non-zero and point from `start` toward `end`; when
    /// the two are equal it must be positive.
    pub fn with_step(start: T, end: T, step: T) -> Result<Self> {
        if step == T::zero() {
            tracing::debug!(?start, ?end, "rejected zero range step");
            return Err(Error::ZeroStep);
        }
        let ascending = start <= end;
        if ascending != (step > T::zero()) {
            tracing::debug!(?start, ?end, ?step, "rejected range step direction");
            return Err(Error::StepDirection {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
                step: format!("{step:?}"),
            });
        }
        Ok(Self {
            start,
            end,
            step,
            negate: false,
            ascending,
            index: 0,
            done: false,
        })
    }

    // Values that do not compare with `end` (NaN) count as past it, so an
    // unordered range is empty.
    fn passes_end(&self, value: T) -> bool {
        match value.partial_cmp(&self.end) {
            Some(Ordering::Greater) => self.ascending,
            Some(Ordering::Less) => !self.ascending,
            Some(Ordering::Equal) => false,
            None => true,
        }
    }
}

impl<T: Numeric> Sequence for Range<T> {
    type Key = usize;
    type Value = T;

    fn pull(self: Pin<&mut Self>) -> Step<(usize, T)> {
        let this = self.get_mut();
        if this.done {
            return Step::Done;
        }

        match T::offset(this.start, this.index, this.step, this.negate) {
            Some(value) if !this.passes_end(value) => {
                let key = this.index;
                this.index += 1;
                Step::Ready((key, value))
            }
            _ => {
                this.done = true;
                Step::Done
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.exact_size() {
            Some(len) => (len, Some(len)),
            None if self.done => (0, Some(0)),
            None => (0, None),
        }
    }

    fn exact_size(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let total = T::span_len(self.start, self.end, self.step, self.negate)?;
        Some(total.saturating_sub(self.index))
    }
}

impl<T: Numeric> Rewind for Range<T> {
    fn rewind(self: Pin<&mut Self>) {
        let this = self.get_mut();
        this.index = 0;
        this.done = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, prelude::*};

    #[test]
    fn ascending_and_descending() {
        assert_eq!(range(1, 5).to_array().run(), vec![1, 2, 3, 4, 5]);
        assert_eq!(range(5, 1).to_array().run(), vec![5, 4, 3, 2, 1]);
        assert_eq!(range(3u8, 0).to_array().run(), vec![3, 2, 1, 0]);
        assert_eq!(range(7, 7).to_array().run(), vec![7]);
    }

    #[test]
    fn end_only_when_reachable() {
        let out = range_step(0, 10, 3).unwrap().to_array().run();
        assert_eq!(out, vec![0, 3, 6, 9]);
        let out = range_step(10, 0, -5).unwrap().to_array().run();
        assert_eq!(out, vec![10, 5, 0]);
    }

    #[test]
    fn float_steps_land_on_end() {
        let out = range_step(0.0, 3.0, 0.5).unwrap().to_array().run();
        assert_eq!(out.len(), 7);
        assert_eq!(out.last(), Some(&3.0));
    }

    #[test]
    fn unordered_float_bounds_are_empty() {
        assert_eq!(range(f64::NAN, 1.0).take(100).count().run(), 0);
        assert_eq!(range(0.0, f64::NAN).take(100).count().run(), 0);
        assert_eq!(range_step(1.0, 0.0, f64::NAN).unwrap().take(100).count().run(), 0);

        let mut seq = range(f32::NAN, 2.0);
        assert_eq!(seq.next(), None);
        core::pin::Pin::new(&mut seq).rewind();
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn invalid_steps_fail_at_construction() {
        assert_eq!(range_step(0, 5, 0).err(), Some(Error::ZeroStep));
        assert!(matches!(
            range_step(0, 5, -1),
            Err(Error::StepDirection { .. })
        ));
        assert!(matches!(
            range_step(5, 0, 1),
            Err(Error::StepDirection { .. })
        ));
        assert!(range_step(2, 2, -1).is_err());
    }

    #[test]
    fn stops_at_type_bounds() {
        let out = range_step(250u8, 255, 10).unwrap().to_array().run();
        assert_eq!(out, vec![250]);
        assert_eq!(range(i8::MIN, i8::MAX).count().run(), 256);
        assert_eq!(range(i8::MIN, i8::MAX).to_array().run().len(), 256);
    }

    #[test]
    fn integer_ranges_know_their_size() {
        let mut seq = range_step(0, 10, 3).unwrap();
        assert_eq!(seq.exact_size(), Some(4));
        seq.next();
        assert_eq!(seq.exact_size(), Some(3));
        assert_eq!(range(5, 1).exact_size(), Some(5));
        assert_eq!(range_step(0.0, 1.0, 0.25).unwrap().exact_size(), None);
    }
}
