use core::{mem, pin::Pin};

use pin_project_lite::pin_project;

use super::Sequence;
use crate::{
    error::{Error, Result},
    step::Step,
};

pin_project! {
    /// Groups consecutive elements into batches of `size`, keyed `0..`.
    ///
    /// A batch is emitted as soon as it fills; a final shorter batch holds
    /// any remainder. `entry` decides what a batch stores per element.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Chunk<S: Sequence, T> {
        #[pin]
        pub(super) seq: S,
        pub(super) size: usize,
        pub(super) batch: Vec<T>,
        pub(super) entry: fn(S::Key, S::Value) -> T,
        pub(super) index: usize,
        pub(super) done: bool,
    }
}

impl<S: Sequence, T> Chunk<S, T> {
    pub(super) fn new(seq: S, size: usize, entry: fn(S::Key, S::Value) -> T) -> Result<Self> {
        if size == 0 {
            tracing::debug!("rejected zero chunk size");
            return Err(Error::ChunkSize);
        }
        Ok(Self {
            seq,
            size,
            batch: Vec::new(),
            entry,
            index: 0,
            done: false,
        })
    }
}

impl<S: Sequence, T> Sequence for Chunk<S, T> {
    type Key = usize;
    type Value = Vec<T>;

    fn pull(self: Pin<&mut Self>) -> Step<(usize, Vec<T>)> {
        let mut this = self.project();
        if *this.done {
            return Step::Done;
        }

        let batch = match this.seq.as_mut().pull() {
            Step::NotYet => return Step::NotYet,
            Step::Ready((k, v)) => {
                if this.batch.capacity() == 0 {
                    // Capped by what upstream still expects to yield.
                    let expected = this.seq.size_hint().0.saturating_add(1);
                    this.batch.reserve_exact(expected.min(*this.size));
                }
                this.batch.push((this.entry)(k, v));
                if this.batch.len() < *this.size {
                    return Step::NotYet;
                }
                mem::take(this.batch)
            }
            Step::Done => {
                *this.done = true;
                if this.batch.is_empty() {
                    return Step::Done;
                }
                mem::take(this.batch)
            }
        };

        let index = *this.index;
        *this.index += 1;
        Step::Ready((index, batch))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let pending = self.batch.len();
        let (lo, hi) = self.seq.size_hint();
        let lo = lo.saturating_add(pending).div_ceil(self.size);
        let hi = hi
            .and_then(|hi| hi.checked_add(pending))
            .map(|hi| hi.div_ceil(self.size));
        (lo, hi)
    }

    fn exact_size(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }
        let pending = self.seq.exact_size()?.checked_add(self.batch.len())?;
        Some(pending.div_ceil(self.size))
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, prelude::*};

    #[test]
    fn remainder_batch() {
        let batches = to_seq(vec![1, 2, 3, 4, 5]).chunk(3).unwrap().to_array().run();
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail() {
        let seq = range(1, 4).chunk(2).unwrap();
        assert_eq!(seq.exact_size(), Some(2));
        assert_eq!(seq.to_array().run(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn preserved_keys_inside_batches() {
        let batches = to_seq(vec!['a', 'b', 'c'])
            .map_keys(|k| k + 100)
            .chunk_with_keys(2)
            .unwrap()
            .to_array_with_keys::<Vec<_>>()
            .run();
        assert_eq!(
            batches,
            vec![
                (0, vec![(100, 'a'), (101, 'b')]),
                (1, vec![(102, 'c')])
            ]
        );
    }

    #[test]
    fn zero_size_is_rejected_eagerly() {
        let err = repeat(1, Bound::Unbounded).chunk(0).err();
        assert_eq!(err, Some(Error::ChunkSize));
    }

    #[test]
    fn huge_size_collects_everything_in_one_batch() {
        let batches = to_seq(vec![1, 2, 3]).chunk(usize::MAX).unwrap().to_array().run();
        assert_eq!(batches, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn size_hint_saturates_on_unbounded_input() {
        let mut batches = repeat(1, Bound::Unbounded).chunk(2).unwrap();
        assert_eq!(core::pin::Pin::new(&mut batches).pull(), Step::NotYet);
        assert_eq!(batches.size_hint(), (usize::MAX / 2 + 1, None));
        assert_eq!(batches.next(), Some((0, vec![1, 1])));
    }

    #[test]
    fn empty_input_has_no_batches() {
        let batches = to_seq(Vec::<u8>::new()).chunk(4).unwrap().count().run();
        assert_eq!(batches, 0);
    }
}
