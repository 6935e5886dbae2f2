use core::pin::Pin;

use pin_project_lite::pin_project;

use super::Sequence;
use crate::step::Step;

pin_project! {
    /// An explicit cursor over a sequence: a current element that can be
    /// inspected before it is taken.
    ///
    /// Looking at the head pulls at most one element and keeps it buffered,
    /// so draining the cursor afterwards still sees every element.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Cursor<S: Sequence> {
        #[pin]
        pub(super) seq: S,
        pub(super) head: Option<(S::Key, S::Value)>,
        pub(super) done: bool,
    }
}

impl<S: Sequence> Cursor<S> {
    pub(super) fn new(seq: S) -> Self {
        Self {
            seq,
            head: None,
            done: false,
        }
    }

    fn fill(self: Pin<&mut Self>) -> bool {
        let mut this = self.project();
        while this.head.is_none() && !*this.done {
            match this.seq.as_mut().pull() {
                Step::Ready(pair) => *this.head = Some(pair),
                Step::NotYet => {}
                Step::Done => *this.done = true,
            }
        }
        this.head.is_some()
    }
}

impl<S: Sequence + Unpin> Cursor<S> {
    /// Whether there is a current element.
    pub fn valid(&mut self) -> bool {
        Pin::new(self).fill()
    }

    pub fn key(&mut self) -> Option<&S::Key> {
        self.valid();
        self.head.as_ref().map(|(k, _)| k)
    }

    pub fn current(&mut self) -> Option<&S::Value> {
        self.valid();
        self.head.as_ref().map(|(_, v)| v)
    }

    /// Takes the current element, moving the cursor past it.
    pub fn advance(&mut self) -> Option<(S::Key, S::Value)> {
        self.valid();
        self.head.take()
    }

    /// Answers from the exact size when the source knows it, otherwise
    /// buffers the first element.
    pub fn is_empty(&mut self) -> bool {
        if self.head.is_some() {
            return false;
        }
        if let Some(len) = self.seq.exact_size() {
            tracing::trace!(len, "emptiness answered from exact size");
            return len == 0;
        }
        !self.valid()
    }
}

impl<S: Sequence> Sequence for Cursor<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Key, S::Value)> {
        let this = self.project();
        if let Some(pair) = this.head.take() {
            return Step::Ready(pair);
        }
        if *this.done {
            return Step::Done;
        }
        match this.seq.pull() {
            Step::Done => {
                *this.done = true;
                Step::Done
            }
            step => step,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let head = usize::from(self.head.is_some());
        if self.done {
            return (head, Some(head));
        }
        let (lo, hi) = self.seq.size_hint();
        (
            lo.saturating_add(head),
            hi.and_then(|hi| hi.checked_add(head)),
        )
    }

    fn exact_size(&self) -> Option<usize> {
        let head = usize::from(self.head.is_some());
        if self.done {
            Some(head)
        } else {
            self.seq.exact_size()?.checked_add(head)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn is_empty_keeps_the_head() {
        let mut cursor = to_seq(vec![1, 2, 3]).filter(|v| *v > 0).cursor();
        assert!(!cursor.is_empty());
        assert_eq!(cursor.to_array().run(), vec![1, 2, 3]);
    }

    #[test]
    fn is_empty_from_exact_size() {
        let pulls = std::cell::Cell::new(0);
        let mut cursor = to_seq(vec![1, 2, 3])
            .map(|v| {
                pulls.set(pulls.get() + 1);
                v
            })
            .cursor();
        assert!(!cursor.is_empty());
        assert_eq!(pulls.get(), 0);
        assert_eq!(cursor.count().run(), 3);
    }

    #[test]
    fn empty_after_filtering_everything() {
        let mut cursor = to_seq(vec![1, 3, 5]).filter(|v| v % 2 == 0).cursor();
        assert!(cursor.is_empty());
        assert!(!cursor.valid());
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn walk() {
        let mut cursor = to_seq(vec!['x', 'y']).cursor();
        assert_eq!(cursor.key(), Some(&0));
        assert_eq!(cursor.current(), Some(&'x'));
        assert_eq!(cursor.advance(), Some((0, 'x')));
        assert_eq!(cursor.current(), Some(&'y'));
        assert_eq!(cursor.advance(), Some((1, 'y')));
        assert!(!cursor.valid());
    }
}
