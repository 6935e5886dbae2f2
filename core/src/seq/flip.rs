use core::pin::Pin;

use pin_project_lite::pin_project;

use super::{Rewind, Sequence};
use crate::step::Step;

pin_project! {
    /// Swaps each key with its value.
    #[must_use = "sequences do nothing unless pulled"]
    pub struct Flip<S> {
        #[pin]
        pub(super) seq: S,
    }
}

impl<S: Sequence> Sequence for Flip<S> {
    type Key = S::Value;
    type Value = S::Key;

    fn pull(self: Pin<&mut Self>) -> Step<(S::Value, S::Key)> {
        self.project().seq.pull().map(|(k, v)| (v, k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }

    fn exact_size(&self) -> Option<usize> {
        self.seq.exact_size()
    }
}

impl<S: Rewind> Rewind for Flip<S> {
    fn rewind(self: Pin<&mut Self>) {
        self.project().seq.rewind()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::prelude::*;

    #[test]
    fn flip_builds_reverse_lookup() {
        let lookup = to_seq(vec!["zero", "one", "two"])
            .flip()
            .to_array_with_keys::<BTreeMap<_, _>>()
            .run();
        assert_eq!(lookup["two"], 2);
        assert_eq!(lookup.len(), 3);
    }
}
