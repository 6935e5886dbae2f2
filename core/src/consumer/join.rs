use core::{fmt::Display, mem, pin::Pin};

use pin_project_lite::pin_project;

use super::Consumer;
use crate::{
    error::{Error, Result},
    seq::{flatten::Nested, Sequence},
    step::Step,
};

/// Values that may have a textual representation.
pub trait ToText {
    /// `None` when the value cannot be rendered as text.
    fn to_text(&self) -> Option<String>;
}

impl<T: Display + ?Sized> ToText for T {
    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<K, V: ToText> ToText for Nested<K, V> {
    fn to_text(&self) -> Option<String> {
        match self {
            Nested::Leaf(value) => value.to_text(),
            Nested::Seq(_) => None,
        }
    }
}

pin_project! {
    #[must_use = "consumers do nothing unless you execute them"]
    pub struct Join<S> {
        #[pin]
        pub(crate) seq: S,
        pub(crate) separator: String,
        pub(crate) out: String,
        pub(crate) position: usize,
    }
}

impl<S> Consumer for Join<S>
where
    S: Sequence,
    S::Value: ToText,
{
    type Output = Result<String>;

    fn consume(self: Pin<&mut Self>) -> Option<Self::Output> {
        let this = self.project();
        match this.seq.pull() {
            Step::NotYet => None,
            Step::Ready((_, v)) => {
                let position = *this.position;
                let Some(text) = v.to_text() else {
                    tracing::debug!(position, "value has no text representation");
                    return Some(Err(Error::NotStringable { position }));
                };
                if position > 0 {
                    this.out.push_str(this.separator);
                }
                this.out.push_str(&text);
                *this.position += 1;
                None
            }
            Step::Done => Some(Ok(mem::take(this.out))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, prelude::*};

    #[test]
    fn with_separator() {
        let out = to_seq(vec![1, 2, 3]).join(", ").run();
        assert_eq!(out, Ok("1, 2, 3".to_owned()));
        assert_eq!(to_seq(Vec::<u8>::new()).join(",").run(), Ok(String::new()));
    }

    #[test]
    fn nested_sequences_are_not_text() {
        let values = vec![
            Nested::leaf("a"),
            Nested::list(vec![Nested::leaf("b")]),
        ];
        let out = to_seq(values).join("-").run();
        assert_eq!(out, Err(Error::NotStringable { position: 1 }));
    }

    #[test]
    fn flattened_leaves_join() {
        let values = vec![
            Nested::leaf("a"),
            Nested::list(vec![Nested::leaf("b"), Nested::leaf("c")]),
        ];
        let out = to_seq(values).flatten(Bound::Unbounded).join("").run();
        assert_eq!(out, Ok("abc".to_owned()));
    }
}
