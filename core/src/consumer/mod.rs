//! Eager operations.
//!
//! A [`Consumer`] owns a sequence and folds it into a single output. Each
//! call to [`Consumer::consume`] does one bounded unit of work, so the same
//! consumer can be driven to completion on the spot with
//! [`ConsumerExt::run`] or cooperatively inside a future with
//! [`ConsumerExt::yield_by`].

pub mod collect;
pub mod count;
pub mod join;
pub mod partition;
pub mod reduce;
pub mod search;
pub mod try_collect;

use core::pin::{pin, Pin};

use crate::{
    error::{Error, Result},
    execution::yield_by::YieldBy,
};

#[must_use = "consumers do nothing unless you execute them"]
pub trait Consumer {
    type Output;

    /// Advances by one pull. Returns the output once the consumer has
    /// finished, `None` while there is work left.
    fn consume(self: Pin<&mut Self>) -> Option<Self::Output>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

pub trait ConsumerExt: Consumer {
    /// Drives the consumer to completion on the current thread.
    fn run(self) -> Self::Output
    where
        Self: Sized,
    {
        let mut consumer = pin!(self);
        let mut steps = 0usize;
        loop {
            steps += 1;
            if let Some(output) = consumer.as_mut().consume() {
                tracing::trace!(steps, "consumer finished");
                return output;
            }
        }
    }

    /// A future that drives the consumer, yielding to the executor after
    /// every `step` pulls.
    fn yield_by(self, step: usize) -> Result<YieldBy<Self>>
    where
        Self: Sized,
    {
        if step == 0 {
            tracing::debug!("rejected zero yield step");
            return Err(Error::YieldStep);
        }

        Ok(YieldBy {
            consumer: self,
            n: 0,
            step,
        })
    }
}

impl<C: Consumer + ?Sized> ConsumerExt for C {}
