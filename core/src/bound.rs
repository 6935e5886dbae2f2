//! The "unbounded or at most `n`" sentinel used by `repeat`, `slice` and
//! `flatten`.

use crate::error::{Error, Result};

/// An element count that may be unbounded.
///
/// Kept separate from numeric infinity so integer and floating contexts
/// share one honest type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bound {
    #[default]
    Unbounded,
    Limit(usize),
}

impl Bound {
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        match self {
            Bound::Unbounded => None,
            Bound::Limit(n) => Some(*n),
        }
    }

    /// `true` once a limit has been counted down to zero.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Bound::Limit(0))
    }

    /// Counts one element against the limit.
    #[inline]
    pub(crate) fn decrement(&mut self) {
        if let Bound::Limit(n) = self {
            *n = n.saturating_sub(1);
        }
    }

    /// Clamps an upper size bound to this limit.
    #[inline]
    pub(crate) fn clamp(&self, upper: Option<usize>) -> Option<usize> {
        match (self, upper) {
            (Bound::Unbounded, upper) => upper,
            (Bound::Limit(n), Some(upper)) => Some(upper.min(*n)),
            (Bound::Limit(n), None) => Some(*n),
        }
    }
}

impl From<usize> for Bound {
    fn from(n: usize) -> Self {
        Bound::Limit(n)
    }
}

impl From<Option<usize>> for Bound {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Bound::Unbounded, Bound::Limit)
    }
}

impl TryFrom<i64> for Bound {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        non_negative("count", value).map(Bound::Limit)
    }
}

/// Validates a signed count, offset or level.
pub fn non_negative(what: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        tracing::debug!(what, value, "rejected negative argument");
        Error::Negative { what, value }
    })
}

#[cfg(test)]
mod tests {
    use super::{non_negative, Bound};
    use crate::error::Error;

    #[test]
    fn signed_counts() {
        assert_eq!(Bound::try_from(3i64), Ok(Bound::Limit(3)));
        assert_eq!(
            Bound::try_from(-1i64),
            Err(Error::Negative {
                what: "count",
                value: -1
            })
        );
        assert!(non_negative("slice offset", -5).is_err());
        assert_eq!(non_negative("levels", 0), Ok(0));
    }

    #[test]
    fn clamp_and_countdown() {
        let mut bound = Bound::Limit(2);
        assert_eq!(bound.clamp(Some(10)), Some(2));
        assert_eq!(bound.clamp(None), Some(2));
        assert_eq!(Bound::Unbounded.clamp(None), None);
        bound.decrement();
        bound.decrement();
        assert!(bound.is_exhausted());
        bound.decrement();
        assert_eq!(bound, Bound::Limit(0));
    }
}
