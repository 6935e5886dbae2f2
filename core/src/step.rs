/// The outcome of pulling a sequence once.
///
/// `NotYet` means the pull did a unit of upstream work (a rejected filter
/// candidate, a skipped prefix element) without producing an element. The
/// caller may pull again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    NotYet,
    Ready(T),
    Done,
}

impl<T> Step<T> {
    #[inline]
    pub fn map<G, F>(self, mut f: F) -> Step<G>
    where
        F: FnMut(T) -> G,
    {
        match self {
            Step::NotYet => Step::NotYet,
            Step::Ready(ready) => Step::Ready((f)(ready)),
            Step::Done => Step::Done,
        }
    }

    #[inline]
    pub fn and_then<G, F>(self, mut f: F) -> Step<G>
    where
        F: FnMut(T) -> Step<G>,
    {
        match self {
            Step::NotYet => Step::NotYet,
            Step::Ready(ready) => (f)(ready),
            Step::Done => Step::Done,
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Step<&T> {
        match self {
            Step::NotYet => Step::NotYet,
            Step::Ready(ready) => Step::Ready(ready),
            Step::Done => Step::Done,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    /// Converts to the element, discarding the difference between
    /// `NotYet` and `Done`.
    #[inline]
    pub fn ready(self) -> Option<T> {
        match self {
            Step::Ready(ready) => Some(ready),
            _ => None,
        }
    }
}

impl<K, V> Step<(K, V)> {
    /// Maps the value half of a pulled pair, leaving the key alone.
    #[inline]
    pub fn map_value<U, F>(self, mut f: F) -> Step<(K, U)>
    where
        F: FnMut(V) -> U,
    {
        self.map(|(k, v)| (k, f(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::Step;

    #[test]
    fn map_value_keeps_key() {
        let step = Step::Ready(("a", 2)).map_value(|v| v * 10);
        assert_eq!(step, Step::Ready(("a", 20)));
        assert_eq!(Step::<(u8, u8)>::NotYet.map_value(|v| v), Step::NotYet);
    }

    #[test]
    fn only_ready_carries_a_value() {
        let step: Step<u8> = Step::Ready(4);
        assert_eq!(step.as_ref().ready(), Some(&4));
        assert_eq!(step.and_then(|_| Step::<u8>::NotYet), Step::NotYet);
        assert_eq!(Step::<u8>::Done.ready(), None);
        assert!(Step::<u8>::Done.is_done());
    }
}
