use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::time;

/// The event count recorded for one replica inside a
/// [`VersionVector`](crate::VersionVector).
///
/// A `Counter` is immutable: [`increment`](Counter::increment) and
/// [`merge`](Counter::merge) return a fresh value. Each instance also records
/// when it was constructed, but that timestamp is diagnostic only. Equality,
/// ordering and hashing look at the count alone.
///
/// # Example
///
/// ```
/// use vclock_kit::Counter;
///
/// let a = Counter::init().increment().increment();
/// let b = Counter::init().increment();
///
/// assert_eq!(a.value(), 2);
/// assert!(a > b);
/// assert_eq!(a.merge(&b).value(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    value: u64,
    created_at: u64,
}

impl Counter {
    /// A counter that has seen no events.
    #[must_use]
    pub fn init() -> Self {
        Self::with_value(0)
    }

    pub(crate) fn with_value(value: u64) -> Self {
        Self {
            value,
            created_at: time::now_ms(),
        }
    }

    /// The next counter in this replica's sequence.
    ///
    /// # Panics
    ///
    /// Panics if the count is already `u64::MAX`. Use
    /// [`checked_increment`](Self::checked_increment) to handle that case.
    #[must_use]
    pub fn increment(&self) -> Self {
        match self.checked_increment() {
            Some(next) => next,
            None => panic!("counter overflow: cannot increment past {}", u64::MAX),
        }
    }

    /// The next counter in this replica's sequence, or `None` if the count
    /// is already `u64::MAX`.
    #[must_use]
    pub fn checked_increment(&self) -> Option<Self> {
        self.value.checked_add(1).map(Self::with_value)
    }

    /// The larger of the two counts.
    ///
    /// The result is stamped with the current time, not with either input's
    /// timestamp.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::with_value(self.value.max(other.value))
    }

    /// Compare event counts. Timestamps are ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// Number of events recorded.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Milliseconds since the Unix epoch when this instance was built.
    #[must_use]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }
}

impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Counter {}

impl PartialOrd for Counter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Counter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn stamped(value: u64, created_at: u64) -> Counter {
        Counter { value, created_at }
    }

    #[test]
    fn init_is_zero() {
        assert_eq!(Counter::init().value(), 0);
    }

    #[test]
    fn increment_adds_one() {
        let c = Counter::init().increment();
        assert_eq!(c.value(), 1);
        assert_eq!(c.increment().value(), 2);
    }

    #[test]
    fn increment_leaves_receiver_untouched() {
        let c = Counter::init();
        let _next = c.increment();
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn checked_increment_stops_at_max() {
        assert_eq!(stamped(u64::MAX, 0).checked_increment(), None);
        assert_eq!(
            stamped(u64::MAX - 1, 0).checked_increment().map(|c| c.value()),
            Some(u64::MAX)
        );
    }

    #[test]
    #[should_panic(expected = "counter overflow")]
    fn increment_panics_at_max() {
        let _ = stamped(u64::MAX, 0).increment();
    }

    #[cfg(feature = "std")]
    #[test]
    fn derived_counters_are_stamped_fresh() {
        let old = stamped(4, 0);
        assert_ne!(old.increment().created_at(), 0);
        assert_ne!(old.merge(&stamped(2, 0)).created_at(), 0);
        assert_ne!(stamped(1, 0).merge(&old).created_at(), 0);
    }

    #[test]
    fn merge_takes_max() {
        let low = stamped(3, 0);
        let high = stamped(7, 0);
        assert_eq!(low.merge(&high).value(), 7);
        assert_eq!(high.merge(&low).value(), 7);
        assert_eq!(low.merge(&low).value(), 3);
    }

    #[test]
    fn compare_uses_value_only() {
        let old = stamped(5, 1);
        let new = stamped(5, 9_999);
        assert_eq!(old.compare(&new), Ordering::Equal);
        assert_eq!(old, new);

        assert_eq!(stamped(1, 100).compare(&stamped(2, 0)), Ordering::Less);
        assert_eq!(stamped(2, 0).compare(&stamped(1, 100)), Ordering::Greater);
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(stamped(42, 7).to_string(), "42");
    }
}
