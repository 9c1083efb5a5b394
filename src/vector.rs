use alloc::collections::btree_map::{self, BTreeMap};
use core::cmp::Ordering;
use core::fmt;

use crate::error::{Result, VersionError};
use crate::{time, Counter, Occurred, Version};

/// An immutable version vector (vector clock).
///
/// Maps each replica identifier to a [`Counter`] of the events that replica
/// has contributed. Every operation that changes the vector returns a new
/// instance and leaves the receiver untouched, so versions can be shared
/// freely between threads and stored alongside the records they describe.
///
/// - [`append`](Self::append) records one more event for a replica.
/// - [`merge`](Self::merge) joins two histories (per-replica maximum).
/// - [`compare`](Version::compare) classifies two histories as identical,
///   before, after or concurrent.
///
/// Keys are never removed; a vector only grows.
///
/// # Example
///
/// ```
/// use vclock_kit::prelude::*;
///
/// let a = VersionVector::with_key("n1").append("n1");
/// let b = VersionVector::with_key("n2");
/// assert_eq!(a.compare(&b), Occurred::Concurrent);
///
/// let joined = a.merge(&b);
/// assert_eq!(joined.compare(&a), Occurred::After);
/// assert_eq!(joined.compare(&b), Occurred::After);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionVector<K: Ord> {
    creation_time: u64,
    entries: BTreeMap<K, Counter>,
}

impl<K: Ord + Clone> VersionVector<K> {
    /// An empty vector stamped with the current time.
    pub fn new() -> Self {
        Self::at(time::now_ms())
    }

    /// An empty vector with an explicit creation time in milliseconds.
    pub fn at(creation_time: u64) -> Self {
        Self {
            creation_time,
            entries: BTreeMap::new(),
        }
    }

    /// A vector holding a single event for `key`.
    pub fn with_key(key: K) -> Self {
        Self::new().append(key)
    }

    /// Record one more event for `key`.
    ///
    /// The returned vector keeps this vector's creation time.
    ///
    /// # Panics
    ///
    /// Panics if the counter for `key` is already `u64::MAX`. Use
    /// [`try_append`](Self::try_append) for vectors from untrusted sources.
    #[must_use]
    pub fn append(&self, key: K) -> Self {
        match self.advance(key) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked form of [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::MissingKey`] when `key` is `None`, and
    /// [`VersionError::CounterOverflow`] when the counter for `key` is
    /// already `u64::MAX`. In both cases `self` is unaffected and remains
    /// usable.
    pub fn try_append(&self, key: Option<K>) -> Result<Self> {
        match key {
            Some(key) => self.advance(key),
            None => {
                tracing::debug!(entries = self.entries.len(), "rejected append without key");
                Err(VersionError::MissingKey)
            }
        }
    }

    fn advance(&self, key: K) -> Result<Self> {
        let next = match self.entries.get(&key) {
            Some(counter) => counter.checked_increment(),
            None => Counter::init().checked_increment(),
        };
        let Some(next) = next else {
            tracing::debug!(entries = self.entries.len(), "rejected append at counter maximum");
            return Err(VersionError::CounterOverflow);
        };

        let mut entries = self.entries.clone();
        entries.insert(key, next);

        tracing::trace!(entries = entries.len(), counter = next.value(), "appended event");
        Ok(Self {
            creation_time: self.creation_time,
            entries,
        })
    }

    /// Join two histories.
    ///
    /// Every key from either side is kept. A key present on both sides gets
    /// the larger counter. The creation time is the earlier of the two.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut entries = self.entries.clone();
        for (key, counter) in &other.entries {
            match entries.get_mut(key) {
                Some(existing) => *existing = existing.merge(counter),
                None => {
                    entries.insert(key.clone(), *counter);
                }
            }
        }

        tracing::trace!(
            left = self.entries.len(),
            right = other.entries.len(),
            merged = entries.len(),
            "merged version vectors"
        );
        Self {
            creation_time: self.creation_time.min(other.creation_time),
            entries,
        }
    }
}

impl<K: Ord> VersionVector<K> {
    /// Milliseconds since the Unix epoch when the oldest ancestor of this
    /// vector was created.
    #[must_use]
    pub fn creation_time(&self) -> u64 {
        self.creation_time
    }

    /// `true` if any event from `key` is recorded.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of replicas with recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no events are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The counter for `key`, or `None` if the replica is unknown.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Counter> {
        self.entries.get(key)
    }

    /// Iterate over `(replica, counter)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, Counter> {
        self.entries.iter()
    }

    /// Alias for [`iter`](Self::iter).
    pub fn entries(&self) -> btree_map::Iter<'_, K, Counter> {
        self.iter()
    }

    /// Iterate over the known replicas in key order.
    pub fn keys(&self) -> btree_map::Keys<'_, K, Counter> {
        self.entries.keys()
    }

    /// Iterate over the counters in key order.
    pub fn values(&self) -> btree_map::Values<'_, K, Counter> {
        self.entries.values()
    }
}

impl<K: Ord + Clone> Default for VersionVector<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Version for VersionVector<K> {
    /// Classify `self` against `other`.
    ///
    /// A vector with fewer replicas is taken to be older without looking at
    /// the counters. With equal sizes the entries are walked in key order and
    /// the first key that differs decides the answer; a key missing on the
    /// other side means the two histories are concurrent.
    fn compare(&self, other: &Self) -> Occurred {
        let mut bigger_self = false;
        let mut bigger_other = false;

        match self.len().cmp(&other.len()) {
            Ordering::Less => bigger_other = true,
            Ordering::Greater => bigger_self = true,
            Ordering::Equal => {
                for (key, counter) in &self.entries {
                    let Some(theirs) = other.get(key) else {
                        bigger_self = true;
                        bigger_other = other.keys().any(|k| !self.contains(k));
                        break;
                    };

                    match counter.compare(theirs) {
                        Ordering::Less => {
                            bigger_other = true;
                            break;
                        }
                        Ordering::Greater => {
                            bigger_self = true;
                            break;
                        }
                        Ordering::Equal => {}
                    }
                }
            }
        }

        let occurred = match (bigger_self, bigger_other) {
            (false, false) => Occurred::Identical,
            (true, false) => Occurred::After,
            (false, true) => Occurred::Before,
            (true, true) => Occurred::Concurrent,
        };
        tracing::trace!(%occurred, "compared version vectors");
        occurred
    }
}

/// Two vectors are equal when they record the same counter for the same set
/// of replicas. Creation times and counter timestamps are ignored.
impl<K: Ord> PartialEq for VersionVector<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Ord> Eq for VersionVector<K> {}

impl<'a, K: Ord> IntoIterator for &'a VersionVector<K> {
    type Item = (&'a K, &'a Counter);
    type IntoIter = btree_map::Iter<'a, K, Counter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders `<creation_time>, {<key>: <counter>, ...}` for diagnostics.
impl<K: Ord + fmt::Display> fmt::Display for VersionVector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {{", self.creation_time)?;
        for (i, (key, counter)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {counter}")?;
        }
        f.write_str("}")
    }
}
