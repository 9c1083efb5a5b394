use core::fmt;

/// How one version relates causally to another.
///
/// Produced by [`Version::compare`]. The classification is always from the
/// receiver's point of view: `a.compare(&b) == Occurred::After` means `a`
/// supersedes `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occurred {
    /// Both versions describe the same causal history.
    Identical,
    /// The receiver happened after the other version.
    After,
    /// The receiver happened before the other version.
    Before,
    /// Neither version dominates; the writes conflict.
    Concurrent,
}

impl Occurred {
    /// The same relationship seen from the other version's side.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::After => Self::Before,
            Self::Before => Self::After,
            other => other,
        }
    }

    /// `true` when the two versions conflict and need external resolution.
    #[must_use]
    pub fn is_conflict(self) -> bool {
        self == Self::Concurrent
    }
}

impl fmt::Display for Occurred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identical => "identical",
            Self::After => "after",
            Self::Before => "before",
            Self::Concurrent => "concurrent",
        };
        f.write_str(name)
    }
}

/// A value that can be placed in causal order against another of its kind.
///
/// # Example
///
/// ```
/// use vclock_kit::prelude::*;
///
/// let base = VersionVector::with_key("node-1");
/// let next = base.append("node-1");
///
/// assert!(next.happened_after(&base));
/// assert!(base.happened_before(&next));
/// ```
pub trait Version {
    /// Classify `self` relative to `other`.
    fn compare(&self, other: &Self) -> Occurred;

    /// `true` if `self` is strictly older than `other`.
    fn happened_before(&self, other: &Self) -> bool {
        self.compare(other) == Occurred::Before
    }

    /// `true` if `self` strictly supersedes `other`.
    fn happened_after(&self, other: &Self) -> bool {
        self.compare(other) == Occurred::After
    }

    /// `true` if neither version dominates the other.
    fn is_concurrent_with(&self, other: &Self) -> bool {
        self.compare(other).is_conflict()
    }

    /// `true` if both versions describe the same history.
    fn is_identical_to(&self, other: &Self) -> bool {
        self.compare(other) == Occurred::Identical
    }
}
