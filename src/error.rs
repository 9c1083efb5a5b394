use thiserror::Error;

/// Errors reported by version vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    /// [`try_append`](crate::VersionVector::try_append) was given no key.
    ///
    /// Raised before anything is copied; the receiving vector is unaffected.
    #[error("invalid argument: cannot append an absent replica key")]
    MissingKey,

    /// The replica's counter is already at `u64::MAX` and cannot advance.
    ///
    /// The receiving vector is unaffected.
    #[error("counter overflow: replica counter is already at its maximum")]
    CounterOverflow,
}

/// Result alias for fallible version vector operations.
pub type Result<T> = core::result::Result<T, VersionError>;
