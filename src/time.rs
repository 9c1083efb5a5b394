//! Wall-clock source for creation and construction timestamps.
//!
//! Timestamps carried by [`VersionVector`](crate::VersionVector) and
//! [`Counter`](crate::Counter) are diagnostic metadata only. They never take
//! part in causal comparison, so a coarse or missing clock is harmless.
//!
//! On `std` targets the clock reads `SystemTime`. Without `std` there is no
//! portable time source and [`now_ms`] returns `0`; use
//! [`VersionVector::at`](crate::VersionVector::at) to stamp vectors with a
//! time from your own source.

/// Milliseconds since the Unix epoch.
///
/// A system clock set before the epoch reads as `0`.
#[cfg(feature = "std")]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Milliseconds since the Unix epoch.
///
/// Always `0` without the `std` feature.
#[cfg(not(feature = "std"))]
pub fn now_ms() -> u64 {
    0
}
