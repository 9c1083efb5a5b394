//! Convenient re-exports for common usage.
//!
//! ```
//! use vclock_kit::prelude::*;
//! ```

pub use crate::Counter;
pub use crate::Occurred;
pub use crate::Version;
pub use crate::VersionError;
pub use crate::VersionVector;
