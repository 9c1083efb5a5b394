//! # vclock-kit
//!
//! Immutable version vectors for causal ordering of replicated writes.
//!
//! A version vector (vector clock) maps every replica that has written a
//! piece of data to the number of writes it has made. Comparing two vectors
//! tells a storage layer whether an incoming write supersedes the stored one,
//! is superseded by it, or conflicts with it. Merging two vectors produces
//! the smallest history that contains both.
//!
//! ## `no_std` Support
//!
//! This crate supports `no_std` environments with the `alloc` crate.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vclock-kit = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` there is no wall clock; stamp vectors yourself with
//! [`VersionVector::at`].
//!
//! ## Quick Start
//!
//! ```
//! use vclock_kit::prelude::*;
//!
//! let stored = VersionVector::with_key("replica-a");
//!
//! // A write that saw the stored version supersedes it.
//! let update = stored.append("replica-b");
//! assert_eq!(update.compare(&stored), Occurred::After);
//!
//! // A write from a replica that never saw it conflicts.
//! let rival = VersionVector::with_key("replica-c");
//! assert_eq!(rival.compare(&stored), Occurred::Concurrent);
//!
//! // Merging records that both histories have been seen.
//! let joined = stored.merge(&rival);
//! assert!(joined.happened_after(&stored));
//! assert!(joined.happened_after(&rival));
//! ```
//!
//! ## Types
//!
//! - [`VersionVector`] - replica to counter mapping with append, merge and compare
//! - [`Counter`] - one replica's event count
//! - [`Occurred`] - result of a causal comparison
//! - [`Version`] - trait for anything that can be causally compared
//!
//! ## Features
//!
//! - `std` (default): wall-clock timestamps
//! - `serde`: `Serialize`/`Deserialize` for all public types
//! - `wasm`: JavaScript bindings

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod counter;
mod error;
mod occurred;
mod vector;
#[cfg(feature = "wasm")]
mod wasm;

pub mod prelude;
pub mod time;

pub use counter::Counter;
pub use error::{Result, VersionError};
pub use occurred::{Occurred, Version};
pub use vector::VersionVector;
