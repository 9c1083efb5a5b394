//! WebAssembly bindings for vclock-kit.
//!
//! Enable with the `wasm` feature:
//!
//! ```toml
//! [dependencies]
//! vclock-kit = { version = "0.1", features = ["wasm"] }
//! ```
//!
//! Replica identifiers are strings on the JavaScript side. Like the Rust
//! type, every method that changes the vector returns a new instance.

use alloc::string::{String, ToString};

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::Version;

/// A version vector with string replica ids for use from JavaScript.
#[wasm_bindgen(js_name = VersionVector)]
pub struct WasmVersionVector {
    inner: crate::VersionVector<String>,
}

#[wasm_bindgen(js_class = VersionVector)]
impl WasmVersionVector {
    /// Create an empty version vector stamped with the current time.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: crate::VersionVector::new(),
        }
    }

    /// Create a version vector holding one event for `replica`.
    #[wasm_bindgen(js_name = withKey)]
    pub fn with_key(replica: &str) -> Self {
        Self {
            inner: crate::VersionVector::with_key(replica.to_string()),
        }
    }

    /// Return a new vector with one more event recorded for `replica`.
    pub fn append(&self, replica: &str) -> WasmVersionVector {
        Self {
            inner: self.inner.append(replica.to_string()),
        }
    }

    /// Return the join of this vector and `other`.
    pub fn merge(&self, other: &WasmVersionVector) -> WasmVersionVector {
        Self {
            inner: self.inner.merge(&other.inner),
        }
    }

    /// Classify this vector against `other`.
    ///
    /// Returns one of `"identical"`, `"after"`, `"before"` or `"concurrent"`.
    pub fn compare(&self, other: &WasmVersionVector) -> String {
        self.inner.compare(&other.inner).to_string()
    }

    /// Get the counter for `replica`, or `undefined` if it has no events.
    pub fn get(&self, replica: &str) -> Option<u64> {
        self.inner
            .get(&replica.to_string())
            .map(|counter| counter.value())
    }

    /// Check whether `replica` has any recorded events.
    pub fn contains(&self, replica: &str) -> bool {
        self.inner.contains(&replica.to_string())
    }

    /// Get the number of replicas with recorded events.
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Check if the vector is empty.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Milliseconds since the Unix epoch when the vector's history began.
    #[wasm_bindgen(js_name = creationTime)]
    pub fn creation_time(&self) -> u64 {
        self.inner.creation_time()
    }

    /// Get the replica ids as a JavaScript array, in sorted order.
    pub fn keys(&self) -> Array {
        self.inner.keys().map(|k| JsValue::from_str(k)).collect()
    }

    /// Render the vector for logging.
    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

impl Default for WasmVersionVector {
    fn default() -> Self {
        Self::new()
    }
}
