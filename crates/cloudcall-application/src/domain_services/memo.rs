//! Memoized requests
//!
//! Identical calls share one in-flight future. The entry stays in the cache
//! after it settles, so later callers get the stored outcome, failures
//! included, without reaching the provider again.

use cloudcall_domain::error::Result;
use cloudcall_domain::{ServiceDescriptor, canonical_json};
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::{Value, json};

/// Shared outcome of a memoized request
pub type SharedRequest = Shared<BoxFuture<'static, Result<Value>>>;

/// Cache of shared request futures keyed by call identity
#[derive(Default)]
pub struct MemoCache {
    entries: DashMap<String, SharedRequest>,
}

impl MemoCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of a call: descriptor, method and parameters, all canonical
    ///
    /// Every descriptor field takes part, so calls that differ only in region
    /// or credentials are never conflated. The parts are encoded as one JSON
    /// array so a method name can never run into the parameters.
    pub fn memo_key(descriptor: &ServiceDescriptor, method: &str, params: &Value) -> String {
        canonical_json(&json!([descriptor.canonical_key(), method, params]))
    }

    /// Return the shared future for `key`, creating it with `make` on a miss
    ///
    /// The boolean is `true` when an existing entry was reused. `make` runs at
    /// most once per key, under the shard lock.
    pub fn get_or_insert_with<F>(&self, key: String, make: F) -> (SharedRequest, bool)
    where
        F: FnOnce() -> BoxFuture<'static, Result<Value>>,
    {
        match self.entries.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(entry) => (entry.get().clone(), true),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let shared = make().shared();
                entry.insert(shared.clone());
                (shared, false)
            }
        }
    }

    /// Number of memoized calls
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is memoized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every memoized call
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for MemoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
