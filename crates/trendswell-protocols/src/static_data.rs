//! Per-node persistent key/value storage.
//!
//! The host scopes one store to each node instance and persists it across
//! workflow activations. For the webhook lifecycle the invariant is strict:
//! a key is present if and only if the matching remote resource is believed
//! to exist; absence always means "not subscribed".

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

/// Key/value storage scoped to a single node instance.
///
/// Implementations use interior mutability; the host guarantees the store is
/// only mutated by the owning node's own lifecycle calls.
pub trait StaticDataStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value);

    fn remove(&self, key: &str) -> Option<Value>;
}

/// In-memory store for tests and embedders without host persistence.
#[derive(Default)]
pub struct InMemoryStaticData {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemoryStaticData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StaticDataStore for InMemoryStaticData {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().remove(key)
    }
}
