//! Key-value persistence adapters.
//!
//! RULE: Only the store module talks to the persistence medium.
//! Everything above it sees opaque string values under string keys.

mod sqlite;

pub use sqlite::SqliteKv;

use crate::error::ProviaResult;
use std::cell::RefCell;
use std::collections::HashMap;

/// The persistence medium: get/set/remove of opaque strings.
///
/// Methods take `&self`; adapters use interior mutability. The core is
/// single-actor, so adapters are not required to be `Sync`.
pub trait KvStore {
    fn get(&self, key: &str) -> ProviaResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ProviaResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> ProviaResult<()>;
}

impl<K: KvStore + ?Sized> KvStore for &K {
    fn get(&self, key: &str) -> ProviaResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ProviaResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ProviaResult<()> {
        (**self).remove(key)
    }
}

/// Process-local adapter with no durability, used by tests.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> ProviaResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ProviaResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ProviaResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
