//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the durable slot.
//! Implementations can use browser localStorage, in-memory, etc.

use crate::domain::TodoResult;

/// A string key-value store with `localStorage` semantics
///
/// All operations are synchronous; a missing key reads as `None`.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> TodoResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> TodoResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> TodoResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> TodoResult<()> {
        (**self).remove(key)
    }
}
