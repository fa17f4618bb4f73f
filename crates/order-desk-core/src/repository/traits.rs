//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for the underlying key-value store.
//! Implementations can use browser storage, files, in-memory, etc.

use crate::error::StoreError;

/// Synchronous string key-value store
///
/// Writes overwrite any prior value for the key.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
