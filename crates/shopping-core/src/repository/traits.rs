//! Repository Layer - Core Traits
//!
//! Storage is synchronous, string-valued and keyed, which is exactly what
//! `window.localStorage` offers.

use crate::error::Result;

/// Minimal key-value store
pub trait KeyValueStore {
    /// Read a value; `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) a value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
