//! Contains the [`Storage`] trait and an in-memory implementation of it.

use std::collections::HashMap;

use crate::Error;

/// A durable key-value store holding serialized values.
///
/// Every [`Storage::set`] is a full overwrite of the value under `key`.
pub trait Storage {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    ///
    /// # Errors
    /// If the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    /// If the value cannot be written in full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }
}

/// A [`Storage`] that only lives as long as the value itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_previous_value() {
        let mut storage = MemoryStorage::new();
        assert_eq!(None, storage.get("books").unwrap());

        storage.set("books", "[1]").unwrap();
        storage.set("books", "[]").unwrap();

        assert_eq!(Some("[]".to_owned()), storage.get("books").unwrap());
    }
}
