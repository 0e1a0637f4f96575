//! Key-value storage abstraction standing in for browser `localStorage`.
//!
//! The browser implementation lives in the web crate; [`MemoryStore`] backs
//! tests and the QA runner.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

use crate::constants::BOOKINGS_KEY;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write for `{key}` failed: {reason}")]
    Write { key: String, reason: String },
    #[error("value under `{key}` is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("value for `{key}` could not be serialized: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value store with JSON helpers.
pub trait KeyValueStore {
    /// Read a raw value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Read and parse a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if the stored text is not the expected JSON.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Serialize and write a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }

    /// Push `item` onto the JSON array stored under `key`, creating it if
    /// needed. A value that is not a JSON array is discarded and replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    fn append<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        item: T,
    ) -> Result<usize, StorageError> {
        let mut items: Vec<T> = match self.get_json(key) {
            Ok(items) => items.unwrap_or_default(),
            Err(StorageError::Corrupt { source, .. }) => {
                log::warn!("discarding unreadable `{key}` array before append: {source}");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        items.push(item);
        self.set_json(key, &items)?;
        Ok(items.len())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same map, like handles onto one
/// browser origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// One seat-selection submission as written to the booking log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLogEntry {
    pub bus_name: String,
    pub seat_numbers: String,
}

/// Append-only record of seat selections under the `bookings` key.
///
/// Entries are never deduplicated or capped, and no later booking stage reads
/// them back.
#[derive(Debug, Clone)]
pub struct BookingLog<S> {
    store: S,
}

impl<S: KeyValueStore> BookingLog<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Append an entry and return the new log length.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn append(&self, entry: BookingLogEntry) -> Result<usize, StorageError> {
        self.store.append(BOOKINGS_KEY, entry)
    }

    /// All entries in submission order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the log is corrupt.
    pub fn entries(&self) -> Result<Vec<BookingLogEntry>, StorageError> {
        Ok(self.store.get_json(BOOKINGS_KEY)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(bus: &str, seats: &str) -> BookingLogEntry {
        BookingLogEntry {
            bus_name: bus.to_string(),
            seat_numbers: seats.to_string(),
        }
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert!(store.is_empty());
        other.remove("k").unwrap();
    }

    #[test]
    fn booking_log_appends_without_dedup() {
        let store = MemoryStore::new();
        let log = BookingLog::new(&store);
        assert_eq!(log.append(entry("Super Bus", "2,7")).unwrap(), 1);
        assert_eq!(log.append(entry("Super Bus", "2,7")).unwrap(), 2);
        assert_eq!(log.entries().unwrap().len(), 2);
        assert_eq!(
            store.get(BOOKINGS_KEY).unwrap().as_deref(),
            Some(concat!(
                r#"[{"busName":"Super Bus","seatNumbers":"2,7"},"#,
                r#"{"busName":"Super Bus","seatNumbers":"2,7"}]"#
            ))
        );
    }

    #[test]
    fn append_replaces_corrupt_log() {
        let store = MemoryStore::new();
        store.set(BOOKINGS_KEY, "not json").unwrap();
        let log = BookingLog::new(store.clone());
        assert!(matches!(log.entries(), Err(StorageError::Corrupt { .. })));
        assert_eq!(log.append(entry("Night Rider", "1")).unwrap(), 1);
        assert_eq!(log.entries().unwrap(), [entry("Night Rider", "1")]);
    }

    #[test]
    fn empty_store_has_empty_log() {
        let log = BookingLog::new(MemoryStore::new());
        assert!(log.entries().unwrap().is_empty());
    }
}
