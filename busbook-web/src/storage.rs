//! Browser `localStorage` behind the core [`KeyValueStore`] trait.

use busbook_core::{KeyValueStore, StorageError};

use crate::dom;

/// Stateless handle; every call goes to the page's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebStorage;

fn storage() -> Result<web_sys::Storage, StorageError> {
    dom::local_storage().map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(dom::js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }
}
