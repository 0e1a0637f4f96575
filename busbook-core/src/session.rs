//! Locally stored "logged in" flag read by the header widget.
//!
//! There is no credential check anywhere; the stored username is display text.
use serde::{Deserialize, Serialize};

use crate::constants::LOGGED_IN_USER_KEY;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedInUser {
    pub username: String,
}

/// The stored user, if any. An unreadable entry counts as logged out.
#[must_use]
pub fn current_user<S: KeyValueStore>(store: &S) -> Option<LoggedInUser> {
    match store.get_json::<LoggedInUser>(LOGGED_IN_USER_KEY) {
        Ok(user) => user,
        Err(err) => {
            log::warn!("ignoring stored user: {err}");
            None
        }
    }
}

#[must_use]
pub fn is_logged_in<S: KeyValueStore>(store: &S) -> bool {
    current_user(store).is_some()
}

/// Record `username` as the current user. Surrounding whitespace is trimmed;
/// `None` is returned and nothing is stored for a blank name.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn log_in<S: KeyValueStore>(
    store: &S,
    username: &str,
) -> Result<Option<LoggedInUser>, StorageError> {
    let username = username.trim();
    if username.is_empty() {
        return Ok(None);
    }
    let user = LoggedInUser {
        username: username.to_string(),
    };
    store.set_json(LOGGED_IN_USER_KEY, &user)?;
    Ok(Some(user))
}

/// Forget the current user.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn log_out<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    store.remove(LOGGED_IN_USER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn login_roundtrip() {
        let store = MemoryStore::new();
        assert!(!is_logged_in(&store));
        let user = log_in(&store, "  priya ").unwrap().unwrap();
        assert_eq!(user.username, "priya");
        assert_eq!(current_user(&store), Some(user));
        log_out(&store).unwrap();
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn blank_username_is_not_stored() {
        let store = MemoryStore::new();
        assert_eq!(log_in(&store, "   ").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn extra_fields_are_tolerated_and_garbage_is_logged_out() {
        let store = MemoryStore::new();
        store
            .set(LOGGED_IN_USER_KEY, r#"{"username":"dev","email":"d@x"}"#)
            .unwrap();
        assert_eq!(current_user(&store).map(|u| u.username), Some("dev".into()));

        store.set(LOGGED_IN_USER_KEY, "{").unwrap();
        assert!(!is_logged_in(&store));
    }
}
