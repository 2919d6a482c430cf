use studyguide_shared::{KeyValueBackend, StoreError};
use web_sys::Storage;

use crate::dom::{js_error_message, window};

/// `window.localStorage` as a [`KeyValueBackend`].
///
/// Looks the storage object up on every call; browsers may revoke it at any
/// time (private mode, cleared site data).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<Storage, StoreError> {
        window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            reason: js_error_message(&err),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: js_error_message(&err),
        })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: js_error_message(&err),
        })
    }
}
