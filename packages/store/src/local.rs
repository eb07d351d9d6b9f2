//! # Browser `localStorage` backend
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Like the storage handle it wraps it holds no state of its own: every call
//! looks up `window.localStorage` again, so the struct is zero-size and `Copy`.
//!
//! A missing window or a storage access error (e.g. storage disabled by the
//! user) reads as "no value" and surfaces as [`StoreError::Unavailable`] on
//! writes.

use crate::kv::KeyValueStore;
use crate::StoreError;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::Write {
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Remove {
                key: key.to_string(),
            })
    }
}
