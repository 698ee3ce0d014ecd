//! Browser-backed persistence for the realm directory.
//!
//! Implements the core `KeyValueStore` trait on top of `localStorage`.

use eternum_core::{KeyValueStore, RealmDirectoryStore};

/// Web-specific key-value storage using localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl LocalStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        crate::dom::local_storage()
            .map_err(|e| WebStorageError::Unavailable(crate::dom::js_error_message(&e)))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        Err(WebStorageError::Unavailable(
            "not running in a browser".to_string(),
        ))
    }
}

impl KeyValueStore for LocalStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(crate::dom::js_error_message(&e)))
    }
}

/// Realm directory store backed by `localStorage`, already loaded.
#[must_use]
pub fn load_realm_store() -> RealmDirectoryStore<LocalStore> {
    let mut store = RealmDirectoryStore::new(LocalStore);
    let loaded = store.load();
    log::info!("loaded {} realms from local storage", loaded.realms.len());
    store
}
