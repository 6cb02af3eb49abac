//! `KeyValueStore` backed by the browser's `localStorage`.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use quoteday::{KeyValueStore, StorageError};

/// Handle to `window.localStorage`, looked up on every call so a storage
/// that becomes unavailable mid-session degrades instead of panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn access_error(err: wasm_bindgen::JsValue) -> StorageError {
    use wasm_bindgen::JsCast;

    let message = err
        .dyn_ref::<web_sys::DomException>()
        .map(web_sys::DomException::name)
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "unknown error".to_owned());
    StorageError::Access(message)
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).map_err(access_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            storage()?.set_item(key, value).map_err(access_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
