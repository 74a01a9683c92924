//! Browser-backed preference storage

use practice_core::PreferenceStore;

use crate::dom;

/// `localStorage` implementation of [`PreferenceStore`].
///
/// Values are stored as raw strings so that inline scripts in the page
/// template can read them before the bundle loads.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferenceStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

fn storage() -> Result<web_sys::Storage, StorageError> {
    dom::local_storage().map_err(|err| StorageError::Storage(dom::js_error_message(&err)))
}

impl PreferenceStore for LocalPreferenceStore {
    type Error = StorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        storage()?
            .get_item(key)
            .map_err(|err| StorageError::Storage(dom::js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Storage(dom::js_error_message(&err)))
    }
}
