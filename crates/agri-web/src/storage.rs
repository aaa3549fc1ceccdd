//! `window.localStorage` backend

use agri_core::{AgriError, KeyValueStore, Result};

/// Handle to the browser's local storage.
///
/// Holds nothing itself; every call looks the storage object up again so
/// the handle can live inside `Send + Sync` reactive state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AgriError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| AgriError::Storage(format!("{e:?}")))?
            .ok_or_else(|| AgriError::Storage("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AgriError::Storage(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // Fails when the quota is exceeded
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AgriError::Storage(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| AgriError::Storage(format!("{e:?}")))
    }
}
