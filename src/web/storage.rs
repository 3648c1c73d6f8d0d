//! `localStorage`-backed preference storage.

use crate::error::ThemeError;
use crate::state::host::Storage;

use super::js_error;

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the window has no usable `localStorage`.
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(js_error(&e)))?
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }
}
