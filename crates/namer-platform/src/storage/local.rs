//! `window.localStorage` backend.
//! Persistent across page reloads, scoped to the page origin.

use web_sys::Storage;

use namer_core::ports::StoragePort;
use namer_types::{NamerError, Result};
use crate::js::error_message;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the origin's local storage.
    ///
    /// Fails when there is no window (workers, Node) or the browser denies
    /// access, e.g. with storage disabled in private mode.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| NamerError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| NamerError::Storage(error_message(e)))?
            .ok_or_else(|| NamerError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl StoragePort for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| NamerError::Storage(error_message(e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        // Throws QuotaExceededError when the origin is full
        self.storage
            .set_item(key, value)
            .map_err(|e| NamerError::Storage(error_message(e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| NamerError::Storage(error_message(e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
