//! localStorage token store for WASM environments
//!
//! Stores the raw token string under the same key the original shell
//! used, so an existing browser session survives the rewrite.

use web_sys::Storage;

use crate::error::{ErrorKind, Result};
use crate::interface::TokenStore;

use super::TOKEN_KEY;

/// Token store backed by the browser's localStorage.
#[derive(Debug, Clone, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| ErrorKind::StorageError("localStorage unavailable".to_string()).into())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let storage = Self::storage()?;
        storage
            .get_item(TOKEN_KEY)
            .map_err(|_| ErrorKind::StorageError("failed to read localStorage".to_string()).into())
    }

    fn save(&self, token: &str) -> Result<()> {
        let storage = Self::storage()?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| ErrorKind::StorageError("failed to write localStorage".to_string()).into())
    }

    fn clear(&self) -> Result<()> {
        let storage = Self::storage()?;
        storage
            .remove_item(TOKEN_KEY)
            .map_err(|_| ErrorKind::StorageError("failed to clear localStorage".to_string()).into())
    }
}
