//! File-backed token store for no-WASM environments
//!
//! Keeps the single persisted key-value pair in a JSON object on disk,
//! mirroring what the browser shell keeps in localStorage.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interface::TokenStore;

#[derive(Debug, Deserialize, Serialize)]
struct TokenFile {
    #[serde(rename = "userToken")]
    user_token: String,
}

/// Token store persisting to a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(&self.path)?;
        let file: TokenFile = serde_json::from_str(&text)?;
        Ok(Some(file.user_token))
    }

    fn save(&self, token: &str) -> Result<()> {
        let file = TokenFile {
            user_token: token.to_string(),
        };
        std::fs::write(&self.path, serde_json::to_string(&file)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
