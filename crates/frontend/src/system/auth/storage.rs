use std::sync::Mutex;

use web_sys::window;

use crate::shared::config::TOKEN_STORAGE_KEY;

/// Where the bearer token lives between page loads
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.load().is_some()
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Token kept in `window.localStorage` under a fixed key
#[derive(Debug, Clone)]
pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageTokens {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        get_local_storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("Failed to persist access token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// In-memory store, used where no browser storage exists
#[derive(Debug, Default)]
pub struct MemoryTokens {
    token: Mutex<Option<String>>,
}

impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
