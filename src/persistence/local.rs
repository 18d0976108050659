//! Browser LocalStorage backend

use super::{KeyValueStore, parse_stored};

/// LocalStorage-backed store. Silently does nothing when storage is unavailable.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - best score will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<u64> {
        let raw = self.storage.as_ref()?.get_item(key).ok()??;
        let value = parse_stored(&raw);
        if value.is_none() {
            log::warn!("Ignoring malformed value for {}: {:?}", key, raw);
        }
        value
    }

    fn set(&mut self, key: &str, value: u64) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, &value.to_string());
        }
    }
}
