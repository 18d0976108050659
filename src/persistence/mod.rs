//! Key/value persistence for integer records
//!
//! Backends:
//! - `MemoryStore`: in-process map (tests, headless runs)
//! - `LocalStore`: browser LocalStorage (wasm only)
//!
//! Values that are missing or fail to parse read back as `None`.

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Integer storage keyed by name
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64);
}

/// Parse a stored integer, tolerating surrounding whitespace
pub fn parse_stored(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stored() {
        assert_eq!(parse_stored("1200"), Some(1200));
        assert_eq!(parse_stored(" 7\n"), Some(7));
        assert_eq!(parse_stored(""), None);
        assert_eq!(parse_stored("-5"), None);
        assert_eq!(parse_stored("abc"), None);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("best"), None);
        store.set("best", 30);
        store.set("best", 40);
        assert_eq!(store.get("best"), Some(40));
    }
}
