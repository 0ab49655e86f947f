//! Browser local storage behind the `KeyValueStore` trait

use crate::core::{KeyValueStore, MemoryStore};

/// `window.localStorage`, or an in-memory map when storage is blocked
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                leptos::logging::warn!("localStorage unavailable, waitlist cache kept in memory");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).is_ok(),
            BrowserStore::Memory(memory) => memory.set_item(key, value),
        }
    }
}
