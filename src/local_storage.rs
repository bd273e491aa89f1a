//! Browser Storage Binding
//!
//! `window.localStorage` behind the core's `KeyValueStore` trait.

use log::warn;
use wasm_bindgen::JsValue;

use todo_core::{KeyValueStore, MemoryStore, TodoError, TodoResult};

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// The page's `localStorage`; fails when blocked (privacy modes, sandboxed iframes)
    pub fn local() -> TodoResult<Self> {
        let window = web_sys::window().ok_or_else(|| TodoError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| js_error("localStorage", e))?
            .ok_or_else(|| TodoError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(op: &str, e: JsValue) -> TodoError {
    TodoError::Storage(format!("{} failed: {:?}", op, e))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| js_error("getItem", e))
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        self.storage.set_item(key, value).map_err(|e| js_error("setItem", e))
    }

    fn remove(&mut self, key: &str) -> TodoResult<()> {
        self.storage.remove_item(key).map_err(|e| js_error("removeItem", e))
    }
}

/// `localStorage` when available, otherwise a session-only memory store
pub fn open_storage() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("{}; todos will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}
