//! Process-wide, persisted stores (cart, locale).
//!
//! Each store is a plain state value with pure transition functions,
//! wrapped in a `Reducible` container that persists through an injected
//! [`StorageAdapter`]. Components reach them via `ContextProvider`.

pub mod cart;
pub mod locale;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use gloo::storage::{LocalStorage, Storage};

/// Swappable persistence seam for the stores.
pub trait StorageAdapter {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage` adapter used by the running app.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageAdapter;

impl StorageAdapter for LocalStorageAdapter {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let _ = LocalStorage::raw().set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = LocalStorage::raw().remove_item(key);
    }
}

/// In-memory adapter for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryAdapter {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl StorageAdapter for MemoryAdapter {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
