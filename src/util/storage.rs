//! Key-value preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers persist their choices through [`PreferenceStore`] so the
//! same code runs against browser `localStorage` and an in-memory map.
//! Storage failures are logged and swallowed: a preference that cannot be
//! saved simply does not survive the reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Persistent string store keyed by preference name.
pub trait PreferenceStore {
    /// Return the stored value for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str);
    /// Delete `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);

    /// Like [`load`](Self::load), but an empty stored string counts as unset.
    fn load_non_empty(&self, key: &str) -> Option<String> {
        self.load(key).filter(|value| !value.is_empty())
    }
}

/// In-memory store used by tests and as a fallback when the browser
/// refuses access to `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store.save(key, value);
        }
        store
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
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

/// Browser `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Returns `None` when there is no window or storage access is denied
    /// (private browsing modes, sandboxed iframes).
    pub fn new() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read failed for {key}: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::warn!("localStorage write failed for {key}: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            log::warn!("localStorage remove failed for {key}: {err:?}");
        }
    }
}
