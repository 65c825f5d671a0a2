//! # localStorage-backed store — browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through `web-sys`, so
//! values survive reloads for the same origin.
//!
//! ## Handle management
//!
//! `LocalStore` is a zero-size struct (`Clone`-friendly) that looks up the
//! `Storage` object on every operation. The browser hands back the same
//! object each time, and holding a `web_sys::Storage` would make the store
//! `!Send`.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). Storage can be missing (no window), disabled
//! (privacy mode) or full (quota exceeded); each degrades to "nothing stored",
//! which the session layer already reads as logged out.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
