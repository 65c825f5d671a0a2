//! # Key-value storage abstraction
//!
//! [`KeyValueStore`] is the seam between session logic and wherever the
//! browser keeps per-origin strings. The web build plugs in
//! [`crate::LocalStore`] (`window.localStorage`); tests and native builds use
//! [`crate::MemoryStore`].
//!
//! The interface mirrors `localStorage` itself: string keys, string values,
//! and three operations. Implementations never fail loudly. A backend that is
//! unavailable behaves like an empty store whose writes are dropped.

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
