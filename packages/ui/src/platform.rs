//! Platform-appropriate session storage.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Everything else**: process memory via [`store::MemoryStore`]

use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Session store over the platform backend.
pub type PlatformSessions = SessionStore<PlatformStore>;

/// Create the session store for the current platform.
pub fn make_session_store() -> PlatformSessions {
    SessionStore::new(PlatformStore::new())
}
