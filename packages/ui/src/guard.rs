//! Route guard for pages that need a session.
//!
//! The check runs once, synchronously, when the guarded layout mounts. It
//! reads the session store directly rather than the auth signal, so it sees
//! exactly what is persisted. Changes made in other tabs are not observed.

use store::{KeyValueStore, SessionStore};

/// Outcome of checking a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the protected content.
    Granted,
    /// Replace the current route with the login page.
    RedirectToLogin,
}

/// Decide whether a protected view may render.
pub fn check_access<S: KeyValueStore>(sessions: &SessionStore<S>) -> Access {
    if sessions.is_authenticated() {
        Access::Granted
    } else {
        Access::RedirectToLogin
    }
}
