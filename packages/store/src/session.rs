//! # Session store — client-side login state
//!
//! [`SessionStore`] keeps the single logged-in user of this browser in a
//! [`KeyValueStore`]. Two keys are used:
//!
//! | Key | Value | Written by |
//! |-----|-------|-----------|
//! | [`USER_KEY`] (`"user"`) | JSON [`SessionRecord`], e.g. `{"email":"a@b.com"}` | [`set_session`](SessionStore::set_session) |
//! | [`LOGGED_IN_KEY`] (`"loggedIn"`) | `"true"` | [`set_session`](SessionStore::set_session) |
//!
//! Both are removed by [`clear_session`](SessionStore::clear_session).
//! Authentication is decided by the record alone; the flag is informational.
//!
//! There is no credential check, no expiry and no multi-user support. A
//! stored value that does not parse, or parses without an email, reads as
//! "logged out" instead of an error.

use crate::kv::KeyValueStore;
use crate::models::SessionRecord;

/// Storage key holding the JSON session record.
pub const USER_KEY: &str = "user";

/// Storage key holding the login flag.
pub const LOGGED_IN_KEY: &str = "loggedIn";

/// Session state stored in a key-value backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist `email` as the current session and raise the login flag.
    ///
    /// The email is stored as given; format is not checked. An empty email
    /// writes nothing, so the flag never outlives a usable record.
    pub fn set_session(&self, email: &str) {
        let record = SessionRecord::new(email);
        if !record.is_valid() {
            return;
        }
        // Serializing a struct with one string field cannot fail.
        if let Ok(json) = serde_json::to_string(&record) {
            self.store.set(USER_KEY, &json);
            self.store.set(LOGGED_IN_KEY, "true");
        }
    }

    /// Remove the session record and the login flag.
    pub fn clear_session(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(LOGGED_IN_KEY);
    }

    /// Read the stored session, treating anything malformed as absent.
    pub fn get_session(&self) -> Option<SessionRecord> {
        let raw = self.store.get(USER_KEY)?;
        let record: SessionRecord = serde_json::from_str(&raw).ok()?;
        record.is_valid().then_some(record)
    }

    /// Whether a session with a non-empty email is stored.
    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    /// Whether the `loggedIn` flag is set.
    pub fn is_logged_in_flag(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn test_set_session_authenticates() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(!sessions.is_authenticated());

        sessions.set_session("a@b.com");

        assert!(sessions.is_authenticated());
        assert!(sessions.is_logged_in_flag());
        assert_eq!(
            sessions.get_session(),
            Some(SessionRecord::new("a@b.com"))
        );
    }

    #[test]
    fn test_stored_as_json_record() {
        let backend = MemoryStore::new();
        let sessions = SessionStore::new(backend.clone());

        sessions.set_session("a@b.com");

        assert_eq!(
            backend.get(USER_KEY).as_deref(),
            Some(r#"{"email":"a@b.com"}"#)
        );
        assert_eq!(backend.get(LOGGED_IN_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_clear_session_logs_out() {
        let backend = MemoryStore::new();
        let sessions = SessionStore::new(backend.clone());

        sessions.set_session("a@b.com");
        sessions.clear_session();

        assert!(!sessions.is_authenticated());
        assert!(!sessions.is_logged_in_flag());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_invalid_json_is_logged_out() {
        let backend = MemoryStore::new();
        backend.set(USER_KEY, "{not json");

        let sessions = SessionStore::new(backend);
        assert!(sessions.get_session().is_none());
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_wrong_shape_is_logged_out() {
        let backend = MemoryStore::new();
        let sessions = SessionStore::new(backend.clone());

        backend.set(USER_KEY, r#"{"name":"alice"}"#);
        assert!(!sessions.is_authenticated());

        backend.set(USER_KEY, r#"["a@b.com"]"#);
        assert!(!sessions.is_authenticated());

        backend.set(USER_KEY, r#"{"email":42}"#);
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_empty_email_is_logged_out() {
        let backend = MemoryStore::new();
        backend.set(USER_KEY, r#"{"email":""}"#);

        let sessions = SessionStore::new(backend);
        assert!(sessions.get_session().is_none());
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_whitespace_email_is_still_a_session() {
        let backend = MemoryStore::new();
        backend.set(USER_KEY, r#"{"email":"   "}"#);

        let sessions = SessionStore::new(&backend);
        assert_eq!(sessions.get_session(), Some(SessionRecord::new("   ")));
        assert!(sessions.is_authenticated());
    }

    #[test]
    fn test_set_empty_session_writes_nothing() {
        let backend = MemoryStore::new();
        let sessions = SessionStore::new(backend.clone());

        sessions.set_session("");

        assert!(backend.is_empty());
        assert!(!sessions.is_logged_in_flag());
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_set_empty_session_keeps_existing_one() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set_session("a@b.com");

        sessions.set_session("");

        assert!(sessions.is_logged_in_flag());
        assert_eq!(sessions.get_session(), Some(SessionRecord::new("a@b.com")));
    }

    #[test]
    fn test_flag_alone_does_not_authenticate() {
        let backend = MemoryStore::new();
        backend.set(LOGGED_IN_KEY, "true");

        let sessions = SessionStore::new(backend);
        assert!(sessions.is_logged_in_flag());
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_email_format_not_validated() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.set_session("not-an-email");
        assert!(sessions.is_authenticated());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let backend = MemoryStore::new();
        backend.set(USER_KEY, r#"{"email":"a@b.com","theme":"dark"}"#);

        let sessions = SessionStore::new(&backend);
        assert_eq!(
            sessions.get_session().map(|r| r.email),
            Some("a@b.com".to_string())
        );
    }
}
