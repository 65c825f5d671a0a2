//! # Session models
//!
//! The only identity this client keeps is an email address. [`SessionRecord`]
//! is what gets written to storage as JSON (`{"email": "..."}`) on login or
//! signup, and read back by the route guard and the profile view.

use serde::{Deserialize, Serialize};

/// The logged-in identity persisted in browser storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub email: String,
}

impl SessionRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// A record only counts as a session if it carries an email. The email
    /// is taken as stored; trimming happens where it is typed in.
    pub fn is_valid(&self) -> bool {
        !self.email.is_empty()
    }
}
