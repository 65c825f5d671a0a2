//! Session-scoped lookup history, newest first.

use crate::models::IpInfo;

/// Every successful lookup since the tracking view mounted.
///
/// Entries are never deduplicated, edited or evicted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: Vec<IpInfo>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `entry` at the front.
    pub fn append(&mut self, entry: IpInfo) {
        self.entries.insert(0, entry);
    }

    /// All entries, most recent first.
    pub fn list(&self) -> &[IpInfo] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
