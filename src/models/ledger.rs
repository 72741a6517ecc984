//! Ledger model
//!
//! The ordered, in-memory collection of entries for one session.

use super::entry::Entry;

/// Insertion-ordered sequence of entries
///
/// Only two mutations exist: appending a single entry and replacing the
/// whole contents after a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Swap the entire contents for `entries`, keeping their order
    pub fn replace_all(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// Read-only view of the entries in order
    pub fn to_sequence(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Entry>> for Ledger {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
