//! Tracker session
//!
//! Owns the in-memory ledger and its store for one run of the program and
//! implements the add / save / load workflow on top of them.

use std::path::Path;

use crate::error::TrackerResult;
use crate::models::{Entry, EntryKind, Ledger, Money};
use crate::storage::{LedgerStore, LoadOutcome};

use super::balance::{compute_balance, summarize, BalanceSummary};

/// What a load did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The ledger was replaced with this many entries
    Loaded(usize),
    /// No saved data; the ledger is unchanged
    NoData,
}

/// A single session over one ledger file
pub struct Tracker {
    ledger: Ledger,
    store: LedgerStore,
}

impl Tracker {
    /// Start a session with an empty ledger
    pub fn new(store: LedgerStore) -> Self {
        Self {
            ledger: Ledger::new(),
            store,
        }
    }

    /// Validate raw input and append the resulting entry
    ///
    /// Returns a copy of the stored entry. On a validation failure the ledger
    /// is left untouched.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: &str,
        amount_text: &str,
    ) -> TrackerResult<Entry> {
        let entry = Entry::parse(kind, description, amount_text).inspect_err(|e| {
            tracing::debug!(%kind, error = %e, "rejected entry input");
        })?;

        tracing::debug!(%entry, "appending entry");
        self.ledger.append(entry.clone());
        Ok(entry)
    }

    /// Persist the whole ledger, overwriting the file
    pub fn save(&self) -> TrackerResult<()> {
        self.store.save(&self.ledger)
    }

    /// Replace the ledger with the saved one, if any
    pub fn load(&mut self) -> TrackerResult<LoadStatus> {
        match self.store.load()? {
            LoadOutcome::Loaded(entries) => {
                let count = entries.len();
                self.ledger.replace_all(entries);
                Ok(LoadStatus::Loaded(count))
            }
            LoadOutcome::NoData => Ok(LoadStatus::NoData),
        }
    }

    pub fn balance(&self) -> Money {
        compute_balance(&self.ledger)
    }

    pub fn summary(&self) -> BalanceSummary {
        summarize(&self.ledger)
    }

    pub fn entries(&self) -> &[Entry] {
        self.ledger.to_sequence()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Path of the backing ledger file
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }
}
