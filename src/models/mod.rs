//! Core data models for the finance tracker
//!
//! This module contains the data structures that represent the ledger
//! domain: amounts, entries and the ledger itself.

pub mod entry;
pub mod ledger;
pub mod money;

pub use entry::{Entry, EntryKind, ParseEntryKindError};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
