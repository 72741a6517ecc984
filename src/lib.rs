//! Finance Tracker - personal income and expense ledger
//!
//! This library provides the core functionality for the `finance` command:
//! an ordered ledger of income and expense entries, a balance calculator, and
//! a persistence adapter that saves and restores the whole ledger from a
//! single local file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Amounts, entries and the ledger
//! - `storage`: JSON file storage layer
//! - `services`: Balance calculation and the tracker session
//! - `cli`: Command handlers and the interactive session
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_tracker::models::EntryKind;
//! use finance_tracker::services::Tracker;
//! use finance_tracker::storage::LedgerStore;
//!
//! let mut tracker = Tracker::new(LedgerStore::new("finance_data.json"));
//! tracker.add_entry(EntryKind::Income, "Salary", "1000.00")?;
//! tracker.add_entry(EntryKind::Expense, "Rent", "400.00")?;
//! tracker.save()?;
//! assert_eq!(tracker.balance().to_string(), "600.00");
//! # Ok::<(), finance_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult, ValidationError};
