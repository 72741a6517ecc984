//! Storage layer for the finance tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json_optional, write_json_atomic};
pub use ledger_file::{LedgerStore, LoadOutcome, LEDGER_SCHEMA_VERSION};
