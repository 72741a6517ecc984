//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries and balances for terminal
//! display.

pub mod entry;

pub use entry::{format_balance, format_entry_table, format_summary};
