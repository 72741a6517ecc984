//! Ledger CLI commands
//!
//! One-shot commands that work against the saved ledger file: each command
//! loads the file first, and `add` saves it again afterwards.

use clap::Subcommand;

use crate::display::{format_balance, format_entry_table, format_summary};
use crate::error::TrackerResult;
use crate::models::EntryKind;
use crate::services::{LoadStatus, Tracker};

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Record an income or expense entry and save it
    Add {
        /// Entry type: income or expense
        kind: EntryKind,
        /// What the entry is for
        description: String,
        /// Positive amount (e.g., "50.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List saved entries
    #[command(alias = "ls")]
    List,
    /// Show income and expense totals with the balance
    Balance,
}

/// Handle a ledger command
pub fn handle_ledger_command(tracker: &mut Tracker, cmd: LedgerCommands) -> TrackerResult<()> {
    match cmd {
        LedgerCommands::Add {
            kind,
            description,
            amount,
        } => {
            // Existing entries must survive the save below
            tracker.load()?;

            let added = tracker.add_entry(kind, &description, &amount)?;
            tracker.save()?;

            println!("Added {}", added);
            println!("{}", format_balance(tracker.balance()));
        }

        LedgerCommands::List => {
            if tracker.load()? == LoadStatus::NoData {
                println!("No saved data found.");
                return Ok(());
            }

            print!("{}", format_entry_table(tracker.entries()));
            println!("{}", format_balance(tracker.balance()));
        }

        LedgerCommands::Balance => {
            if tracker.load()? == LoadStatus::NoData {
                println!("No saved data found.");
            }

            print!("{}", format_summary(&tracker.summary()));
        }
    }

    Ok(())
}
