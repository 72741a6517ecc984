//! Entry display formatting
//!
//! Formats entries and balances for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Entry, Money};
use crate::services::BalanceSummary;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format entries as a numbered table
pub fn format_entry_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries.\n".to_string();
    }

    let rows = entries.iter().enumerate().map(|(i, entry)| EntryRow {
        index: i + 1,
        kind: entry.kind().to_string(),
        description: entry.description().to_string(),
        amount: entry.amount().to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format the balance line, e.g. `Balance: 549.50`
pub fn format_balance(balance: Money) -> String {
    format!("Balance: {}", balance)
}

/// Format income and expense totals with the balance
pub fn format_summary(summary: &BalanceSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Entries:  {:>12}\n", summary.entry_count));
    output.push_str(&format!("Income:   {:>12}\n", summary.income.to_string()));
    output.push_str(&format!("Expenses: {:>12}\n", summary.expenses.to_string()));
    output.push_str(&"-".repeat(22));
    output.push('\n');
    output.push_str(&format!("Balance:  {:>12}\n", summary.balance.to_string()));
    output
}
