//! Balance calculation
//!
//! Pure reductions over a ledger. Amounts are exact decimals capped at
//! `Money::MAX` per entry, so the results are exact, independent of entry
//! order, and stay inside the decimal range for any ledger that fits in
//! memory.

use crate::models::{EntryKind, Ledger, Money};

/// Income, expense and net totals for a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts (positive)
    pub expenses: Money,
    /// `income - expenses`
    pub balance: Money,
    pub entry_count: usize,
}

/// Sum of incomes minus sum of expenses; zero for an empty ledger
pub fn compute_balance(ledger: &Ledger) -> Money {
    ledger.iter().map(|entry| entry.signed_amount()).sum()
}

/// Compute per-kind totals alongside the balance
pub fn summarize(ledger: &Ledger) -> BalanceSummary {
    let mut income = Money::zero();
    let mut expenses = Money::zero();

    for entry in ledger {
        match entry.kind() {
            EntryKind::Income => income += entry.amount(),
            EntryKind::Expense => expenses += entry.amount(),
        }
    }

    BalanceSummary {
        income,
        expenses,
        balance: income - expenses,
        entry_count: ledger.len(),
    }
}
