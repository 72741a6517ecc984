//! Entry model
//!
//! A single income or expense record. Entries are immutable once built and
//! can only be created through the validating constructors below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::{Money, MoneyParseError};
use crate::error::ValidationError;

/// Whether an entry adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Error returned when an entry kind name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entry kind '{0}' (expected 'income' or 'expense')")]
pub struct ParseEntryKindError(String);

impl FromStr for EntryKind {
    type Err = ParseEntryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(ParseEntryKindError(s.to_string())),
        }
    }
}

/// One recorded transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    kind: EntryKind,
    description: String,
    amount: Money,
}

impl Entry {
    /// Build an entry from typed values
    ///
    /// The description is stored trimmed. Fails if it is blank, if the
    /// amount is not strictly positive, or if it exceeds [`Money::MAX`].
    pub fn new(
        kind: EntryKind,
        description: impl Into<String>,
        amount: Money,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        if amount > Money::MAX {
            return Err(ValidationError::AmountOutOfRange(amount.to_string()));
        }

        Ok(Self {
            kind,
            description: description.to_string(),
            amount,
        })
    }

    /// Build an entry from raw user text
    ///
    /// Checks run in order: blank description, blank amount, unparseable
    /// amount, non-positive amount, oversized amount.
    pub fn parse(
        kind: EntryKind,
        description: &str,
        amount_text: &str,
    ) -> Result<Self, ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }

        let amount_text = amount_text.trim();
        if amount_text.is_empty() {
            return Err(ValidationError::MissingField("amount"));
        }

        let amount = Money::parse(amount_text).map_err(|err| match err {
            MoneyParseError::InvalidFormat(_) => {
                ValidationError::InvalidAmount(amount_text.to_string())
            }
            MoneyParseError::OutOfRange(_) => {
                ValidationError::AmountOutOfRange(amount_text.to_string())
            }
        })?;

        Self::new(kind, description, amount)
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The unsigned amount; always positive
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The amount with the sign implied by the kind
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.kind, self.description, self.amount)
    }
}
