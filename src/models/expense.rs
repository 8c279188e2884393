//! Expense model
//!
//! An expense is an immutable value. Edits build a new value; the ledger
//! swaps it in wherever the old value was recorded.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{BuddyError, BuddyResult};

/// Format used when an expense timestamp is shown to the user
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%b %d %Y at %H:%M";

/// A single recorded expense
///
/// Equality covers amount, description and timestamp. The ledger relies on
/// it to find the copy of an Overall expense inside a category budget, so two
/// expenses with identical fields are treated as the same expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    amount: Money,
    description: String,
    timestamp: NaiveDateTime,
}

/// Fields to override when editing an expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseEdit {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
}

impl ExpenseEdit {
    /// Check if no field would change
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.description.is_none() && self.timestamp.is_none()
    }
}

impl Expense {
    /// Create a new expense
    ///
    /// The amount must be positive and the description non-blank. The
    /// description is stored trimmed.
    pub fn new(
        amount: Money,
        description: impl AsRef<str>,
        timestamp: NaiveDateTime,
    ) -> BuddyResult<Self> {
        let amount = amount.ensure_positive("Expense amount")?;

        let description = description.as_ref().trim();
        if description.is_empty() {
            return Err(BuddyError::invalid_input(
                "Expense description cannot be empty",
            ));
        }

        Ok(Self {
            amount,
            description: description.to_string(),
            timestamp,
        })
    }

    /// Get the amount spent
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Get the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get when the money was spent
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Build the edited copy of this expense
    ///
    /// Unset fields keep their current value. The result is validated like a
    /// freshly created expense.
    pub fn edited(&self, edit: &ExpenseEdit) -> BuddyResult<Self> {
        if edit.is_empty() {
            return Err(BuddyError::invalid_input(
                "At least one of amount, description or time must be provided",
            ));
        }

        Self::new(
            edit.amount.unwrap_or(self.amount),
            edit.description.as_deref().unwrap_or(&self.description),
            edit.timestamp.unwrap_or(self.timestamp),
        )
    }

    /// Case-insensitive substring match against the description
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

impl Expense {
    /// One-line description with the amount in the given currency symbol
    pub fn describe(&self, symbol: &str) -> String {
        format!(
            "{} - {} ({})",
            self.amount.format_with_symbol(symbol),
            self.description,
            self.timestamp.format(DISPLAY_TIMESTAMP_FORMAT)
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("$"))
    }
}
