//! Spending alert threshold
//!
//! A single global threshold compared against the Overall total. A zero
//! threshold means the alert is disabled.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::BuddyResult;

/// The global alert threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertThreshold {
    amount: Money,
}

/// What a call to [`AlertThreshold::set`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertChange {
    /// An alert was enabled where none was set
    Set(Money),
    /// An existing alert was moved to a new amount
    Updated { previous: Money, current: Money },
    /// The alert was disabled
    Removed,
}

/// Emitted when the total spending exceeds the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertNotice {
    pub threshold: Money,
    pub total: Money,
}

impl AlertThreshold {
    /// Create a disabled alert
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Create an alert at `amount` (zero leaves it disabled)
    pub fn at(amount: Money) -> BuddyResult<Self> {
        Ok(Self {
            amount: amount.ensure_non_negative("Alert amount")?,
        })
    }

    /// Get the threshold amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Check if the alert is enabled
    pub fn is_enabled(&self) -> bool {
        self.amount.is_positive()
    }

    /// Replace the threshold; zero disables the alert
    pub fn set(&mut self, amount: Money) -> BuddyResult<AlertChange> {
        let amount = amount.ensure_non_negative("Alert amount")?;
        let previous = std::mem::replace(&mut self.amount, amount);

        Ok(if amount.is_zero() {
            AlertChange::Removed
        } else if previous.is_zero() {
            AlertChange::Set(amount)
        } else {
            AlertChange::Updated {
                previous,
                current: amount,
            }
        })
    }

    /// Evaluate the threshold against a total
    ///
    /// Fires every time the total is above an enabled threshold.
    pub fn check(&self, total: Money) -> Option<AlertNotice> {
        (self.is_enabled() && total > self.amount).then_some(AlertNotice {
            threshold: self.amount,
            total,
        })
    }
}

impl AlertNotice {
    /// The warning text, with amounts in the given currency symbol
    pub fn message(&self, symbol: &str) -> String {
        format!(
            "Warning: Your total expenses ({}) have exceeded the alert limit of {}",
            self.total.format_with_symbol(symbol),
            self.threshold.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for AlertNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("$"))
    }
}
