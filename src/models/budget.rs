//! Budget model
//!
//! A budget is a named spending limit together with the expenses recorded
//! against it, kept in insertion order.
//!
//! Users address expenses by their position in the most-recent-first
//! listing: index 1 is the expense added last.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::money::Money;
use super::range::DateRange;
use crate::error::{BuddyError, BuddyResult};

/// A named spending limit and its expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    name: String,
    limit: Money,
    expenses: Vec<Expense>,
}

/// One row of a most-recent-first listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedExpense<'a> {
    /// 1-based position in the unfiltered most-recent-first listing
    pub index: usize,
    pub expense: &'a Expense,
}

impl Budget {
    /// Create an empty budget
    pub fn new(name: impl Into<String>, limit: Money) -> BuddyResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BuddyError::invalid_input("Budget name cannot be empty"));
        }

        Ok(Self {
            name,
            limit: limit.ensure_non_negative("Budget limit")?,
            expenses: Vec::new(),
        })
    }

    /// Create an empty budget with a zero limit
    pub(crate) fn unlimited(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: Money::zero(),
            expenses: Vec::new(),
        }
    }

    /// Get the budget name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the spending limit
    pub fn limit(&self) -> Money {
        self.limit
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if no expenses are recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Record an expense as the most recent one
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Replace the spending limit
    pub fn set_limit(&mut self, limit: Money) -> BuddyResult<()> {
        self.limit = limit.ensure_non_negative("Budget limit")?;
        Ok(())
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sum of all recorded expenses
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Limit minus spending, never below zero
    pub fn remaining(&self) -> Money {
        self.limit.saturating_remaining(self.total_expenses())
    }

    /// Convert a 1-based most-recent-first index into a vector position
    fn position_of(&self, index: usize) -> BuddyResult<usize> {
        let len = self.expenses.len();
        if index < 1 || index > len {
            return Err(BuddyError::InvalidIndex { index, len });
        }
        Ok(len - index)
    }

    /// Look up an expense by its most-recent-first index
    pub fn get(&self, index: usize) -> BuddyResult<&Expense> {
        let position = self.position_of(index)?;
        Ok(&self.expenses[position])
    }

    /// Remove the expense at a most-recent-first index
    pub fn delete_expense(&mut self, index: usize) -> BuddyResult<Expense> {
        let position = self.position_of(index)?;
        Ok(self.expenses.remove(position))
    }

    /// Replace the expense at a most-recent-first index, returning the old one
    pub fn replace_expense(&mut self, index: usize, expense: Expense) -> BuddyResult<Expense> {
        let position = self.position_of(index)?;
        Ok(std::mem::replace(&mut self.expenses[position], expense))
    }

    /// Remove the first expense equal to `target`
    pub fn remove_matching(&mut self, target: &Expense) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e == target)?;
        Some(self.expenses.remove(position))
    }

    /// Replace the first expense equal to `target`; returns whether one was found
    pub fn replace_matching(&mut self, target: &Expense, replacement: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| **e == *target) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    /// Most-recent-first listing restricted to `range`
    pub fn listing(&self, range: &DateRange) -> Vec<ListedExpense<'_>> {
        let len = self.expenses.len();
        self.expenses
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, expense)| range.contains(expense.timestamp()))
            .map(|(position, expense)| ListedExpense {
                index: len - position,
                expense,
            })
            .collect()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: spent {} of {} ({} remaining)",
            self.name,
            self.total_expenses(),
            self.limit,
            self.remaining()
        )
    }
}
