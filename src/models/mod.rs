//! Core data models for Budget Buddy
//!
//! This module contains the data structures of the expense ledger: money
//! amounts, expenses, category budgets and the spending alert.

pub mod alert;
pub mod budget;
pub mod expense;
pub mod money;
pub mod range;

pub use alert::{AlertChange, AlertNotice, AlertThreshold};
pub use budget::{Budget, ListedExpense};
pub use expense::{Expense, ExpenseEdit, DISPLAY_TIMESTAMP_FORMAT};
pub use money::{Money, MoneyParseError};
pub use range::DateRange;
