//! Budget Buddy - a command-line personal finance tracker
//!
//! Expenses are always recorded in the "Overall" budget and, when a matching
//! category exists, in that category budget as well. An optional alert warns
//! when total spending passes a threshold.
//!
//! # Architecture
//!
//! - `config`: Configuration paths and settings
//! - `error`: Custom error types
//! - `models`: Money, expenses, budgets and the alert threshold
//! - `services`: The budget ledger
//! - `display`: Text rendering of ledger outcomes
//! - `cli`: The interactive shell
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use budget_buddy::models::Money;
//! use budget_buddy::services::{BudgetLedger, OVERALL};
//! use chrono::NaiveDate;
//!
//! let mut ledger = BudgetLedger::new();
//! ledger.set_budget("Food", Money::from_dollars(100)).unwrap();
//!
//! let lunch = NaiveDate::from_ymd_opt(2025, 10, 5)
//!     .unwrap()
//!     .and_hms_opt(12, 30, 0)
//!     .unwrap();
//! ledger
//!     .add_expense("Food", Money::from_cents(1550), "Lunch", lunch)
//!     .unwrap();
//!
//! assert_eq!(ledger.budget(OVERALL).unwrap().len(), 1);
//! assert_eq!(ledger.budget("Food").unwrap().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{BuddyError, BuddyResult};
