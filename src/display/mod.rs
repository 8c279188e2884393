//! Display formatting for terminal output
//!
//! Turns ledger outcomes into the text the shell prints. Nothing in here
//! writes to the terminal itself.

pub mod alert;
pub mod budget;
pub mod expense;

pub use alert::{format_alert_change, format_alert_notice};
pub use budget::{
    format_budget_check, format_budget_edited, format_budget_set, format_budget_status,
    format_budget_summary,
};
pub use expense::{
    format_expense_added, format_expense_deleted, format_expense_edited, format_expense_list,
    format_expense_matches,
};
