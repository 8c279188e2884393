//! Budget display formatting
//!
//! Formats budget checks, limit changes and the all-budgets summary table.

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::services::{BudgetCheck, BudgetEdited, BudgetSet, BudgetStatus};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

impl SummaryRow {
    fn new(status: &BudgetStatus, symbol: &str) -> Self {
        Self {
            category: status.name.clone(),
            limit: status.limit.format_with_symbol(symbol),
            spent: status.spent.format_with_symbol(symbol),
            remaining: status.remaining.format_with_symbol(symbol),
        }
    }
}

/// Format the confirmation for set-budget
pub fn format_budget_set(set: &BudgetSet, symbol: &str) -> String {
    let verb = if set.created { "created" } else { "set" };
    format!(
        "Budget for {} {} at {}.\n",
        set.name,
        verb,
        set.limit.format_with_symbol(symbol)
    )
}

/// Format the confirmation for edit-budget
pub fn format_budget_edited(edited: &BudgetEdited, symbol: &str) -> String {
    let mut output = String::new();

    if edited.previous_name != edited.name {
        output.push_str(&format!(
            "Budget category '{}' renamed to '{}'.\n",
            edited.previous_name, edited.name
        ));
    }
    if edited.limit_changed {
        output.push_str(&format!(
            "Budget limit for {} updated to: {}\n",
            edited.name,
            edited.limit.format_with_symbol(symbol)
        ));
    }
    if output.is_empty() {
        output.push_str(&format!("Budget {} unchanged.\n", edited.name));
    }

    output
}

/// Format a single budget's status
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let title = if status.is_overall() {
        "Overall Budget".to_string()
    } else {
        format!("Budget for {}", status.name)
    };

    format!(
        "{}\n{}\n  Total Budget: {:>12}\n  Spent:        {:>12}\n  Remaining:    {:>12}\n",
        title,
        "=".repeat(title.len()),
        status.limit.format_with_symbol(symbol),
        status.spent.format_with_symbol(symbol),
        status.remaining.format_with_symbol(symbol)
    )
}

/// Format the answer to check-budget
pub fn format_budget_check(check: &BudgetCheck, symbol: &str) -> String {
    match check {
        BudgetCheck::Found(status) => format_budget_status(status, symbol),
        BudgetCheck::NotFound(category) => {
            format!("Budget category '{}' not found.\n", category)
        }
    }
}

/// Format every budget as a table
pub fn format_budget_summary(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let total_limit: Money = statuses
        .iter()
        .filter(|s| !s.is_overall())
        .map(|s| s.limit)
        .sum();

    let rows = statuses.iter().map(|status| SummaryRow::new(status, symbol));
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!(
        "Budget Summary:\n{}\nCategory limits total: {}\n",
        table,
        total_limit.format_with_symbol(symbol)
    )
}
