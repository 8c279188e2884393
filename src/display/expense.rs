//! Expense display formatting
//!
//! Formats expense outcomes and listings for terminal output.

use crate::models::ListedExpense;
use crate::services::{ExpenseAdded, ExpenseDeleted, ExpenseEdited, ExpenseMatch, OVERALL};

use super::alert::format_alert_notice;

/// Format the confirmation for a newly added expense
pub fn format_expense_added(added: &ExpenseAdded, symbol: &str) -> String {
    let mut output = String::new();

    if let Some(category) = &added.category_missing {
        output.push_str(&format!(
            "Budget category '{}' not found. Added to {} budget only.\n",
            category, OVERALL
        ));
    }

    output.push_str(&format!(
        "Expense added: {}\n",
        added.expense.describe(symbol)
    ));
    if let Some(category) = &added.category {
        output.push_str(&format!("  Category: {}\n", category));
    }

    if let Some(notice) = &added.alert {
        output.push_str(&format_alert_notice(notice, symbol));
    }

    output
}

/// Format a most-recent-first expense listing
pub fn format_expense_list(rows: &[ListedExpense<'_>], filtered: bool, symbol: &str) -> String {
    if rows.is_empty() {
        return if filtered {
            "No expenses recorded in that time range.\n".to_string()
        } else {
            "No expenses recorded.\n".to_string()
        };
    }

    let width = rows
        .iter()
        .map(|row| row.index.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::from("Expense List:\n");
    for row in rows {
        output.push_str(&format!(
            "{:>width$}. {}\n",
            row.index,
            row.expense.describe(symbol),
            width = width
        ));
    }
    output
}

/// Format the confirmation for a deleted expense
pub fn format_expense_deleted(deleted: &ExpenseDeleted, symbol: &str) -> String {
    let mut output = format!(
        "Expense deleted from {} budget:\n  -> {}\n",
        OVERALL,
        deleted.expense.describe(symbol)
    );

    for category in &deleted.categories {
        output.push_str(&format!("Expense also deleted from category '{}'.\n", category));
    }

    output
}

/// Format the confirmation for an edited expense
pub fn format_expense_edited(edited: &ExpenseEdited, symbol: &str) -> String {
    let mut output = format!(
        "Expense at index {} updated.\n  Before: {}\n  After:  {}\n",
        edited.index,
        edited.before.describe(symbol),
        edited.after.describe(symbol)
    );

    for category in &edited.categories {
        output.push_str(&format!("Expense also updated in category '{}'.\n", category));
    }

    if let Some(notice) = &edited.alert {
        output.push_str(&format_alert_notice(notice, symbol));
    }

    output
}

/// Format keyword search results
pub fn format_expense_matches(keyword: &str, matches: &[ExpenseMatch], symbol: &str) -> String {
    if matches.is_empty() {
        return format!("No matching expenses found for keyword: {}\n", keyword.trim());
    }

    let mut output = format!("Expenses matching '{}':\n", keyword.trim());
    for hit in matches {
        output.push_str(&format!("{}. {}\n", hit.index, hit.expense.describe(symbol)));
    }
    output
}
