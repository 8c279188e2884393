//! Alert display formatting

use crate::models::{AlertChange, AlertNotice};

/// Format the result of setting or removing the alert
pub fn format_alert_change(change: &AlertChange, symbol: &str) -> String {
    match change {
        AlertChange::Set(amount) => format!(
            "Budget alert set at {}. You will be notified if expenses exceed this amount.\n",
            amount.format_with_symbol(symbol)
        ),
        AlertChange::Updated { previous, current } => format!(
            "Alert amount updated from {} to {}.\n",
            previous.format_with_symbol(symbol),
            current.format_with_symbol(symbol)
        ),
        AlertChange::Removed => "Budget alert has been removed.\n".to_string(),
    }
}

/// Format a threshold-crossing warning
pub fn format_alert_notice(notice: &AlertNotice, symbol: &str) -> String {
    format!("{}\n", notice.message(symbol))
}
