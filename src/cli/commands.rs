//! Shell command definitions
//!
//! Each line typed into the shell is split with `shell-words` and parsed
//! with these clap definitions.

use clap::{Parser, Subcommand};

use crate::error::{BuddyError, BuddyResult};

/// One line of shell input
#[derive(Parser, Debug)]
#[command(
    name = "buddy",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Shell commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add an expense (always recorded in the Overall budget)
    Add {
        /// Amount (e.g., "15.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Budget category to also record the expense under
        #[arg(short, long)]
        category: Option<String>,
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// When it was spent (e.g., "Oct 05 2025 at 12:30"); defaults to now
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Delete an expense by its number in `list`
    Delete {
        /// Expense number (1 = most recent)
        index: usize,
    },

    /// List expenses, most recent first
    List {
        /// Only expenses at or after this time
        #[arg(long)]
        from: Option<String>,
        /// Only expenses at or before this time
        #[arg(long)]
        to: Option<String>,
    },

    /// Edit an expense by its number in `list`
    EditExpense {
        /// Expense number (1 = most recent)
        index: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New time
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Set the limit of a budget (the Overall budget when no category is given)
    SetBudget {
        /// Limit amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Budget category; created if it does not exist
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show limit, spending and remaining amount of a budget
    CheckBudget {
        /// Budget category (defaults to Overall)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Change the limit and/or name of a budget
    EditBudget {
        /// Current budget name
        current: String,
        /// New limit
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show every budget
    Summary,

    /// Warn when total spending exceeds an amount ("alert 0" removes it)
    Alert {
        /// Alert threshold
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove the spending alert
    DeleteAlert,

    /// Find expenses whose description contains a keyword
    Find {
        /// Keyword (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
    },

    /// Leave Budget Buddy
    #[command(visible_alias = "exit", alias = "quit")]
    Bye,
}

/// Split and parse one shell line
///
/// Returns `Ok(None)` for blank lines. Usage errors and help requests are
/// not failures here; they come back as [`ParsedLine::Clap`] for display.
pub fn parse_line(line: &str) -> BuddyResult<Option<ParsedLine>> {
    let words = shell_words::split(line)
        .map_err(|e| BuddyError::invalid_input(format!("Could not read command: {}", e)))?;

    if words.is_empty() {
        return Ok(None);
    }

    Ok(Some(match ShellLine::try_parse_from(words) {
        Ok(parsed) => ParsedLine::Command(parsed.command),
        Err(err) => ParsedLine::Clap(err),
    }))
}

/// Outcome of parsing a non-blank line
#[derive(Debug)]
pub enum ParsedLine {
    Command(ShellCommand),
    /// Usage errors and help requests, rendered by clap
    Clap(clap::Error),
}
