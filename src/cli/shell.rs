//! Interactive shell
//!
//! The only place where ledger outcomes meet the terminal: lines come in,
//! commands run against the ledger, rendered text goes out.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use tracing::debug;

use super::commands::{parse_line, ParsedLine, ShellCommand};
use super::datetime::{self, DayEdge};
use crate::config::Settings;
use crate::display;
use crate::error::{BuddyError, BuddyResult};
use crate::models::{DateRange, ExpenseEdit, Money};
use crate::services::BudgetLedger;

const WELCOME: &str = "Hello! I'm your Budget Buddy.\nType 'help' to see what I can do.";
const GOODBYE: &str = "Thank you for using Budget Buddy. Goodbye!";

/// Whether the shell should keep reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell state: the ledger plus the settings that shape input handling
pub struct Shell {
    ledger: BudgetLedger,
    settings: Settings,
    clock: fn() -> NaiveDateTime,
}

impl Shell {
    /// Create a shell with a fresh ledger
    pub fn new(settings: Settings) -> BuddyResult<Self> {
        let ledger = BudgetLedger::with_alert(settings.default_alert)?;
        Ok(Self {
            ledger,
            settings,
            clock: datetime::now,
        })
    }

    /// Replace the clock used for expenses entered without a time
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Get the ledger this shell operates on
    pub fn ledger(&self) -> &BudgetLedger {
        &self.ledger
    }

    /// Read commands until `bye` or end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the
    /// session.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        interactive: bool,
    ) -> BuddyResult<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buffer = Vec::new();
        loop {
            if interactive {
                write!(output, "> ")?;
                output.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            let (text, flow) = self.execute_line(line.trim_end_matches(['\r', '\n']));
            write!(output, "{}", text)?;
            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(output, "{}", GOODBYE)?;
        output.flush()?;
        Ok(())
    }

    /// Run one line and return what to print
    pub fn execute_line(&mut self, line: &str) -> (String, Flow) {
        let command = match parse_line(line) {
            Ok(None) => return (String::new(), Flow::Continue),
            Ok(Some(ParsedLine::Command(command))) => command,
            Ok(Some(ParsedLine::Clap(err))) => return (err.render().to_string(), Flow::Continue),
            Err(err) => return (format!("Error: {}\n", err), Flow::Continue),
        };

        if command == ShellCommand::Bye {
            return (String::new(), Flow::Exit);
        }

        debug!(?command, "running shell command");
        match self.execute(command) {
            Ok(text) => (text, Flow::Continue),
            Err(err) => (format!("Error: {}\n", err), Flow::Continue),
        }
    }

    /// Run a parsed command against the ledger
    pub fn execute(&mut self, command: ShellCommand) -> BuddyResult<String> {
        match command {
            ShellCommand::Add {
                amount,
                category,
                description,
                time,
            } => {
                let amount = self.parse_amount(&amount)?;
                let now = (self.clock)();
                let mut output = String::new();

                let timestamp = match time.as_deref().map(str::trim) {
                    None | Some("") => now,
                    Some(text) => datetime::parse(text).unwrap_or_else(|_| {
                        output.push_str(&format!(
                            "Could not read time '{}'; using the current time.\n",
                            text
                        ));
                        now
                    }),
                };

                let added = self.ledger.add_expense(
                    category.as_deref().unwrap_or(""),
                    amount,
                    &description,
                    timestamp,
                )?;
                output.push_str(&display::format_expense_added(&added, self.symbol()));
                Ok(output)
            }

            ShellCommand::Delete { index } => {
                let deleted = self.ledger.delete_expense(index)?;
                Ok(display::format_expense_deleted(&deleted, self.symbol()))
            }

            ShellCommand::List { from, to } => {
                let range = DateRange::new(
                    from.as_deref()
                        .map(|text| datetime::parse_bound(text, DayEdge::Start))
                        .transpose()?,
                    to.as_deref()
                        .map(|text| datetime::parse_bound(text, DayEdge::End))
                        .transpose()?,
                );
                let rows = self.ledger.list_all_expenses(&range)?;
                Ok(display::format_expense_list(
                    &rows,
                    !range.is_unbounded(),
                    self.symbol(),
                ))
            }

            ShellCommand::EditExpense {
                index,
                amount,
                description,
                time,
            } => {
                let edit = ExpenseEdit {
                    amount: amount.as_deref().map(|a| self.parse_amount(a)).transpose()?,
                    description,
                    timestamp: time.as_deref().map(datetime::parse).transpose()?,
                };
                let edited = self.ledger.edit_expense(index, &edit)?;
                Ok(display::format_expense_edited(&edited, self.symbol()))
            }

            ShellCommand::SetBudget { amount, category } => {
                let amount = self.parse_amount(&amount)?;
                let set = self
                    .ledger
                    .set_budget(category.as_deref().unwrap_or(""), amount)?;
                Ok(display::format_budget_set(&set, self.symbol()))
            }

            ShellCommand::CheckBudget { category } => {
                let check = self
                    .ledger
                    .check_budget(category.as_deref().unwrap_or(""))?;
                Ok(display::format_budget_check(&check, self.symbol()))
            }

            ShellCommand::EditBudget {
                current,
                amount,
                name,
            } => {
                let limit = amount.as_deref().map(|a| self.parse_amount(a)).transpose()?;
                let edited = self.ledger.edit_budget(&current, limit, name.as_deref())?;
                Ok(display::format_budget_edited(&edited, self.symbol()))
            }

            ShellCommand::Summary => Ok(display::format_budget_summary(
                &self.ledger.summary(),
                self.symbol(),
            )),

            ShellCommand::Alert { amount } => {
                let amount = self.parse_amount(&amount)?;
                let change = self.ledger.set_alert(amount)?;
                Ok(display::format_alert_change(&change, self.symbol()))
            }

            ShellCommand::DeleteAlert => {
                let change = self.ledger.remove_alert()?;
                Ok(display::format_alert_change(&change, self.symbol()))
            }

            ShellCommand::Find { keyword } => {
                let keyword = keyword.join(" ");
                let matches = self.ledger.find_expense(&keyword)?;
                Ok(display::format_expense_matches(
                    &keyword,
                    &matches,
                    self.symbol(),
                ))
            }

            ShellCommand::Bye => Ok(String::new()),
        }
    }

    fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Parse an amount and enforce the configured maximum
    fn parse_amount(&self, text: &str) -> BuddyResult<Money> {
        let amount = Money::parse(text)?;
        if amount > self.settings.max_amount {
            return Err(BuddyError::invalid_amount(format!(
                "Amount cannot exceed {}",
                self.settings.max_amount.format_with_symbol(self.symbol())
            )));
        }
        Ok(amount)
    }
}
