//! Interactive shell
//!
//! Bridges line-oriented clap parsing with the budget ledger.

pub mod commands;
pub mod datetime;
pub mod shell;

pub use commands::{parse_line, ParsedLine, ShellCommand};
pub use shell::{Flow, Shell};
