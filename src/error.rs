//! Custom error types for Budget Buddy
//!
//! Every recoverable failure in the ledger and its collaborators is a
//! `BuddyError`. The shell renders these as user messages and keeps running.

use thiserror::Error;

/// The main error type for Budget Buddy operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuddyError {
    /// Amount is negative, or not positive where a positive amount is required
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// List index out of range
    #[error("Invalid index {index}: please provide a number between 1 and {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Blank or malformed argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Budget category does not exist
    #[error("Budget category '{0}' not found")]
    CategoryNotFound(String),

    /// Budget category already exists
    #[error("Budget category '{0}' already exists")]
    Duplicate(String),

    /// The Overall budget is missing
    #[error("No Overall budget found")]
    NoOverallBudget,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BuddyError {
    /// Create a "not found" error for a budget category
    pub fn category_not_found(category: impl Into<String>) -> Self {
        Self::CategoryNotFound(category.into())
    }

    /// Create an invalid amount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidIndex { .. } | Self::InvalidInput(_)
        )
    }
}

impl From<std::io::Error> for BuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Budget Buddy operations
pub type BuddyResult<T> = Result<T, BuddyError>;
