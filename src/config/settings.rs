//! User settings for Budget Buddy
//!
//! Settings live in `config.json` inside the configuration directory. A
//! missing file means defaults; `buddy init` writes one out.

use serde::{Deserialize, Serialize};

use super::paths::BuddyPaths;
use crate::error::BuddyError;
use crate::models::Money;

/// Upper bound accepted for `max_amount`
pub const MAX_AMOUNT_CEILING: Money = Money::from_dollars(1_000_000_000);

/// User settings for Budget Buddy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Largest amount accepted from the shell
    #[serde(default = "default_max_amount")]
    pub max_amount: Money,

    /// Alert threshold the ledger starts with (zero = disabled)
    #[serde(default)]
    pub default_alert: Money,

    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Currency symbol shown in front of every amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_amount() -> Money {
    Money::from_dollars(100_000)
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_amount: default_max_amount(),
            default_alert: Money::zero(),
            log_filter: default_log_filter(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BuddyPaths) -> Result<Self, BuddyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BuddyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BuddyError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BuddyPaths) -> Result<(), BuddyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BuddyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BuddyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the ledger could not start with
    pub fn validate(&self) -> Result<(), BuddyError> {
        if !self.max_amount.is_positive() {
            return Err(BuddyError::Config(
                "max_amount must be a positive number of cents".into(),
            ));
        }
        if self.max_amount > MAX_AMOUNT_CEILING {
            return Err(BuddyError::Config(format!(
                "max_amount cannot exceed {} cents",
                MAX_AMOUNT_CEILING.cents()
            )));
        }
        if self.default_alert.is_negative() {
            return Err(BuddyError::Config(
                "default_alert cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
