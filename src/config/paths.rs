//! Path management for Budget Buddy
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_BUDDY_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-buddy` or `~/.config/budget-buddy`
//! 3. Windows: `%APPDATA%\budget-buddy`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::BuddyError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "BUDGET_BUDDY_CONFIG_DIR";

const APP_DIR_NAME: &str = "budget-buddy";

/// Manages the paths used by Budget Buddy
#[derive(Debug, Clone)]
pub struct BuddyPaths {
    base_dir: PathBuf,
}

impl BuddyPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be found.
    pub fn new() -> Result<Self, BuddyError> {
        Self::from_override(std::env::var_os(CONFIG_DIR_ENV))
    }

    /// Use `custom` when it is set and non-empty, else the platform default
    fn from_override(custom: Option<OsString>) -> Result<Self, BuddyError> {
        let base_dir = match custom {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BuddyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the configuration directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), BuddyError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BuddyError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BuddyError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }

    let home = std::env::var_os("HOME")
        .ok_or_else(|| BuddyError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BuddyError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| BuddyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
