//! Domain types and validators for tool configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::domain::error::ConfigError;

pub const DEFAULT_SELECTIONS_BIN: &str = "debconf-set-selections";
pub const DEFAULT_UNLINK_BIN: &str = "unlink";

/// External programs used by `debconfdb:set`, stored in `~/.droid/debconfdb.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Validates (`--checkonly`) and applies preseed files.
    pub selections_bin: String,
    /// Deletes the preseed file after it has been applied.
    pub unlink_bin: String,
    /// Per-process timeout. Absent or `0` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            selections_bin: DEFAULT_SELECTIONS_BIN.to_string(),
            unlink_bin: DEFAULT_UNLINK_BIN.to_string(),
            timeout_secs: None,
        }
    }
}

impl ToolConfig {
    /// Effective process timeout, `None` meaning unbounded.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns an error if a program name is empty or contains whitespace.
    pub fn validate(&self) -> Result<()> {
        validate_program_name("selections_bin", &self.selections_bin)?;
        validate_program_name("unlink_bin", &self.unlink_bin)?;
        Ok(())
    }
}

/// Validates a configured program name.
///
/// # Errors
///
/// Returns an error if the value is empty or contains whitespace.
pub fn validate_program_name(key: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into());
    }
    Ok(())
}
