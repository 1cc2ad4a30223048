//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Selections errors ─────────────────────────────────────────────────────────

/// Terminal failures of `debconfdb:set`. Each one aborts the whole run.
#[derive(Debug, Error)]
pub enum SelectionsError {
    #[error("The file does not exist: \"{}\".", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("The format of file \"{}\" is incorrect: {diagnostic}.", .path.display())]
    ValidationFailed { path: PathBuf, diagnostic: String },

    #[error("I cannot set database entries from the file \"{}\": {diagnostic}.", .path.display())]
    ApplyFailed { path: PathBuf, diagnostic: String },

    /// The entries were applied; only the deletion of the source file failed.
    #[error("I cannot cleanup: failed to delete file \"{}\": {diagnostic}.", .path.display())]
    CleanupFailed { path: PathBuf, diagnostic: String },
}

impl SelectionsError {
    /// Stable machine-readable name of the failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "file_not_found",
            Self::ValidationFailed { .. } => "validation_failed",
            Self::ApplyFailed { .. } => "apply_failed",
            Self::CleanupFailed { .. } => "cleanup_failed",
        }
    }

    /// Whether the debconf database was modified before the failure.
    #[must_use]
    pub fn database_changed(&self) -> bool {
        matches!(self, Self::CleanupFailed { .. })
    }

    /// The file the failed run was operating on.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::ValidationFailed { path, .. }
            | Self::ApplyFailed { path, .. }
            | Self::CleanupFailed { path, .. } => path,
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to tool configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}\n\nExpected a program name without whitespace.")]
    InvalidValue { key: String, value: String },
}
