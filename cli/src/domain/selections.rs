//! Request and outcome types for applying a preseed selections file.

use std::path::{Path, PathBuf};
use std::process::Output;

use serde::Serialize;

/// One invocation of `debconfdb:set`. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyRequest {
    /// Preseed file in the format read by debconf-set-selections(1).
    pub file_path: PathBuf,
    /// Check mode: validate only and report what would change.
    pub dry_run: bool,
    /// Delete `file_path` after a successful apply.
    pub cleanup: bool,
}

impl ApplyRequest {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, dry_run: bool, cleanup: bool) -> Self {
        Self {
            file_path: file_path.into(),
            dry_run,
            cleanup,
        }
    }
}

/// Successful result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Check mode: the file is valid and would be applied.
    WouldApply,
    /// The entries were written to the debconf database.
    Applied {
        /// Whether the source file was deleted afterwards.
        cleaned_up: bool,
    },
}

impl ApplyOutcome {
    /// Human-readable summary line for this outcome.
    #[must_use]
    pub fn message(&self, path: &Path) -> String {
        match self {
            Self::WouldApply => format!(
                "I would set debconf database entries from the file \"{}\".",
                path.display()
            ),
            Self::Applied { .. } => format!(
                "I have set debconf database entries from the file \"{}\".",
                path.display()
            ),
        }
    }
}

/// Change report consumed by the orchestrating host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    pub changed: bool,
}

/// Extract the diagnostic text from a failed process.
///
/// Prefers stderr, then stdout, then the exit status itself so the message
/// never ends up empty. One trailing period is dropped; error messages
/// supply their own.
#[must_use]
pub fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = [stderr.trim(), stdout.trim()]
        .into_iter()
        .find(|text| !text.is_empty());
    match text {
        Some(text) => text.strip_suffix('.').unwrap_or(text).trim_end().to_string(),
        None => output.status.to_string(),
    }
}
