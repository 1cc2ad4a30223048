//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::ToolConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or faked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// A non-zero exit status is returned as `Ok`; callers inspect
    /// `Output::status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// runner's timeout. On timeout the child process must be killed.
    async fn run(&self, program: &str, args: &[&OsStr]) -> Result<Output>;
}

// ── Change Tracking Port ──────────────────────────────────────────────────────

/// Host check-mode bookkeeping: records whether a run altered (or would alter)
/// system state and reports it for aggregation across commands.
pub trait ChangeTracker {
    /// Record that this run changes, or in check mode would change, state.
    fn mark_change(&self);
    /// Emit the change report to the host.
    fn report_change(&self);
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts user-facing messages so services can emit them without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an informational message.
    fn info(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the tool configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<ToolConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
