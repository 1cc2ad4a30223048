//! Application context — unified state passed to every command handler.
//!
//! Adding a cross-cutting concern requires only one field change here; no
//! command signature changes.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::ToolConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::output::{HostChangeTracker, OutputContext};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// External tool names and timeout.
    pub tools: ToolConfig,
    /// Process runner configured with `tools.timeout()`.
    pub runner: TokioCommandRunner,
    /// Host change tracker for this invocation.
    pub tracker: HostChangeTracker,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and a config store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn new(flags: &OutputFlags, store: &impl ConfigStore) -> Result<Self> {
        let tools = store.load()?;
        tracing::debug!(?tools, "loaded tool config");
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            runner: TokioCommandRunner::new(tools.timeout()),
            tools,
            tracker: HostChangeTracker::new(),
        })
    }
}
