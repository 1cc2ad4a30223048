//! `debconfdb:set` — set debconf database entries from a preseed file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::selections::apply_selections;
use crate::commands::CheckArgs;
use crate::domain::ApplyRequest;
use crate::output::TerminalReporter;

/// Arguments for `debconfdb:set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// File containing database entries as described in manpage debconf-set-selections(1)
    pub file: PathBuf,

    /// Do not delete <FILE>
    #[arg(long)]
    pub no_cleanup: bool,

    #[command(flatten)]
    pub check: CheckArgs,
}

impl SetArgs {
    /// Build the immutable request for this invocation.
    #[must_use]
    pub fn request(&self) -> ApplyRequest {
        ApplyRequest::new(self.file.clone(), self.check.check, !self.no_cleanup)
    }
}

/// Run `debconfdb:set`.
///
/// # Errors
///
/// Returns the `SelectionsError` of the first failing step.
pub async fn run(app: &AppContext, args: &SetArgs) -> Result<ExitCode> {
    let request = args.request();
    tracing::debug!(?request, "debconfdb:set");

    let reporter = TerminalReporter::new(&app.output);
    let result = apply_selections(&request, &app.tools, &app.runner, &app.tracker, &reporter).await;
    if let Err(err) = &result {
        tracing::debug!(
            code = err.code(),
            path = %err.path().display(),
            database_changed = err.database_changed(),
            "debconfdb:set failed"
        );
    }
    result?;

    Ok(ExitCode::SUCCESS)
}
