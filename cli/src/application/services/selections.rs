//! Application service — apply a debconf preseed selections file.
//!
//! The run is a strict gate sequence: existence check, validate, mark change,
//! [check-mode exit], apply, [cleanup]. Each gate either proceeds or ends the
//! run with one `SelectionsError`. A cleanup failure does not undo the apply.

use std::ffi::OsStr;
use std::path::Path;

use crate::application::ports::{ChangeTracker, CommandRunner, ProgressReporter};
use crate::domain::selections::diagnostic;
use crate::domain::{ApplyOutcome, ApplyRequest, SelectionsError, ToolConfig};

/// Flag that makes debconf-set-selections validate without writing.
pub const CHECK_ONLY_FLAG: &str = "--checkonly";

/// Result of one external step: `Ok(())` on exit 0, otherwise the diagnostic.
type StepResult = std::result::Result<(), String>;

/// Validate, apply, and optionally delete the preseed file in `request`.
///
/// # Errors
///
/// Returns the first failing gate as a `SelectionsError`.
pub async fn apply_selections(
    request: &ApplyRequest,
    tools: &ToolConfig,
    runner: &impl CommandRunner,
    tracker: &impl ChangeTracker,
    reporter: &impl ProgressReporter,
) -> Result<ApplyOutcome, SelectionsError> {
    let path = request.file_path.as_path();

    if !path.exists() {
        return Err(SelectionsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // 1. Validate
    let check_only = OsStr::new(CHECK_ONLY_FLAG);
    run_step(runner, &tools.selections_bin, &[check_only, path.as_os_str()])
        .await
        .map_err(|diagnostic| SelectionsError::ValidationFailed {
            path: path.to_path_buf(),
            diagnostic,
        })?;

    // 2. Record intent
    tracker.mark_change();

    // 3. Check mode stops here
    if request.dry_run {
        return Ok(finish(ApplyOutcome::WouldApply, path, tracker, reporter));
    }

    // 4. Apply
    run_step(runner, &tools.selections_bin, &[path.as_os_str()])
        .await
        .map_err(|diagnostic| SelectionsError::ApplyFailed {
            path: path.to_path_buf(),
            diagnostic,
        })?;

    // 5. Cleanup
    if request.cleanup {
        run_step(runner, &tools.unlink_bin, &[path.as_os_str()])
            .await
            .map_err(|diagnostic| SelectionsError::CleanupFailed {
                path: path.to_path_buf(),
                diagnostic,
            })?;
    }

    let outcome = ApplyOutcome::Applied {
        cleaned_up: request.cleanup,
    };
    Ok(finish(outcome, path, tracker, reporter))
}

fn finish(
    outcome: ApplyOutcome,
    path: &Path,
    tracker: &impl ChangeTracker,
    reporter: &impl ProgressReporter,
) -> ApplyOutcome {
    let message = outcome.message(path);
    match outcome {
        ApplyOutcome::WouldApply => reporter.info(&message),
        ApplyOutcome::Applied { .. } => reporter.success(&message),
    }
    tracker.report_change();
    outcome
}

async fn run_step(runner: &impl CommandRunner, program: &str, args: &[&OsStr]) -> StepResult {
    match runner.run(program, args).await {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => {
            let diag = diagnostic(&output);
            tracing::debug!(program, status = %output.status, diagnostic = %diag, "step failed");
            Err(diag)
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "step could not run");
            Err(format!("{e:#}"))
        }
    }
}
