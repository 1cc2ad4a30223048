//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution, with an optional timeout that kills the child.

use std::ffi::OsStr;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// With no timeout the runner waits for the child indefinitely, which is what
/// debconf-set-selections needs on a slow or locked database.
pub struct TokioCommandRunner {
    timeout: Option<Duration>,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&OsStr]) -> Result<Output> {
        tracing::debug!(program, ?args, "spawning");

        let child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let completion = child.wait_with_output();
        let output = match self.timeout {
            None => completion.await,
            Some(timeout) => {
                // Dropping the timed-out future drops the child, and
                // `kill_on_drop` terminates it.
                tokio::time::timeout(timeout, completion)
                    .await
                    .map_err(|_| {
                        anyhow::anyhow!("{program} timed out after {}s", timeout.as_secs())
                    })?
            }
        }
        .with_context(|| format!("waiting for {program}"))?;

        tracing::debug!(program, status = %output.status, "exited");
        Ok(output)
    }
}
