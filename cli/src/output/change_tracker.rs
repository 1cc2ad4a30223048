//! `HostChangeTracker` — Presentation-layer implementation of `ChangeTracker`.
//!
//! Prints the `[DROID-RESULT]` line the orchestrating host parses to
//! aggregate changes across commands.

use std::cell::Cell;

use crate::application::ports::ChangeTracker;
use crate::domain::ChangeReport;
use crate::output::json::format_change_report;

/// Records whether the run changed state and prints the host result line.
///
/// The report goes to stdout unconditionally; `--quiet` only silences
/// human-oriented messages.
#[derive(Debug, Default)]
pub struct HostChangeTracker {
    changed: Cell<bool>,
}

impl HostChangeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current report without emitting it.
    #[must_use]
    pub fn report(&self) -> ChangeReport {
        ChangeReport {
            changed: self.changed.get(),
        }
    }
}

impl ChangeTracker for HostChangeTracker {
    fn mark_change(&self) {
        self.changed.set(true);
    }

    fn report_change(&self) {
        println!("{}", format_change_report(&self.report()));
    }
}
