//! JSON output helpers.
//!
//! The host reads one `[DROID-RESULT]` line per command from stdout.

use crate::domain::ChangeReport;

/// Prefix the host scans for in command output.
pub const RESULT_PREFIX: &str = "[DROID-RESULT]";

/// Format the change report line, e.g. `[DROID-RESULT] {"changed":true}`.
#[must_use]
pub fn format_change_report(report: &ChangeReport) -> String {
    // A struct with one bool field cannot fail to serialize.
    let body = serde_json::to_string(report)
        .unwrap_or_else(|_| format!("{{\"changed\":{}}}", report.changed));
    format!("{RESULT_PREFIX} {body}")
}
