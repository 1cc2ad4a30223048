//! Property-based tests for the gate sequence of `apply_selections()`.
//!
//! Uses `proptest` to cover every combination of flags and tool outcomes.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use droid_debconfdb::application::services::selections::apply_selections;
use droid_debconfdb::domain::{ApplyOutcome, ApplyRequest, SelectionsError, ToolConfig};

use crate::mocks::{RecordingReporter, RecordingTracker, ScriptedRunner, Step, preseed_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    WouldApply,
    Applied,
    ValidationFailed,
    ApplyFailed,
    CleanupFailed,
}

fn classify(result: &Result<ApplyOutcome, SelectionsError>) -> Class {
    match result {
        Ok(ApplyOutcome::WouldApply) => Class::WouldApply,
        Ok(ApplyOutcome::Applied { .. }) => Class::Applied,
        Err(SelectionsError::ValidationFailed { .. }) => Class::ValidationFailed,
        Err(SelectionsError::ApplyFailed { .. }) => Class::ApplyFailed,
        Err(SelectionsError::CleanupFailed { .. }) => Class::CleanupFailed,
        Err(SelectionsError::FileNotFound { .. }) => panic!("file exists in these tests"),
    }
}

/// Reference model: expected result class and number of processes run.
fn expected(
    dry_run: bool,
    cleanup: bool,
    valid: bool,
    applies: bool,
    deletes: bool,
) -> (Class, usize) {
    if !valid {
        return (Class::ValidationFailed, 1);
    }
    if dry_run {
        return (Class::WouldApply, 1);
    }
    if !applies {
        return (Class::ApplyFailed, 2);
    }
    if !cleanup {
        return (Class::Applied, 2);
    }
    if !deletes {
        return (Class::CleanupFailed, 3);
    }
    (Class::Applied, 3)
}

struct Observed {
    class: Class,
    calls: Vec<Vec<String>>,
    marks: u32,
    reports: u32,
    messages: usize,
}

fn observe(request: &ApplyRequest, outcomes: [bool; 3]) -> Observed {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let runner = ScriptedRunner::new(outcomes.map(Step::from_ok));
    let tracker = RecordingTracker::default();
    let reporter = RecordingReporter::default();
    let result = runtime.block_on(apply_selections(
        request,
        &ToolConfig::default(),
        &runner,
        &tracker,
        &reporter,
    ));
    Observed {
        class: classify(&result),
        calls: runner.calls(),
        marks: tracker.marks(),
        reports: tracker.reports(),
        messages: reporter.messages().len(),
    }
}

proptest! {
    /// Result class and process count follow the gate sequence exactly.
    #[test]
    fn prop_gate_sequence_matches_model(
        dry_run in any::<bool>(),
        cleanup in any::<bool>(),
        valid in any::<bool>(),
        applies in any::<bool>(),
        deletes in any::<bool>(),
    ) {
        let file = preseed_file();
        let request = ApplyRequest::new(file.path(), dry_run, cleanup);
        let observed = observe(&request, [valid, applies, deletes]);
        let (class, processes) = expected(dry_run, cleanup, valid, applies, deletes);

        prop_assert_eq!(observed.class, class);
        prop_assert_eq!(observed.calls.len(), processes);
        prop_assert_eq!(observed.calls[0][1].as_str(), "--checkonly");
        if processes >= 2 {
            prop_assert_eq!(observed.calls[1].len(), 2, "apply has no extra flags");
        }
        if processes == 3 {
            prop_assert_eq!(observed.calls[2][0].as_str(), "unlink");
        }
    }

    /// The change is marked exactly when validation passes; success alone reports.
    #[test]
    fn prop_change_tracking(
        dry_run in any::<bool>(),
        cleanup in any::<bool>(),
        valid in any::<bool>(),
        applies in any::<bool>(),
        deletes in any::<bool>(),
    ) {
        let file = preseed_file();
        let request = ApplyRequest::new(file.path(), dry_run, cleanup);
        let observed = observe(&request, [valid, applies, deletes]);
        let succeeded = matches!(observed.class, Class::WouldApply | Class::Applied);

        prop_assert_eq!(observed.marks, u32::from(valid));
        prop_assert_eq!(observed.reports, u32::from(succeeded));
        prop_assert_eq!(observed.messages, usize::from(succeeded));
    }

    /// Re-running a request with identical tool outcomes yields identical behaviour.
    #[test]
    fn prop_rerun_is_idempotent(
        dry_run in any::<bool>(),
        valid in any::<bool>(),
        applies in any::<bool>(),
    ) {
        let file = preseed_file();
        let request = ApplyRequest::new(file.path(), dry_run, false);
        let first = observe(&request, [valid, applies, true]);
        let second = observe(&request, [valid, applies, true]);

        prop_assert_eq!(first.class, second.class);
        prop_assert_eq!(first.calls, second.calls);
    }
}
