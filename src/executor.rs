//! Failure-isolating check execution.
//!
//! Every external-tool invocation goes through [`run_check`], which
//! guarantees that a failing check surfaces its captured diagnostics before
//! the failure propagates, regardless of caller. Success prints a short
//! acknowledgment; failure dumps the persisted report verbatim and then
//! raises a typed [`GateError::CheckFailed`].

use colored::Colorize;

use crate::errors::{GateError, Result};
use crate::pipeline::Check;
use crate::process::{CaptureMode, CommandOutcome, ProcessRunner};
use crate::reports::ReportStore;

/// Run one check and isolate its failure.
///
/// In capture mode the combined output is always persisted to the check's
/// report file first, so the on-disk report reflects the run whether it
/// passed or failed.
pub fn run_check(runner: &ProcessRunner, store: &ReportStore, check: &Check) -> Result<CommandOutcome> {
    store.ensure()?;

    let outcome = runner.run(&check.command, &check.env, check.mode)?;

    if check.mode == CaptureMode::Capture {
        if let Some(report) = &check.report {
            store.write(report, &outcome.captured)?;
        }
    }

    if outcome.success() {
        println!("{}", "✔ No issues found.".green());
        return Ok(outcome);
    }

    dump_report(store, check);

    Err(GateError::CheckFailed {
        check: check.name.clone(),
        exit_code: outcome.exit_code,
    })
}

/// Print the check's report verbatim so a human sees the diagnostic detail
/// even though the pipeline is about to fail. A missing report only skips
/// the dump; the failure still propagates.
fn dump_report(store: &ReportStore, check: &Check) {
    let Some(report) = &check.report else {
        return;
    };
    match store.read(report) {
        Ok(contents) => print!("{contents}"),
        Err(GateError::ReportMissing { path }) => {
            log::debug!("no report to dump for `{}` at {}", check.name, path.display());
        }
        Err(err) => {
            log::warn!("could not dump report for `{}`: {err}", check.name);
        }
    }
}
