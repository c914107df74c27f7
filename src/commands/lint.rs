//! Linting checks on source code.
//!
//! Three independent checks: code style (PEP8-style), docstring style
//! (PEP257-style) and the rcfile-driven static-analysis linter, the last
//! run twice: sources tree, then tests tree, each against its own rule
//! configuration.

use anyhow::Result;
use std::path::Path;

use crate::config::ProjectLayout;
use crate::executor::run_check;
use crate::formatting::{format_messages, print_header};
use crate::pipeline::{Check, Pipeline, PipelineOutcome};
use crate::process::ProcessRunner;
use crate::reports::{ReportStore, DOCSTRING_REPORT, LINT_REPORT, LINT_TESTS_REPORT, STYLE_REPORT};

// Ignores baked into the style invocation:
// - E501: line length is checked by the static-analysis linter
// - W503: line break before binary operator is now permitted style
// - E231/E203/E402: handled or contradicted by the code formatter
const STYLE_IGNORES: &str = "E501,W503,E231,E203,E402";

/// Run the whole lint pipeline: all three checks run regardless of earlier
/// failures so that one invocation gives complete feedback.
pub fn lint(layout: &ProjectLayout) -> PipelineOutcome {
    print_header("Linting", 1);

    let mut pipeline = Pipeline::new();
    pipeline.step("code style", || lint_style(layout));
    pipeline.step("documentation style", || lint_docstring(layout));
    pipeline.step("static analysis", || lint_static(layout));
    pipeline.outcome()
}

/// PEP8-style checking over the sources and tests trees.
pub fn lint_style(layout: &ProjectLayout) -> Result<()> {
    print_header("code style (PEP8)", 2);

    let mut dirs = layout.source_directory.display().to_string();
    if let Some(tests) = &layout.tests_directory {
        dirs.push(' ');
        dirs.push_str(&tests.display().to_string());
    }

    let check = Check::captured(
        "code style",
        format!("{} --ignore={STYLE_IGNORES} {dirs}", layout.tools.style),
        STYLE_REPORT,
    );
    run_formatted(layout, check)
}

/// Docstring linting over the sources tree. The static-analysis linter
/// carries out additional documentation style checks of its own.
pub fn lint_docstring(layout: &ProjectLayout) -> Result<()> {
    print_header("documentation style", 2);

    let check = Check::captured(
        "documentation style",
        format!(
            "{} {}",
            layout.tools.docstring,
            layout.source_directory.display()
        ),
        DOCSTRING_REPORT,
    );
    run_formatted(layout, check)
}

/// Static analysis: sources tree against the project rcfile, then the
/// tests tree against its own rcfile. Both sub-runs are attempted even
/// when the first fails.
pub fn lint_static(layout: &ProjectLayout) -> Result<()> {
    print_header("static analysis", 2);

    let sources = run_linter(
        layout,
        &layout.source_directory,
        LINT_REPORT,
        &layout.root_directory.join(".pylintrc"),
    );

    let tests = match &layout.tests_directory {
        Some(tests_dir) => run_linter(
            layout,
            tests_dir,
            LINT_TESTS_REPORT,
            &tests_dir.join(".pylintrc"),
        ),
        None => Ok(()),
    };

    sources.and(tests)
}

fn run_linter(layout: &ProjectLayout, tree: &Path, report: &str, rcfile: &Path) -> Result<()> {
    print_header(&tree.display().to_string(), 3);

    let check = Check::captured(
        "static analysis",
        format!(
            "{} --rcfile {} {}",
            layout.tools.linter,
            rcfile.display(),
            tree.display()
        ),
        report,
    );

    let runner = ProcessRunner::new(&layout.root_directory);
    let store = ReportStore::new(&layout.reports_directory);
    run_check(&runner, &store, &check)?;
    Ok(())
}

/// Run a captured check and present its message list as per-file blocks.
/// The formatted view is produced from the persisted report, so it renders
/// the same whether the tool passed or failed.
fn run_formatted(layout: &ProjectLayout, check: Check) -> Result<()> {
    let runner = ProcessRunner::new(&layout.root_directory);
    let store = ReportStore::new(&layout.reports_directory);

    let result = run_check(&runner, &store, &check);

    if let Some(report) = &check.report {
        if let Ok(contents) = store.read(report) {
            format_messages(&contents);
        }
    }

    result?;
    Ok(())
}
