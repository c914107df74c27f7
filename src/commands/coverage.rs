//! Combined coverage reporting and browsing.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::ProjectLayout;
use crate::coverage::CoverageAggregator;
use crate::errors::GateError;
use crate::formatting::print_header;
use crate::reports::COVERAGE_HTML_DIR;

/// Analyse coverage and generate a combined term/HTML report across all
/// test categories.
pub fn coverage_report(layout: &ProjectLayout) -> Result<()> {
    print_header("Generating coverage report", 2);

    ensure_coverage_tool(layout)?;

    let report = CoverageAggregator::new(layout).aggregate()?;

    println!(
        "Refer to coverage report for full analysis in '{}'\n\
         Or open the report in your default browser with:\n  qualgate coverage:open",
        report.index_html().display()
    );
    Ok(())
}

/// Open the combined coverage report in the default browser. Exits
/// non-zero with guidance when no report has been built yet; the browser
/// is never launched in that case.
pub fn coverage_open(layout: &ProjectLayout) -> Result<()> {
    let index = layout
        .reports_directory
        .join(COVERAGE_HTML_DIR)
        .join("index.html");

    if !index.exists() {
        eprintln!(
            "{}",
            format!(
                "Could not find coverage report '{}'. Ensure that the report has been built.\n\
                 Try one of the following:\n  qualgate test:coverage-report\nor\n  qualgate test:all",
                index.display()
            )
            .red()
        );
        return Err(GateError::ReportMissing { path: index }.into());
    }

    open::that(&index).with_context(|| format!("failed to open '{}'", index.display()))?;
    Ok(())
}

/// Fail early with a clear message when the coverage tool is not on PATH.
/// Tool overrides that point at a concrete path are checked by the shell
/// at invocation time instead.
fn ensure_coverage_tool(layout: &ProjectLayout) -> Result<()> {
    let tool = &layout.tools.coverage;
    if tool.contains('/') || tool.contains(char::is_whitespace) {
        return Ok(());
    }
    which::which(tool)
        .map_err(|_| GateError::Config(format!("coverage tool `{tool}` not found in PATH")))?;
    Ok(())
}
