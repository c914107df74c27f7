//! Multi-run coverage aggregation.
//!
//! Each test category leaves one opaque coverage data file in the reports
//! directory. Aggregation reports every category's own percentage, merges
//! the data files into one combined artifact, renders a browsable HTML
//! report, and recomputes the combined percentage from the merged data.
//! Percentages are opaque formatted strings (for example `"87%"`); they are
//! never averaged, because the mean of per-category percentages is not the
//! percentage of the combined data.

use colored::Colorize;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::config::ProjectLayout;
use crate::errors::{GateError, Result};
use crate::process::{CaptureMode, CommandOutcome, ProcessRunner};
use crate::reports::{
    coverage_dat_name, ReportStore, COMBINED_COVERAGE_DAT, COVERAGE_HTML_DIR,
};

/// One test category's coverage data file. The percentage is computed
/// lazily, on first request, by running the coverage tool's report against
/// the isolated data file.
#[derive(Debug, Clone)]
pub struct CoverageArtifact {
    pub category: String,
    pub dat_path: PathBuf,
    percentage: Option<String>,
}

impl CoverageArtifact {
    pub fn new(category: impl Into<String>, dat_path: impl Into<PathBuf>) -> Self {
        Self {
            category: category.into(),
            dat_path: dat_path.into(),
            percentage: None,
        }
    }

    /// The category's percentage, computing it with `compute` on first use.
    pub fn percentage_with(
        &mut self,
        compute: impl FnOnce(&Path) -> Result<String>,
    ) -> Result<&str> {
        if self.percentage.is_none() {
            self.percentage = Some(compute(&self.dat_path)?);
        }
        Ok(self.percentage.as_deref().unwrap_or_default())
    }
}

/// The merged coverage artifact plus its rendered browsable form.
#[derive(Debug, Clone)]
pub struct CombinedCoverageReport {
    pub dat_path: PathBuf,
    pub html_dir: PathBuf,
    pub percentage: String,
}

impl CombinedCoverageReport {
    pub fn index_html(&self) -> PathBuf {
        self.html_dir.join("index.html")
    }
}

/// Extract the `TOTAL … NN%` figure from the coverage tool's tabular
/// output. Absence of the pattern is a hard error; a malformed report must
/// never be silently defaulted.
pub fn extract_total(output: &str) -> Result<String> {
    let pattern = Regex::new(r"TOTAL.*?([\d.]+%)").unwrap();
    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| GateError::Parse {
            output: output.to_string(),
        })
}

/// Merges per-category coverage artifacts into one combined report.
pub struct CoverageAggregator<'a> {
    layout: &'a ProjectLayout,
    runner: ProcessRunner,
    store: ReportStore,
}

impl<'a> CoverageAggregator<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self {
            layout,
            runner: ProcessRunner::new(&layout.root_directory),
            store: ReportStore::new(&layout.reports_directory),
        }
    }

    /// Combine all present per-category artifacts and render the report.
    ///
    /// Missing categories warn and are skipped; zero present artifacts is
    /// fatal because the combine step strictly requires inputs.
    pub fn aggregate(&self) -> Result<CombinedCoverageReport> {
        self.store.ensure()?;

        let mut copies: Vec<PathBuf> = Vec::new();
        for category in &self.layout.test_categories {
            let dat_name = coverage_dat_name(category);
            if !self.store.exists(&dat_name) {
                println!(
                    "{}",
                    format!(
                        "Could not find coverage dat file for {category} tests: {}",
                        self.store.path(&dat_name).display()
                    )
                    .yellow()
                );
                continue;
            }

            let mut artifact = CoverageArtifact::new(category, self.store.path(&dat_name));
            let percentage = artifact.percentage_with(|dat| self.report_total(dat))?;
            println!("{} test coverage: {percentage}", title_case(category));

            // `combine` erases its inputs, so feed it copies
            let copy = self
                .store
                .duplicate(&dat_name, &format!("coverage-{category}-copy.dat"))?;
            copies.push(copy);
        }

        if copies.is_empty() {
            return Err(GateError::ReportMissing {
                path: self.store.path("coverage-*.dat"),
            });
        }

        let combined_dat = self.store.path(COMBINED_COVERAGE_DAT);
        let html_dir = self.store.path(COVERAGE_HTML_DIR);
        let env = coverage_env(&combined_dat);

        let copy_args = copies
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.run_tool(&format!("{} combine {copy_args}", self.tool()), &env)?;
        self.run_tool(
            &format!("{} html -d {}", self.tool(), html_dir.display()),
            &env,
        )?;

        let percentage = self.report_total(&combined_dat)?;
        println!("Total coverage: {percentage}\n");

        Ok(CombinedCoverageReport {
            dat_path: combined_dat,
            html_dir,
            percentage,
        })
    }

    /// Percentage recorded in one data file, via `coverage report`.
    fn report_total(&self, dat: &Path) -> Result<String> {
        let outcome = self.run_tool(&format!("{} report", self.tool()), &coverage_env(dat))?;
        extract_total(&outcome.captured)
    }

    fn run_tool(&self, command: &str, env: &[(String, String)]) -> Result<CommandOutcome> {
        let outcome = self.runner.run(command, env, CaptureMode::Capture)?;
        if !outcome.success() {
            // surface the tool's own complaint before failing
            eprint!("{}", outcome.captured);
            return Err(GateError::CheckFailed {
                check: command.to_string(),
                exit_code: outcome.exit_code,
            });
        }
        Ok(outcome)
    }

    fn tool(&self) -> &str {
        &self.layout.tools.coverage
    }
}

/// The data file location is communicated via an environment override
/// scoped to each invocation, never globally mutated.
fn coverage_env(dat: &Path) -> Vec<(String, String)> {
    vec![("COVERAGE_FILE".to_string(), dat.display().to_string())]
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
