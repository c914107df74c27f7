//! Persisted report storage.
//!
//! Every check writes its raw output under the project's reports directory
//! with a deterministic name, so repeated runs overwrite rather than
//! accumulate. Directory creation is idempotent and safe against creation
//! races (two pipelines bootstrapping the same directory at once).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{GateError, Result};

/// Canonical report file names.
pub const STYLE_REPORT: &str = "style-report.log";
pub const DOCSTRING_REPORT: &str = "docstring-report.log";
pub const LINT_REPORT: &str = "lint-report.log";
pub const LINT_TESTS_REPORT: &str = "lint-tests-report.log";
pub const COMBINED_COVERAGE_DAT: &str = "coverage.dat";
pub const COVERAGE_HTML_DIR: &str = "coverage-report";

pub fn coverage_dat_name(category: &str) -> String {
    format!("coverage-{category}.dat")
}

pub fn coverage_xml_name(category: &str) -> String {
    format!("coverage-{category}.xml")
}

/// Handle on the reports directory of one project.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the reports directory (and parents) if absent. Idempotent;
    /// a lost creation race is not an error.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| GateError::io(&self.dir, e))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of a report file, without touching the filesystem.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        self.ensure()?;
        let path = self.path(name);
        fs::write(&path, contents).map_err(|e| GateError::io(path, e))
    }

    /// Read a report, failing with `ReportMissing` when it does not exist.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GateError::ReportMissing { path }
            } else {
                GateError::io(path, e)
            }
        })
    }

    /// Duplicate a report under a new name in the same directory, returning
    /// the copy's path. Used before destructive consumers such as the
    /// coverage combine step.
    pub fn duplicate(&self, name: &str, copy_name: &str) -> Result<PathBuf> {
        let src = self.path(name);
        let dst = self.path(copy_name);
        fs::copy(&src, &dst).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GateError::ReportMissing { path: src.clone() }
            } else {
                GateError::io(src.clone(), e)
            }
        })?;
        Ok(dst)
    }
}
