//! Shared error types for quality-gate runs.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qualgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// An external tool exited non-zero. Raised only after its captured
    /// diagnostics have been dumped to the console.
    #[error("check `{check}` failed with exit code {exit_code}")]
    CheckFailed { check: String, exit_code: i32 },

    /// An expected report file was absent when a read was attempted.
    #[error("report not found: {}", .path.display())]
    ReportMissing { path: PathBuf },

    /// Tool output did not contain the expected pattern. Always fatal;
    /// a malformed report is worse than a missing one.
    #[error("no TOTAL percentage found in coverage output:\n{output}")]
    Parse { output: String },

    /// The child process could not be started at all.
    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors (missing or invalid qualgate.toml).
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped filesystem errors
    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error is an external check failing, as opposed to the
    /// orchestrator itself misbehaving.
    pub fn is_check_failure(&self) -> bool {
        matches!(self, Self::CheckFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_failed_display_names_check_and_code() {
        let err = GateError::CheckFailed {
            check: "pylint".to_string(),
            exit_code: 2,
        };
        assert_eq!(err.to_string(), "check `pylint` failed with exit code 2");
        assert!(err.is_check_failure());
    }

    #[test]
    fn report_missing_display_includes_path() {
        let err = GateError::ReportMissing {
            path: PathBuf::from("/tmp/reports/style-report.log"),
        };
        assert!(err.to_string().contains("style-report.log"));
        assert!(!err.is_check_failure());
    }

    #[test]
    fn parse_error_carries_offending_output() {
        let err = GateError::Parse {
            output: "Name   Stmts   Miss".to_string(),
        };
        assert!(err.to_string().contains("Name   Stmts   Miss"));
    }
}
