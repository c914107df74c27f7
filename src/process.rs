//! Child-process execution for external tools.
//!
//! Every check is one blocking invocation through `sh -c`, so invocation
//! templates may use shell syntax the same way a developer would at a
//! prompt. The runner never inspects why a command failed; a non-zero exit
//! becomes a distinguishable outcome for the caller to handle.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::errors::{GateError, Result};

/// How the child's stdout/stderr are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Capture combined stdout and stderr into the outcome.
    Capture,
    /// Surrender the terminal to the child (interactive runs: progress
    /// bars, debuggers). Nothing is captured.
    Inherit,
}

/// Result of one external command run.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub exit_code: i32,
    /// Combined stdout + stderr; empty under `CaptureMode::Inherit`.
    pub captured: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external commands from a fixed working directory.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    cwd: PathBuf,
}

impl ProcessRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Execute `command` with an environment overlay scoped to this one
    /// invocation. The parent environment is inherited, never mutated.
    pub fn run(
        &self,
        command: &str,
        env: &[(String, String)],
        mode: CaptureMode,
    ) -> Result<CommandOutcome> {
        log::debug!("running `{command}` in {}", self.cwd.display());

        let mut child = Command::new("sh");
        child.arg("-c").arg(command).current_dir(&self.cwd);
        for (key, value) in env {
            child.env(key, value);
        }

        match mode {
            CaptureMode::Capture => {
                let output = child
                    .stdin(Stdio::null())
                    .output()
                    .map_err(|e| spawn_error(command, e))?;

                let mut captured = String::from_utf8_lossy(&output.stdout).into_owned();
                captured.push_str(&String::from_utf8_lossy(&output.stderr));

                Ok(CommandOutcome {
                    exit_code: exit_code_of(output.status),
                    captured,
                })
            }
            CaptureMode::Inherit => {
                let status = child.status().map_err(|e| spawn_error(command, e))?;
                Ok(CommandOutcome {
                    exit_code: exit_code_of(status),
                    captured: String::new(),
                })
            }
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

fn spawn_error(command: &str, source: std::io::Error) -> GateError {
    GateError::Spawn {
        command: command.to_string(),
        source,
    }
}

fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    // Killed-by-signal has no code; report it as a plain failure.
    status.code().unwrap_or(-1)
}
