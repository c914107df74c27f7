//! Check definitions and pipeline sequencing.
//!
//! A pipeline is a fixed ordered list of named steps. Every step runs even
//! when an earlier one failed (feedback should be as complete as possible
//! per invocation); failures are collected and reported at the end, and the
//! owning command maps `SomeFailed` to a non-zero process exit.

use colored::Colorize;

use crate::process::CaptureMode;

/// One named external-tool invocation plus its report artifact.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    /// Shell invocation template, fully rendered.
    pub command: String,
    /// Report file name under the reports directory. `None` for
    /// interactive runs whose output goes straight to the terminal.
    pub report: Option<String>,
    /// Environment overlay scoped to this invocation.
    pub env: Vec<(String, String)>,
    pub mode: CaptureMode,
}

impl Check {
    /// A captured check that persists its combined output as `report`.
    pub fn captured(name: &str, command: String, report: &str) -> Self {
        Self {
            name: name.to_string(),
            command,
            report: Some(report.to_string()),
            env: Vec::new(),
            mode: CaptureMode::Capture,
        }
    }

    /// An interactive check that streams to the terminal and keeps no log.
    pub fn interactive(name: &str, command: String) -> Self {
        Self {
            name: name.to_string(),
            command,
            report: None,
            env: Vec::new(),
            mode: CaptureMode::Inherit,
        }
    }

    pub fn with_env(mut self, key: &str, value: String) -> Self {
        self.env.push((key.to_string(), value));
        self
    }
}

/// Terminal state of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    AllPassed,
    SomeFailed(Vec<String>),
}

impl PipelineOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::SomeFailed(_))
    }
}

/// Linear run-all-then-report sequencer.
#[derive(Debug, Default)]
pub struct Pipeline {
    failures: Vec<String>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one step. On failure the step's own diagnostics have already
    /// been dumped by the failure-isolating executor; record the name and
    /// keep going so later steps still run.
    pub fn step(&mut self, name: &str, run: impl FnOnce() -> anyhow::Result<()>) {
        match run() {
            Ok(()) => {}
            Err(err) => {
                eprintln!("{} {name}: {err:#}", "✘".red().bold());
                self.failures.push(name.to_string());
            }
        }
    }

    pub fn outcome(self) -> PipelineOutcome {
        if self.failures.is_empty() {
            PipelineOutcome::AllPassed
        } else {
            PipelineOutcome::SomeFailed(self.failures)
        }
    }
}
