//! qualgate: developer-facing quality-gate orchestrator.
//!
//! Sequences invocations of external static-analysis and test tools over a
//! configured project tree, captures their output into persisted reports,
//! aggregates multi-run coverage data into one combined report, and
//! surfaces failures uniformly.
//!
//! The crate is organized leaves-first:
//! - [`process`]: runs one external command and captures its output
//! - [`reports`]: the reports directory and its deterministic file names
//! - [`executor`]: the failure-isolating wrapper around every invocation
//! - [`pipeline`]: named checks and run-all-then-report sequencing
//! - [`coverage`]: per-category artifacts merged into a combined report
//! - [`formatting`]: per-file presentation of line-oriented tool output
//! - [`commands`]: the CLI command families built from the above

pub mod cli;
pub mod commands;
pub mod config;
pub mod coverage;
pub mod errors;
pub mod executor;
pub mod formatting;
pub mod pipeline;
pub mod process;
pub mod reports;

pub use config::ProjectLayout;
pub use errors::GateError;
pub use pipeline::PipelineOutcome;
