use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use qualgate::cli::{Cli, Commands};
use qualgate::commands;
use qualgate::config::ProjectLayout;
use qualgate::pipeline::PipelineOutcome;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let layout = ProjectLayout::discover(&cwd)?;

    match cli.command {
        Commands::Lint => finish(commands::lint::lint(&layout)),
        Commands::LintStyle => commands::lint::lint_style(&layout),
        Commands::LintDocstring => commands::lint::lint_docstring(&layout),
        Commands::LintStatic => commands::lint::lint_static(&layout),
        Commands::TestUnit { maxfail, debug } => {
            commands::test::test_unit(&layout, maxfail, debug)
        }
        Commands::TestIntegration { maxfail, debug } => {
            commands::test::test_integration(&layout, maxfail, debug)
        }
        Commands::CoverageReport => commands::coverage::coverage_report(&layout),
        Commands::TestAll { maxfail, debug } => {
            finish(commands::test::test_all(&layout, maxfail, debug))
        }
        Commands::CoverageOpen => commands::coverage::coverage_open(&layout),
    }
}

/// Map a pipeline outcome to the process result: non-zero exit iff some
/// constituent check failed, but only after all were attempted.
fn finish(outcome: PipelineOutcome) -> Result<()> {
    match outcome {
        PipelineOutcome::AllPassed => Ok(()),
        PipelineOutcome::SomeFailed(names) => {
            bail!("{} check(s) failed: {}", names.len(), names.join(", "))
        }
    }
}
