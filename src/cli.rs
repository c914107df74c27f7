use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qualgate")]
#[command(about = "Quality-gate orchestrator for linting, testing and coverage", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run linting on the entire code base (style, docstring, static analysis)
    #[command(name = "lint")]
    Lint,

    /// Run PEP8-style code style checking
    #[command(name = "lint:style")]
    LintStyle,

    /// Run docstring linting
    #[command(name = "lint:docstring")]
    LintDocstring,

    /// Run the configurable static-analysis linter on sources and tests
    #[command(name = "lint:static")]
    LintStatic,

    /// Run unit tests
    #[command(name = "test:unit")]
    TestUnit {
        /// Stop the test run after this many failures (0 = no limit)
        #[arg(long, default_value_t = 0)]
        maxfail: u32,

        /// Disable output capture, allowing debuggers to be used
        #[arg(long)]
        debug: bool,
    },

    /// Run integration tests
    #[command(name = "test:integration")]
    TestIntegration {
        /// Stop the test run after this many failures (0 = no limit)
        #[arg(long, default_value_t = 0)]
        maxfail: u32,

        /// Disable output capture, allowing debuggers to be used
        #[arg(long)]
        debug: bool,
    },

    /// Analyse coverage and generate a combined term/HTML report
    #[command(name = "test:coverage-report")]
    CoverageReport,

    /// Run all tests, then generate the coverage report
    #[command(name = "test:all")]
    TestAll {
        /// Stop each test run after this many failures (0 = no limit)
        #[arg(long, default_value_t = 0)]
        maxfail: u32,

        /// Disable output capture, allowing debuggers to be used
        #[arg(long)]
        debug: bool,
    },

    /// Open the combined coverage report in the default browser
    #[command(name = "coverage:open")]
    CoverageOpen,
}
