//! CLI command implementations.
//!
//! Each submodule implements one command family over an immutable
//! [`crate::config::ProjectLayout`]:
//! - **lint**: style, docstring and static-analysis checks
//! - **test**: per-category test runs and the `test:all` pipeline
//! - **coverage**: combined coverage reporting and `coverage:open`

pub mod coverage;
pub mod lint;
