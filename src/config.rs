//! Project layout configuration.
//!
//! The layout is read once from `qualgate.toml`, resolved into absolute
//! paths, and passed by reference to every command. It is never mutated
//! after construction and there is no global instance.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::GateError;

pub const CONFIG_FILE_NAME: &str = "qualgate.toml";

/// External tool command names. Overridable via the `[tools]` table so the
/// orchestrator can be pointed at wrappers or stubs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolCommands {
    /// PEP8-style code style linter
    pub style: String,
    /// PEP257-style docstring linter
    pub docstring: String,
    /// Configurable general-purpose linter (rcfile-driven)
    pub linter: String,
    /// Test runner with coverage instrumentation
    pub test_runner: String,
    /// Coverage combination/reporting tool
    pub coverage: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            style: "pycodestyle".to_string(),
            docstring: "pydocstyle".to_string(),
            linter: "pylint".to_string(),
            test_runner: "pytest".to_string(),
            coverage: "coverage".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectSection {
    source_directory: PathBuf,
    #[serde(default)]
    tests_directory: Option<PathBuf>,
    #[serde(default = "default_reports_directory")]
    reports_directory: PathBuf,
    #[serde(default = "default_test_categories")]
    test_categories: Vec<String>,
}

fn default_reports_directory() -> PathBuf {
    PathBuf::from("reports")
}

fn default_test_categories() -> Vec<String> {
    vec!["unit".to_string(), "integration".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    project: ProjectSection,
    #[serde(default)]
    tools: ToolCommands,
}

/// Immutable per-run project layout. All paths are absolute, resolved
/// against the directory holding `qualgate.toml`.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root_directory: PathBuf,
    pub source_directory: PathBuf,
    pub tests_directory: Option<PathBuf>,
    pub reports_directory: PathBuf,
    /// Ordered set of test category names, e.g. "unit", "integration".
    pub test_categories: Vec<String>,
    pub tools: ToolCommands,
}

impl ProjectLayout {
    /// Locate `qualgate.toml` by walking up from `start` and load it.
    pub fn discover(start: &Path) -> Result<Self, GateError> {
        let mut current = Some(start);
        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
            current = dir.parent();
        }
        Err(GateError::Config(format!(
            "no {} found in {} or any parent directory",
            CONFIG_FILE_NAME,
            start.display()
        )))
    }

    /// Load the layout from a specific config file path.
    pub fn from_file(path: &Path) -> Result<Self, GateError> {
        let contents = fs::read_to_string(path).map_err(|e| GateError::io(path, e))?;
        let root = path
            .parent()
            .ok_or_else(|| GateError::Config(format!("{} has no parent directory", path.display())))?;
        Self::parse(&contents, root)
    }

    /// Parse config contents, resolving relative paths against `root`.
    pub fn parse(contents: &str, root: &Path) -> Result<Self, GateError> {
        let config: ConfigFile = toml::from_str(contents)
            .map_err(|e| GateError::Config(format!("failed to parse {CONFIG_FILE_NAME}: {e}")))?;

        log::debug!("loaded project layout from {}", root.display());

        let resolve = |p: &Path| -> PathBuf {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root.join(p)
            }
        };

        Ok(Self {
            root_directory: root.to_path_buf(),
            source_directory: resolve(&config.project.source_directory),
            tests_directory: config.project.tests_directory.as_deref().map(|p| resolve(p)),
            reports_directory: resolve(&config.project.reports_directory),
            test_categories: config.project.test_categories,
            tools: config.tools,
        })
    }

    /// Whether `category` is declared and a tests directory is configured.
    /// Undeclared categories are skipped silently, not failed.
    pub fn has_test_category(&self, category: &str) -> bool {
        self.tests_directory.is_some() && self.test_categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = indoc! {r#"
        [project]
        source_directory = "src"
    "#};

    #[test]
    fn minimal_config_gets_defaults() {
        let layout = ProjectLayout::parse(MINIMAL, Path::new("/proj")).unwrap();
        assert_eq!(layout.root_directory, PathBuf::from("/proj"));
        assert_eq!(layout.source_directory, PathBuf::from("/proj/src"));
        assert_eq!(layout.reports_directory, PathBuf::from("/proj/reports"));
        assert_eq!(layout.tests_directory, None);
        assert_eq!(layout.test_categories, vec!["unit", "integration"]);
        assert_eq!(layout.tools.linter, "pylint");
    }

    #[test]
    fn full_config_overrides_tools_and_categories() {
        let contents = indoc! {r#"
            [project]
            source_directory = "lib"
            tests_directory = "tests"
            reports_directory = "build/reports"
            test_categories = ["unit"]

            [tools]
            coverage = "./bin/fake-coverage"
        "#};
        let layout = ProjectLayout::parse(contents, Path::new("/proj")).unwrap();
        assert_eq!(layout.tests_directory, Some(PathBuf::from("/proj/tests")));
        assert_eq!(
            layout.reports_directory,
            PathBuf::from("/proj/build/reports")
        );
        assert_eq!(layout.test_categories, vec!["unit"]);
        assert_eq!(layout.tools.coverage, "./bin/fake-coverage");
        // unset tools keep their defaults
        assert_eq!(layout.tools.test_runner, "pytest");
    }

    #[test]
    fn absolute_paths_are_kept_as_is() {
        let contents = indoc! {r#"
            [project]
            source_directory = "/abs/src"
        "#};
        let layout = ProjectLayout::parse(contents, Path::new("/proj")).unwrap();
        assert_eq!(layout.source_directory, PathBuf::from("/abs/src"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let contents = indoc! {r#"
            [project]
            source_directory = "src"
            sorce_directory = "typo"
        "#};
        let err = ProjectLayout::parse(contents, Path::new("/proj")).unwrap_err();
        assert!(matches!(err, GateError::Config(_)));
    }

    #[test]
    fn undeclared_category_is_not_runnable() {
        let contents = indoc! {r#"
            [project]
            source_directory = "src"
            tests_directory = "tests"
            test_categories = ["unit"]
        "#};
        let layout = ProjectLayout::parse(contents, Path::new("/proj")).unwrap();
        assert!(layout.has_test_category("unit"));
        assert!(!layout.has_test_category("integration"));
    }

    #[test]
    fn no_tests_directory_means_no_runnable_categories() {
        let layout = ProjectLayout::parse(MINIMAL, Path::new("/proj")).unwrap();
        assert!(!layout.has_test_category("unit"));
    }
}
