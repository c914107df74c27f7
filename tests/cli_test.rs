//! CLI surface behavior: exit codes, guidance messages, config discovery.

mod common;

use common::TestProject;
use std::fs;

#[test]
fn coverage_open_without_report_exits_non_zero_with_guidance() {
    let project = TestProject::new("");

    let assert = project.qualgate().arg("coverage:open").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert!(stderr.contains("Could not find coverage report"));
    assert!(stderr.contains("test:coverage-report"));
    assert!(stderr.contains("test:all"));
}

#[test]
fn missing_config_is_a_clear_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("qualgate").unwrap();

    let assert = cmd.current_dir(dir.path()).arg("lint").assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("qualgate.toml"));
}

#[test]
fn config_is_discovered_from_a_subdirectory() {
    let project = TestProject::new(
        "style = \"true\"\n\
         docstring = \"true\"\n\
         linter = \"true\"",
    );
    let nested = project.root().join("src/deeply/nested");
    fs::create_dir_all(&nested).unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("qualgate").unwrap();
    cmd.current_dir(&nested).arg("lint:style").assert().success();
}

#[test]
fn undeclared_test_category_exits_zero_without_running_anything() {
    // only "unit" is declared; the runner would fail loudly if invoked
    let project = TestProject::new("");
    let config = "[project]\n\
                  source_directory = \"src\"\n\
                  tests_directory = \"tests\"\n\
                  test_categories = [\"unit\"]\n\
                  \n\
                  [tools]\n\
                  test_runner = \"false\"\n";
    fs::write(project.root().join("qualgate.toml"), config).unwrap();

    project.qualgate().arg("test:integration").assert().success();
}

#[test]
fn declared_test_category_failure_exits_non_zero() {
    let project = TestProject::new("test_runner = \"false\"");

    project.qualgate().arg("test:unit").assert().failure();
}

#[test]
fn help_lists_every_command() {
    let project = TestProject::new("");
    let assert = project.qualgate().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    for command in [
        "lint",
        "lint:style",
        "lint:docstring",
        "lint:static",
        "test:unit",
        "test:integration",
        "test:coverage-report",
        "test:all",
        "coverage:open",
    ] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}
