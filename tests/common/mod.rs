//! Shared fixture: a temporary project with stub external tools.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// A project tree with `src/`, per-category test directories and a
    /// `qualgate.toml` naming the given tool overrides.
    pub fn new(tools: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("tests/unit")).unwrap();
        fs::create_dir_all(dir.path().join("tests/integration")).unwrap();

        let config = format!(
            "[project]\n\
             source_directory = \"src\"\n\
             tests_directory = \"tests\"\n\
             \n\
             [tools]\n\
             {tools}\n"
        );
        fs::write(dir.path().join("qualgate.toml"), config).unwrap();

        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn reports(&self) -> PathBuf {
        self.root().join("reports")
    }

    /// Write an executable stub script and return its absolute path.
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        path
    }

    /// The qualgate binary, running from the project root.
    pub fn qualgate(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("qualgate").unwrap();
        cmd.current_dir(self.root());
        cmd
    }
}

/// A fake coverage tool with additive merge semantics. Data files are
/// shell fragments (`hits=<n>`, `total=<n>`); `combine` sums them and
/// deletes its inputs, `report` prints a `TOTAL … NN%` table row, `html`
/// renders an index page.
pub const FAKE_COVERAGE: &str = r#"
cmd="$1"; shift
case "$cmd" in
    report)
        hits=0; total=0
        . "$COVERAGE_FILE"
        pct=$((100 * hits / total))
        echo "Name  Stmts  Miss  Cover"
        echo "TOTAL  $total  $((total - hits))  ${pct}%"
        ;;
    combine)
        h=0; t=0
        for f in "$@"; do
            hits=0; total=0
            . "$f"
            h=$((h + hits)); t=$((t + total))
            rm -f "$f"
        done
        printf 'hits=%s\ntotal=%s\n' "$h" "$t" > "$COVERAGE_FILE"
        ;;
    html)
        mkdir -p "$2"
        echo '<html></html>' > "$2/index.html"
        ;;
esac
"#;

/// Write a fake coverage data file for one category.
pub fn write_dat(project: &TestProject, category: &str, hits: u32, total: u32) {
    let reports = project.reports();
    fs::create_dir_all(&reports).unwrap();
    fs::write(
        reports.join(format!("coverage-{category}.dat")),
        format!("hits={hits}\ntotal={total}\n"),
    )
    .unwrap();
}
