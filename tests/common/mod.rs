//! Shared test infrastructure for integration tests.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch working directory with a `resources/` layout.
pub struct ResourceFixture {
    pub dir: TempDir,
}

/// Captured result of one `check-resources` run.
#[derive(Debug)]
pub struct RunResult {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ResourceFixture {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `resources/preferences.gresource.xml`.
    pub fn write_manifest(&self, contents: &str) {
        self.write("resources/preferences.gresource.xml", contents);
    }

    /// Write a file relative to the working directory, creating parents.
    pub fn write(&self, rel: &str, contents: &str) {
        self.write_bytes(rel, contents.as_bytes());
    }

    /// Write raw bytes, for manifests in encodings other than UTF-8.
    pub fn write_bytes(&self, rel: &str, contents: &[u8]) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directory");
        }
        std::fs::write(&path, contents).expect("write file");
    }

    /// Run the checker from the fixture root with extra arguments.
    pub fn run(&self, args: &[&str]) -> RunResult {
        let bin = env!("CARGO_BIN_EXE_check-resources");
        let output = Command::new(bin)
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .output()
            .expect("run check-resources");
        RunResult::from(output)
    }
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
