//! Shared testing utilities for lake-describe CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated package directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty package directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("package");
        fs::create_dir_all(&work_dir).expect("Failed to create test package directory");

        Self { root, work_dir }
    }

    /// Path to the package directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the emulated `GITHUB_OUTPUT` file.
    pub fn github_output_path(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Write `lakefile.toml` into the package directory.
    pub fn write_lakefile(&self, content: &str) {
        fs::write(self.work_dir.join("lakefile.toml"), content)
            .expect("Failed to write lakefile.toml");
    }

    /// Build a command for invoking the compiled binary within the package directory.
    ///
    /// Runner variables inherited from the host are cleared so tests see a
    /// local environment.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("lake-describe").expect("Failed to locate lake-describe binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("GITHUB_OUTPUT")
            .env_remove("INPUT_LAKE_PACKAGE_DIRECTORY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Build a command that writes outputs to the emulated `GITHUB_OUTPUT` file.
    pub fn cli_with_github_output(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GITHUB_OUTPUT", self.github_output_path());
        cmd
    }

    /// Contents of the emulated `GITHUB_OUTPUT` file (empty if never written).
    pub fn read_github_output(&self) -> String {
        fs::read_to_string(self.github_output_path()).unwrap_or_default()
    }

    /// Remove the emulated `GITHUB_OUTPUT` file.
    pub fn reset_github_output(&self) {
        let _ = fs::remove_file(self.github_output_path());
    }
}
