//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write a buildwatch.toml where the build tool is `sh` running the
    /// given snippets; exit status of the snippet is the build outcome
    pub fn write_config(&self, build_snippet: &str, clean_snippet: &str) {
        let config = format!(
            r#"
[project]
descriptor = "app.sln"

[build]
configuration = "Debug"
tool = "sh"
build_args = ["-c", "{build_snippet}", "sh"]
clean_args = ["-c", "{clean_snippet}", "sh"]
rebuild_flag = "--force"
configuration_flag = "-s"
logs_dir = "logs"

[reload]
debounce_ms = 10
stamp = "loaded.stamp"
"#
        );
        self.create_file("buildwatch.toml", &config);
    }

    /// Create the project descriptor so builds are not skipped
    pub fn create_descriptor(&self) {
        self.create_file("app.sln", "solution");
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the buildwatch binary in the project directory
#[allow(dead_code)]
pub fn run_buildwatch(project: &TestProject, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_buildwatch"));
    cmd.current_dir(project.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute buildwatch")
}
