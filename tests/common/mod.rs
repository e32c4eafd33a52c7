#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the quality-guard binary.
#[macro_export]
macro_rules! quality_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("quality-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a quality-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".quality-guard.toml", content);
    }

    /// Creates a Python file with one function of the given body length.
    pub fn create_python_function(&self, relative_path: &str, body_lines: usize) {
        let mut content = String::from("def generated():\n");
        for i in 0..body_lines {
            let _ = writeln!(content, "    step_{i}()");
        }
        self.create_file(relative_path, &content);
    }

    /// Creates a file with the given number of flat statement lines.
    pub fn create_flat_file(&self, relative_path: &str, lines: usize) {
        let mut content = String::new();
        for i in 0..lines {
            let _ = writeln!(content, "value_{i} = {i}");
        }
        self.create_file(relative_path, &content);
    }

    /// Builds a hook event JSON payload for a file inside the fixture.
    pub fn hook_event(&self, tool_name: &str, relative_path: &str) -> String {
        let file_path = self.dir.path().join(relative_path);
        format!(
            r#"{{"tool_name": "{tool_name}", "tool_input": {{"file_path": "{}"}}}}"#,
            file_path.display()
        )
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
