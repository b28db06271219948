#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bracket-guard binary.
#[macro_export]
macro_rules! bracket_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bracket-guard"))
    };
}

/// Balanced C++ source used by tests that expect a clean run.
pub const BALANCED_SOURCE: &str = "int main() {\n    if (true) {\n        return 0;\n    }\n}\n";

/// Source with a mismatched closing bracket and an unmatched opening.
pub const UNBALANCED_SOURCE: &str = "int main() {\n    if (true) {\n}\n";

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

    /// Creates a bracket-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bracket-guard.toml", content);
    }

    /// Creates a C++ file with the given number of lines, each balanced.
    pub fn create_cpp_file_with_lines(&self, relative_path: &str, lines: usize) {
        use std::fmt::Write;
        let mut content = String::new();
        for i in 0..lines {
            let _ = writeln!(content, "int var_{i} = {i};");
        }
        self.create_file(relative_path, &content);
    }
}
