#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the conform-guard binary.
#[macro_export]
macro_rules! conform_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("conform-guard"))
    };
}

/// Creates a temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, including parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.conform-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".conform-guard.toml", content);
    }

    /// Creates a file with `lines` numbered lines.
    pub fn create_lines_file(&self, relative_path: &str, lines: usize) {
        let content: String = (0..lines).map(|i| format!("line {i}\n")).collect();
        self.create_file(relative_path, &content);
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Frontend and backend rules with a persisted report.
pub const FULL_STACK_CONFIG: &str = r#"
version = "1"

[project]
report = "reports/conformance.json"

[[rules]]
target = "frontend/src/App.tsx"
category = "frontend"
min_lines = 5
contains = ["Router", "Routes"]

[[rules]]
target = "frontend/src/components"
category = "frontend"
kind = "directory"
min_entries = 2

[[rules]]
target = "backend/server.js"
category = "backend"
min_lines = 3
contains = ["listen"]
"#;

/// Populates the fixture so every `FULL_STACK_CONFIG` rule passes.
pub fn create_passing_project(fixture: &TestFixture) {
    fixture.create_file(
        "frontend/src/App.tsx",
        "import { Router, Routes } from 'router';\n\nexport function App() {\n  return <Router><Routes/></Router>;\n}\n",
    );
    fixture.create_file("frontend/src/components/Header.tsx", "");
    fixture.create_file("frontend/src/components/Footer.tsx", "");
    fixture.create_file(
        "backend/server.js",
        "const app = express();\napp.use(routes);\napp.listen(3000);\n",
    );
}
