//! Common test utilities for rebarmap integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A synthetic Rebar3 project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Make the project root itself an OTP application
    pub fn make_root_app(&self, name: &str, deps: &[&str]) {
        self.write_file(
            &format!("src/{name}.app.src"),
            &app_resource_source(name, deps),
        );
        std::fs::create_dir_all(self.path.join("include"))
            .expect("Failed to create include directory");
    }

    /// Add an application under a subdirectory (e.g. "apps", "_checkouts")
    pub fn add_app(&self, subdir: &str, name: &str, deps: &[&str]) -> PathBuf {
        self.write_file(
            &format!("{subdir}/{name}/src/{name}.app.src"),
            &app_resource_source(name, deps),
        );
        self.path.join(subdir).join(name)
    }

    /// Create a directory in the project
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Render an application resource file declaring the given runtime deps
pub fn app_resource_source(name: &str, deps: &[&str]) -> String {
    format!(
        "{{application, {name},\n  [{{description, \"{name}\"}},\n   {{vsn, \"0.1.0\"}},\n   {{applications, [{}]}}]}}.\n",
        deps.join(", ")
    )
}
