//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helper functions to build the synthetic Rebar3
//! project trees the unit tests discover against, with a single function
//! call per application.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_otp_app, fill_otp_app};
//!
//! #[test]
//! fn my_test() {
//!     // Project root that is itself an application
//!     let temp = create_temp_dir();
//!     fill_otp_app(temp.path(), "myapp", &["kernel"]);
//!
//!     // Member application under apps/
//!     let member = create_otp_app(&temp.path().join("apps"), "member", &[]);
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file below a project root, creating parent directories.
///
/// # Panics
///
/// Panics if any directory or the file cannot be created.
pub fn write_project_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write project file");
}

/// Turn an existing (or not yet existing) directory into an OTP application.
///
/// Writes `src/<name>.app.src` declaring the given runtime dependencies
/// and creates an empty `include/` directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn fill_otp_app(dir: &Path, name: &str, deps: &[&str]) {
    write_project_file(
        dir,
        &format!("src/{name}.app.src"),
        &app_resource_source(name, deps),
    );
    std::fs::create_dir_all(dir.join("include")).expect("Failed to create include directory");
}

/// Create `<parent>/<name>` as an OTP application with a `src` resource file.
///
/// Returns the application's root directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_otp_app(parent: &Path, name: &str, deps: &[&str]) -> PathBuf {
    let dir = parent.join(name);
    fill_otp_app(&dir, name, deps);
    dir
}

/// Create `<parent>/<name>` as a compiled application with only `ebin/<name>.app`.
///
/// # Panics
///
/// Panics if any file cannot be created.
#[must_use]
pub fn create_ebin_app(parent: &Path, name: &str, deps: &[&str]) -> PathBuf {
    let dir = parent.join(name);
    write_project_file(
        &dir,
        &format!("ebin/{name}.app"),
        &app_resource_source(name, deps),
    );
    dir
}

fn app_resource_source(name: &str, deps: &[&str]) -> String {
    format!(
        "{{application, {name},\n  [{{description, \"{name}\"}},\n   {{vsn, \"0.1.0\"}},\n   {{applications, [{}]}}]}}.\n",
        deps.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_fill_otp_app() {
        let temp = create_temp_dir();
        fill_otp_app(temp.path(), "myapp", &["kernel", "stdlib"]);

        let resource = temp.path().join("src/myapp.app.src");
        assert!(resource.exists());
        assert!(temp.path().join("include").is_dir());

        let content = std::fs::read_to_string(resource).expect("Failed to read");
        assert!(content.contains("{applications, [kernel, stdlib]}"));
    }

    #[test]
    fn test_create_otp_app() {
        let temp = create_temp_dir();
        let dir = create_otp_app(&temp.path().join("apps"), "member", &[]);
        assert_eq!(dir, temp.path().join("apps/member"));
        assert!(dir.join("src/member.app.src").exists());
    }

    #[test]
    fn test_create_ebin_app() {
        let temp = create_temp_dir();
        let dir = create_ebin_app(temp.path(), "compiled", &["kernel"]);
        assert!(dir.join("ebin/compiled.app").exists());
        assert!(!dir.join("src").exists());
    }

    #[test]
    fn test_write_project_file() {
        let temp = create_temp_dir();
        write_project_file(temp.path(), "deep/nested/rebar.config", "{deps, []}.");
        assert!(temp.path().join("deep/nested/rebar.config").exists());
    }
}
