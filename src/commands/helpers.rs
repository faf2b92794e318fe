//! Shared helpers for command implementations

use std::path::PathBuf;

use crate::error::{RebarMapError, Result};

/// Resolve the project root from a CLI argument or the current directory
///
/// The path is canonicalized (without UNC prefixes on Windows) so that
/// every descriptor produced by a scan carries a stable absolute root.
pub fn project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| RebarMapError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };
    dunce::canonicalize(&path).map_err(|e| RebarMapError::IoError {
        message: format!("Failed to resolve '{}': {}", path.display(), e),
    })
}

/// Render an application root relative to the project root when possible
pub fn display_root(root: &std::path::Path, project_root: &std::path::Path) -> String {
    match root.strip_prefix(project_root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => root.display().to_string(),
    }
}
