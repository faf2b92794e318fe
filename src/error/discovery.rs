//! Application discovery errors

use super::RebarMapError;

/// Creates a "nothing to import" error for an unrecognizable project root
pub fn no_importable_root(path: impl Into<String>) -> RebarMapError {
    RebarMapError::NoImportableRoot { path: path.into() }
}
