//! Error types and handling for rebarmap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`term`]: Term file parsing errors
//! - [`discovery`]: Application discovery errors
//! - [`resolve`]: Dependency linking and conflict errors
//! - [`fs`]: File system errors

#![allow(dead_code)]

// Declare submodules
pub mod discovery;
pub mod fs;
pub mod resolve;
pub mod term;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use discovery::no_importable_root;
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed};
#[allow(unused_imports)]
pub use resolve::{
    ambiguous_app_name, app_not_found, otp_lib_not_found,
    unresolved_conflicts as name_conflicts_unresolved,
};
#[allow(unused_imports)]
pub use term::parse_failed as term_parse_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rebarmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum RebarMapError {
    // Term file errors
    #[error("Failed to parse term file: {path}")]
    #[diagnostic(
        code(rebarmap::term::parse_failed),
        help("The file is skipped during discovery; fix the syntax to pick up its data")
    )]
    TermParseFailed { path: String, reason: String },

    // Discovery errors
    #[error("Nothing to import at: {path}")]
    #[diagnostic(
        code(rebarmap::discovery::no_importable_root),
        help(
            "The directory is neither an OTP application (src/*.app.src or ebin/*.app) \
             nor a release aggregate (apps/ or _build layout)"
        )
    )]
    NoImportableRoot { path: String },

    // Linking errors
    #[error("Application '{name}' was not found in the discovered set")]
    #[diagnostic(
        code(rebarmap::resolve::app_not_found),
        help("Run 'rebarmap scan' to list the applications this project provides")
    )]
    AppNotFound { name: String },

    #[error("Application name '{name}' is claimed by multiple roots: {roots}")]
    #[diagnostic(
        code(rebarmap::resolve::ambiguous_app_name),
        help("Auto-resolution keeps the project-typed application; none or several qualify here")
    )]
    AmbiguousAppName { name: String, roots: String },

    #[error("Name conflicts must be resolved before linking: {names}")]
    #[diagnostic(
        code(rebarmap::resolve::conflicts_unresolved),
        help("Re-run with --auto-resolve, or drop the duplicates with --only")
    )]
    NameConflictsUnresolved { names: String },

    #[error("OTP library directory not found: {path}")]
    #[diagnostic(code(rebarmap::resolve::otp_lib_not_found))]
    OtpLibNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(rebarmap::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rebarmap::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RebarMapError {
    fn from(err: std::io::Error) -> Self {
        RebarMapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RebarMapError {
    fn from(err: serde_json::Error) -> Self {
        RebarMapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RebarMapError {
    fn from(err: inquire::InquireError) -> Self {
        RebarMapError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RebarMapError>;
