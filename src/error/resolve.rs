//! Dependency linking and conflict errors

use super::RebarMapError;

/// Creates an unknown-application selection error
pub fn app_not_found(name: impl Into<String>) -> RebarMapError {
    RebarMapError::AppNotFound { name: name.into() }
}

/// Creates an ambiguous-name error for a conflict auto-resolution failure
pub fn ambiguous_app_name(name: impl Into<String>, roots: impl Into<String>) -> RebarMapError {
    RebarMapError::AmbiguousAppName {
        name: name.into(),
        roots: roots.into(),
    }
}

/// Creates an error for conflicts left unresolved at link time
pub fn unresolved_conflicts(names: impl Into<String>) -> RebarMapError {
    RebarMapError::NameConflictsUnresolved {
        names: names.into(),
    }
}

/// Creates an error for a missing OTP library directory
pub fn otp_lib_not_found(path: impl Into<String>) -> RebarMapError {
    RebarMapError::OtpLibNotFound { path: path.into() }
}
