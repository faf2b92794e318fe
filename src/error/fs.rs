//! File system errors

use super::RebarMapError;

/// Creates a file read failure error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RebarMapError {
    RebarMapError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> RebarMapError {
    RebarMapError::IoError {
        message: message.into(),
    }
}
