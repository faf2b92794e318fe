//! Term file parsing errors

use super::RebarMapError;

/// Creates a term parse failure error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RebarMapError {
    RebarMapError::TermParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
