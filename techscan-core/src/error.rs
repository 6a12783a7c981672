//! Error taxonomy for the scanning layer.

use thiserror::Error;

/// Errors a scan can surface to its caller.
///
/// Per-entry traversal failures (an unreadable subdirectory, a permission
/// error on one file) are not represented here: they are logged and skipped,
/// and the scan completes with whatever was reachable. A missing root
/// directory is not an error either; it yields an empty result.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
