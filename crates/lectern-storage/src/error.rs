//! Resource resolution errors.

use std::path::PathBuf;
use thiserror::Error;

/// Why a `store://` request could not be mapped to a file.
///
/// Every variant is answered with a not-found response; the detail is only
/// for logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The request does not use the `store:` scheme.
    #[error("unsupported scheme in request: {0}")]
    UnsupportedScheme(String),

    /// Nothing left to resolve after dropping empty and `.` segments.
    #[error("request does not name a resource")]
    EmptyPath,

    /// A segment would escape the storage root or is not a plain file name.
    #[error("rejected path segment: {segment:?}")]
    PathTraversal { segment: String },

    /// A segment is not valid percent-encoded UTF-8.
    #[error("invalid percent-encoding in segment: {segment:?}")]
    InvalidEncoding { segment: String },

    /// The joined path is not inside the storage root.
    #[error("resolved path is outside the storage root: {}", .0.display())]
    OutsideRoot(PathBuf),
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
