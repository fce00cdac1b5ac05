//! Common error types used throughout media-proxy.
//!
//! Scanning failures abort startup. Every other variant is scoped to a single
//! request and maps onto an HTTP status through [`Error::http_status`].

use std::path::PathBuf;

/// Common error type for media-proxy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The startup directory walk hit an I/O error.
    #[error("Failed to scan media directory {path:?}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No registry entry exists for the requested URL path.
    #[error("File not found: {0}")]
    NotFound(String),

    /// The registry knows the route but its file is gone from disk.
    #[error("File no longer exists: {0}")]
    FileMissing(String),

    /// The `Range` header does not have the `bytes=<start>-<end>` shape.
    #[error("Unparsable range header: {0}")]
    RangeUnparsable(String),

    /// The parsed range falls outside the file.
    #[error("Range {start}-{end} not satisfiable for size {size}")]
    RangeUnsatisfiable { start: u64, end: u64, size: u64 },

    /// Copying file bytes to the client failed after headers were sent.
    #[error("Stream I/O error: {0}")]
    StreamIo(#[source] std::io::Error),

    /// An I/O operation failed before a response was started.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(route: S) -> Self {
        Self::NotFound(route.into())
    }

    /// Create a new FileMissing error.
    pub fn file_missing<S: Into<String>>(route: S) -> Self {
        Self::FileMissing(route.into())
    }

    /// Create a new RangeUnparsable error.
    pub fn range_unparsable<S: Into<String>>(header: S) -> Self {
        Self::RangeUnparsable(header.into())
    }

    /// Wrap a walk failure under `path`.
    pub fn scan_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    /// HTTP status code this error should surface as.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::FileMissing(_) => 404,
            Self::RangeUnparsable(_) | Self::RangeUnsatisfiable { .. } => 416,
            Self::ScanFailed { .. } | Self::StreamIo(_) | Self::Io(_) => 500,
        }
    }

    /// Whether this is one of the range failures, which carry no body.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::RangeUnparsable(_) | Self::RangeUnsatisfiable { .. }
        )
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
