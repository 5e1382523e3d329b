//! Error types for stream operations.

use std::io;
use thiserror::Error;

/// Result type for stream operations.
pub type ZfResult<T> = Result<T, ZfError>;

/// Errors that can occur while opening, writing or closing a stream.
///
/// Reads never produce an error value: a failing backend read shows up as a
/// short count and the underlying error is kept on the handle.
#[derive(Debug, Error)]
pub enum ZfError {
    /// The path or mode passed to open was unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The suffix names a format that has no usable backend.
    #[error("unsupported format: {suffix}")]
    UnsupportedFormat {
        /// The suffix that selected the backend.
        suffix: &'static str,
    },

    /// The underlying file, source or codec could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// The path that was being opened.
        path: String,
        /// The error reported by the opener.
        #[source]
        source: io::Error,
    },

    /// The backend accepted fewer bytes than it was given.
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite {
        /// Number of bytes handed to the backend.
        expected: usize,
        /// Number of bytes the backend reported as written.
        written: usize,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ZfError {
    pub(crate) fn open(path: &str, source: io::Error) -> Self {
        Self::Open {
            path: path.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_mentions_path() {
        let err = ZfError::open(
            "missing.gz",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.gz"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn short_write_display() {
        let err = ZfError::ShortWrite {
            expected: 10,
            written: 4,
        };
        assert_eq!(err.to_string(), "short write: 4 of 10 bytes");
    }
}
