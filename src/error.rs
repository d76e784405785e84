//! Unified error types for chatview.
//!
//! This module provides a single [`ChatviewError`] enum that covers all
//! error cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Parsing itself never fails: malformed lines are discarded or treated as
//! continuations, so the only parser errors are read failures (missing or
//! unreadable file, invalid UTF-8). The remaining variants belong to the
//! output writers. Library users get typed errors they can match on;
//! application users get clear messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatview operations.
///
/// # Example
///
/// ```rust
/// use chatview::error::Result;
/// use chatview::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatviewError>;

/// The error type for all chatview operations.
///
/// Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatviewError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export file is not valid UTF-8.
    ///
    /// The whole parse fails; no partial message sequence is returned.
    #[error("UTF-8 encoding error in {}: {source}", path.display())]
    Utf8 {
        /// Path of the offending file
        path: PathBuf,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An output path carries an extension that maps to no known format.
    #[error("Unsupported output format '{extension}'. Expected one of: csv, json, jsonl")]
    UnsupportedFormat {
        /// The unrecognized extension (or the whole path when it has none)
        extension: String,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing JSON or JSONL output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatviewError {
    /// Creates a UTF-8 decode error for the given file.
    pub fn utf8(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        ChatviewError::Utf8 {
            path: path.into(),
            source,
        }
    }

    /// Creates an unsupported-format error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        ChatviewError::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatviewError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decode error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatviewError::Utf8 { .. })
    }

    /// Returns `true` if this is an unsupported-format error.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ChatviewError::UnsupportedFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatviewError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_utf8_error_display() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err = ChatviewError::utf8("/exports/chat.txt", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("/exports/chat.txt"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ChatviewError::unsupported_format("xml");
        let display = err.to_string();
        assert!(display.contains("xml"));
        assert!(display.contains("jsonl"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatviewError::from(io_err);
        assert!(err.source().is_some());

        let utf8_err = String::from_utf8(vec![0xff]).unwrap_err();
        let err = ChatviewError::utf8("chat.txt", utf8_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatviewError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_utf8());
        assert!(!io_err.is_unsupported_format());

        let fmt_err = ChatviewError::unsupported_format("xml");
        assert!(fmt_err.is_unsupported_format());
        assert!(!fmt_err.is_io());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatviewError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatviewError::unsupported_format("xml");
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnsupportedFormat"));
    }
}
