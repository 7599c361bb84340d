//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure a caller can observe. Per-line problems inside a log are *not*
//! errors: the parser recovers from them locally (see
//! [`LineOutcome`](crate::parsing::LineOutcome)) and only escalates when a
//! whole input yields nothing.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Per-line anomalies** are logged and counted, never propagated

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageEvent;
///
/// fn my_function() -> Result<Vec<MessageEvent>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An input produced zero parseable message events.
    ///
    /// Fatal to that input's parse call only; other inputs parsed
    /// independently are unaffected.
    #[error("No valid messages found{} ({lines} lines scanned). Make sure the file is a chat export.", source_name.as_ref().map(|s| format!(" in {s}")).unwrap_or_default())]
    NoValidMessages {
        /// Label of the input (usually a file name), if known
        source_name: Option<String>,
        /// Number of physical lines that were examined
        lines: usize,
    },

    /// The external stop-word list could not be loaded.
    ///
    /// [`StopWordCache`](crate::stopwords::StopWordCache) recovers from this
    /// by falling back to the built-in set.
    #[error("Stop-word list unavailable at '{location}': {reason}")]
    StopWordSourceUnavailable {
        /// Where the list was expected (path or URL)
        location: String,
        /// Why loading failed
        reason: String,
    },

    /// The requested format or option is not usable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a "nothing parsed" error for an input.
    pub fn no_valid_messages(source_name: Option<String>, lines: usize) -> Self {
        ChatlensError::NoValidMessages { source_name, lines }
    }

    /// Creates a stop-word loading error.
    pub fn stop_words_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        ChatlensError::StopWordSourceUnavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if an input yielded no messages.
    pub fn is_no_valid_messages(&self) -> bool {
        matches!(self, ChatlensError::NoValidMessages { .. })
    }

    /// Returns `true` if a stop-word list could not be loaded.
    pub fn is_stop_words_unavailable(&self) -> bool {
        matches!(self, ChatlensError::StopWordSourceUnavailable { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_no_valid_messages_display() {
        let err = ChatlensError::no_valid_messages(Some("chat.txt".into()), 12);
        let display = err.to_string();
        assert!(display.contains("No valid messages"));
        assert!(display.contains("chat.txt"));
        assert!(display.contains("12 lines"));

        let anonymous = ChatlensError::no_valid_messages(None, 0);
        assert!(!anonymous.to_string().contains(" in "));
    }

    #[test]
    fn test_stop_words_display() {
        let err = ChatlensError::stop_words_unavailable("/missing.txt", "not found");
        let display = err.to_string();
        assert!(display.contains("/missing.txt"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("output", "unknown extension");
        assert!(err.to_string().contains("Invalid output format"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_is_methods() {
        let err = ChatlensError::no_valid_messages(None, 3);
        assert!(err.is_no_valid_messages());
        assert!(!err.is_io());
        assert!(!err.is_stop_words_unavailable());
        assert!(!err.is_invalid_format());

        let err = ChatlensError::stop_words_unavailable("x", "y");
        assert!(err.is_stop_words_unavailable());
        assert!(!err.is_no_valid_messages());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
