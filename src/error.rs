//! Unified error types for chatsift.
//!
//! The parser itself never fails: a transcript with no recognizable header
//! lines yields `None`. [`ChatsiftError`] covers everything around it, such as
//! reading input files, writing exports and rejecting unknown output formats.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::ParsedTranscript;
///
/// fn load() -> Result<Option<ParsedTranscript>> {
///     Ok(chatsift::parse_transcript("[1/2/24, 9:00] Ann: hi"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred while reading a transcript or writing an export.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input contained no line matching any known header format.
    #[error("Could not parse chat transcript{}: no messages recognized", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    NoMessages {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An export format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected (e.g. "output")
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

impl From<std::string::FromUtf8Error> for ChatsiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates a "nothing recognized" error, optionally tied to a file.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatsiftError::NoMessages { path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if the input had no recognizable messages.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatsiftError::NoMessages { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }
}
