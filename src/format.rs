//! Output format selection.
//!
//! [`OutputFormat`] names the export formats and knows how to recognize them
//! from a name or a file extension; [`write_to_format`] and
//! [`to_format_string`] dispatch to the matching writer in
//! [`crate::core::output`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatsift::Result<()> {
//! use chatsift::format::{OutputFormat, to_format_string};
//!
//! let transcript = chatsift::parse_transcript("[1/2/24, 9:00] Ann: hi").unwrap();
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&transcript, format)?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatsiftError;
use crate::transcript::ParsedTranscript;

/// Export format for a parsed transcript.
///
/// - [`Csv`](OutputFormat::Csv) - `Date,Time,Sender,Message` table
/// - [`Json`](OutputFormat::Json) - the full transcript record
/// - [`Jsonl`](OutputFormat::Jsonl) - one message object per line
///
/// # Example
///
/// ```rust
/// use chatsift::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma-separated table, one row per message (default)
    #[default]
    Csv,

    /// Single JSON document with messages, participants, count and date range
    Json,

    /// JSON Lines - one message object per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("output.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("output.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatsiftError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatsiftError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }

    /// Cargo feature that provides the writer for this format.
    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a transcript to a file in the specified format.
///
/// CSV and JSONL contain the messages only; JSON contains the whole record.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    transcript: &ParsedTranscript,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatsiftError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(&transcript.messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(transcript, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(&transcript.messages, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a transcript to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    transcript: &ParsedTranscript,
    format: OutputFormat,
) -> Result<String, ChatsiftError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&transcript.messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(transcript),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(&transcript.messages),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ChatsiftError {
    ChatsiftError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            format.feature()
        ),
    )
}


#[cfg(all(test, feature = "csv-output", feature = "json-output"))]
mod dispatch_tests {
    use super::*;
    use crate::parse_transcript;

    #[test]
    fn test_to_format_string_dispatch() {
        let transcript = parse_transcript("[1/2/24, 9:00] Ann: hi\n[1/2/24, 9:01] Bob: yo").unwrap();

        let csv = to_format_string(&transcript, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("Date,Time,Sender,Message\n"));

        let json = to_format_string(&transcript, OutputFormat::Json).unwrap();
        assert!(json.contains("\"messageCount\": 2"));

        let jsonl = to_format_string(&transcript, OutputFormat::Jsonl).unwrap();
        assert_eq!(jsonl.lines().count(), 2);
    }

    #[test]
    fn test_write_to_format_matches_string() {
        let dir = tempfile::tempdir().unwrap();
        let transcript = parse_transcript("[1/2/24, 9:00] Ann: hi").unwrap();

        for &format in OutputFormat::all() {
            let path = dir.path().join(format!("out.{}", format.extension()));
            let path = path.to_str().unwrap();
            write_to_format(&transcript, path, format).unwrap();

            let written = std::fs::read_to_string(path).unwrap();
            assert_eq!(written, to_format_string(&transcript, format).unwrap());
        }
    }
}
