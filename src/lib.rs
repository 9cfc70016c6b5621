//! # Chatsift
//!
//! A Rust library for turning exported chat transcripts into structured data.
//!
//! ## Overview
//!
//! A transcript is plain text with one message per timestamped header line,
//! possibly followed by continuation lines:
//!
//! ```text
//! [12/5/23, 9:04:01 PM] Alice: Hello there
//! how are you?
//! [12/5/23, 9:05:00 PM] Bob: I'm fine
//! ```
//!
//! Chatsift recognizes bracketed and dash-separated header formats, joins
//! continuation lines into the message they belong to, and derives the
//! participant list, message count and date range of the conversation.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::parse_transcript;
//!
//! let text = "\
//! [12/5/23, 9:04:01 PM] Alice: Hello there
//! how are you?
//! [12/5/23, 9:05:00 PM] Bob: I'm fine";
//!
//! let transcript = parse_transcript(text).expect("transcript has messages");
//!
//! assert_eq!(transcript.message_count, 2);
//! assert_eq!(transcript.messages[0].message, "Hello there\nhow are you?");
//! assert_eq!(transcript.participants, vec!["Alice", "Bob"]);
//! assert_eq!(transcript.date_range.start, "12/5/23");
//! ```
//!
//! Text with no recognizable header line yields `None`:
//!
//! ```rust
//! assert!(chatsift::parse_transcript("nothing to see here").is_none());
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse_transcript`]
//! - [`parsing`] - Header line formats and date interpretation
//! - [`message`] - [`Message`]
//! - [`transcript`] - [`ParsedTranscript`], [`DateRange`](transcript::DateRange)
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - Export writers (CSV, JSON, JSONL)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection and dispatch
//! - [`error`] - Unified error types ([`ChatsiftError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::Message;
pub use parser::parse_transcript;
pub use transcript::ParsedTranscript;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsift::prelude::*;
///
/// let parser = TranscriptParser::with_config(ParserConfig::new());
/// assert!(parser.parse("").is_none());
/// ```
pub mod prelude {
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatsiftError, Result};

    // Parsing
    pub use crate::config::ParserConfig;
    pub use crate::parser::{TranscriptParser, parse_transcript};
    pub use crate::transcript::{DateRange, NOT_AVAILABLE, ParsedTranscript};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
