//! Transcript parser.
//!
//! The parser makes a single forward pass over the physical lines of a
//! transcript. Each line is either:
//!
//! - **blank**: skipped, leaving the open message untouched
//! - **a header** (see [`crate::parsing::header`]): closes the open message
//!   and opens a new one
//! - **anything else**: appended to the open message as a continuation line,
//!   or dropped if no message has been opened yet
//!
//! # Example
//!
//! ```rust
//! use chatsift::parser::TranscriptParser;
//!
//! let text = "\
//! [12/5/23, 9:04:01 PM] Alice: Hello there
//! how are you?
//! [12/5/23, 9:05:00 PM] Bob: I'm fine";
//!
//! let transcript = TranscriptParser::new().parse(text).unwrap();
//! assert_eq!(transcript.message_count, 2);
//! assert_eq!(transcript.messages[0].message, "Hello there\nhow are you?");
//! assert_eq!(transcript.participants, vec!["Alice", "Bob"]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;

use crate::Message;
use crate::config::ParserConfig;
use crate::error::ChatsiftError;
use crate::parsing::header::{HeaderLine, match_header};
use crate::transcript::ParsedTranscript;

/// Parser for exported chat transcripts.
///
/// Holds only configuration; every call to [`parse`](Self::parse) is
/// independent, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text.
    ///
    /// Returns `None` when no line is recognized as a message header,
    /// including for empty input.
    pub fn parse(&self, text: &str) -> Option<ParsedTranscript> {
        let scan = text
            .lines()
            .fold(Scan::default(), |scan, line| scan.step(line, &self.config))
            .finish(&self.config);

        if scan.dropped > 0 {
            debug!("dropped {} line(s) before the first message", scan.dropped);
        }

        if scan.messages.is_empty() {
            debug!("no message headers recognized");
            return None;
        }

        let transcript = ParsedTranscript::assemble(scan.messages, scan.senders);
        debug!(
            "parsed {} message(s) from {} participant(s)",
            transcript.message_count,
            transcript.participants.len()
        );
        Some(transcript)
    }

    /// Reads and parses a transcript file.
    ///
    /// A file with no recognizable messages is reported as
    /// [`ChatsiftError::NoMessages`].
    pub fn parse_file(&self, path: &Path) -> Result<ParsedTranscript, ChatsiftError> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
            .ok_or_else(|| ChatsiftError::no_messages(Some(path.to_path_buf())))
    }
}

/// Parses transcript text with the default configuration.
///
/// Shorthand for `TranscriptParser::new().parse(text)`.
pub fn parse_transcript(text: &str) -> Option<ParsedTranscript> {
    TranscriptParser::new().parse(text)
}

/// Accumulator threaded through the line fold.
#[derive(Default)]
struct Scan {
    messages: Vec<Message>,
    senders: HashSet<String>,
    current: Option<Message>,
    dropped: usize,
}

impl Scan {
    fn step(mut self, line: &str, config: &ParserConfig) -> Self {
        if line.trim().is_empty() {
            if config.preserve_blank_lines {
                if let Some(current) = self.current.as_mut() {
                    current.push_line("");
                }
            }
            return self;
        }

        match match_header(line) {
            Some(header) => self.open(header, config),
            None => match self.current.as_mut() {
                Some(current) => current.push_line(line),
                None => self.dropped += 1,
            },
        }
        self
    }

    fn open(&mut self, header: HeaderLine<'_>, config: &ParserConfig) {
        self.close(config);
        self.senders.insert(header.sender.to_string());
        self.current = Some(Message::new(
            header.date,
            header.time,
            header.sender,
            header.body,
        ));
    }

    fn close(&mut self, config: &ParserConfig) {
        if let Some(mut msg) = self.current.take() {
            if config.preserve_blank_lines {
                let kept = msg.message.trim_end_matches('\n').len();
                msg.message.truncate(kept);
            }
            self.messages.push(msg);
        }
    }

    fn finish(mut self, config: &ParserConfig) -> Self {
        self.close(config);
        self
    }
}
