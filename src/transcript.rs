//! The parsed form of a whole transcript.
//!
//! [`ParsedTranscript`] is produced once by the parser and never mutated.
//! Its JSON form mirrors the field names downstream consumers expect:
//!
//! ```json
//! {
//!   "messages": [{"timestamp": "12/5/23, 9:04:01 PM", "date": "12/5/23", ...}],
//!   "participants": ["Alice", "Bob"],
//!   "messageCount": 2,
//!   "dateRange": {"start": "12/5/23", "end": "12/5/23"}
//! }
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::Message;

/// Placeholder reported by [`DateRange`] when no message has a valid date.
pub const NOT_AVAILABLE: &str = "N/A";

/// First and last date of a transcript, as raw date tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Date token of the first message, or [`NOT_AVAILABLE`].
    pub start: String,
    /// Date token of the last message, or [`NOT_AVAILABLE`].
    pub end: String,
}

impl DateRange {
    /// A range with both ends set to [`NOT_AVAILABLE`].
    pub fn unavailable() -> Self {
        Self {
            start: NOT_AVAILABLE.to_string(),
            end: NOT_AVAILABLE.to_string(),
        }
    }

    /// Derives the range from messages in conversation order.
    ///
    /// If at least one message has a valid calendar date, the range spans the
    /// raw date tokens of the first and last messages, whether or not those
    /// two are themselves valid. Otherwise the range is unavailable.
    pub fn from_messages(messages: &[Message]) -> Self {
        let any_valid = messages.iter().any(|m| m.calendar_date().is_some());
        match (messages.first(), messages.last()) {
            (Some(first), Some(last)) if any_valid => Self {
                start: first.date.clone(),
                end: last.date.clone(),
            },
            _ => Self::unavailable(),
        }
    }

    /// Returns `true` unless this is the "not available" range.
    pub fn is_available(&self) -> bool {
        self.start != NOT_AVAILABLE || self.end != NOT_AVAILABLE
    }
}

/// Messages of one conversation plus aggregates derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTranscript {
    /// Messages in conversation (source) order.
    pub messages: Vec<Message>,
    /// Distinct senders, sorted lexicographically.
    pub participants: Vec<String>,
    /// Number of messages.
    pub message_count: usize,
    /// Raw dates of the first and last message.
    pub date_range: DateRange,
}

impl ParsedTranscript {
    /// Builds a transcript from messages and the set of senders seen.
    ///
    /// The set is only sorted here, so nothing upstream depends on its
    /// iteration order.
    pub(crate) fn assemble(messages: Vec<Message>, senders: HashSet<String>) -> Self {
        let mut participants: Vec<String> = senders.into_iter().collect();
        participants.sort();

        let date_range = DateRange::from_messages(&messages);

        Self {
            message_count: messages.len(),
            participants,
            date_range,
            messages,
        }
    }

    /// Builds a transcript from messages alone, deriving participants.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let senders = messages.iter().map(|m| m.sender.clone()).collect();
        Self::assemble(messages, senders)
    }

    /// Messages sent by `sender`, in conversation order.
    pub fn messages_from<'a>(&'a self, sender: &'a str) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| m.sender == sender)
    }

    /// Number of messages per sender, keyed by sender name.
    pub fn sender_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for msg in &self.messages {
            *counts.entry(msg.sender.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns `true` if the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
