//! A single message recovered from a chat transcript.
//!
//! [`Message`] keeps the date and time exactly as they appeared in the export.
//! Exports come from phones in many locales, so no normalization is attempted
//! here; [`Message::calendar_date`] offers a best-effort interpretation when
//! one is needed.
//!
//! # Example
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new("12/5/23", "9:04 PM", "Alice", "Hello there");
//! assert_eq!(msg.timestamp, "12/5/23, 9:04 PM");
//! assert_eq!(msg.sender, "Alice");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parsing::dates::parse_dmy;

/// One logical message of a transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | `"{date}, {time}"` as displayed in the export |
/// | `date` | Raw date token, e.g. `12/5/23` |
/// | `time` | Raw time token, e.g. `9:04:01 PM` or `21:04` |
/// | `sender` | Trimmed display name |
/// | `message` | Body text, continuation lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Combined date and time string.
    pub timestamp: String,

    /// Date token in the export's own format.
    pub date: String,

    /// Time token, 12-hour or 24-hour, with or without seconds.
    pub time: String,

    /// Display name of the author.
    pub sender: String,

    /// Body text. May contain newlines for multiline messages.
    pub message: String,
}

impl Message {
    /// Creates a message from its raw parts, deriving `timestamp`.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let date = date.into();
        let time = time.into();
        Self {
            timestamp: format!("{date}, {time}"),
            date,
            time,
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Interprets `date` as day/month/year.
    ///
    /// Returns `None` when the token is not a real calendar date.
    ///
    /// ```
    /// use chatsift::Message;
    /// use chrono::NaiveDate;
    ///
    /// let msg = Message::new("12/5/23", "9:04 PM", "Alice", "hi");
    /// assert_eq!(msg.calendar_date(), NaiveDate::from_ymd_opt(2023, 5, 12));
    ///
    /// let bad = Message::new("31/2/23", "9:04 PM", "Alice", "hi");
    /// assert!(bad.calendar_date().is_none());
    /// ```
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_dmy(&self.date)
    }

    /// Returns `true` if the body spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.message.contains('\n')
    }

    /// Appends a continuation line to the body.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.message.push('\n');
        self.message.push_str(line);
    }
}
