//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - `Date,Time,Sender,Message` table - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - the whole transcript as one JSON document - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one message per line - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Contains | Use Case |
//! |--------|----------|----------|
//! | CSV | Messages only | Spreadsheets |
//! | JSON | Messages, participants, count, date range | APIs, archiving |
//! | JSONL | Messages only | Line-oriented processing |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::core::output::{write_csv, write_json, to_csv};
//!
//! let transcript = chatsift::parse_transcript("[1/2/24, 9:00] Ann: hi").unwrap();
//!
//! write_csv(&transcript.messages, "chat.csv")?;
//! write_json(&transcript, "chat.json")?;
//!
//! let csv_string = to_csv(&transcript.messages)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
