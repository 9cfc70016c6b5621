//! Export glue around the parser.
//!
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatsift::Result<()> {
//! use chatsift::core::{to_csv, to_json};
//!
//! let transcript = chatsift::parse_transcript("[1/2/24, 9:00] Ann: hi").unwrap();
//! let csv = to_csv(&transcript.messages)?;
//! let json = to_json(&transcript)?;
//! # Ok(())
//! # }
//! ```

pub mod output;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
