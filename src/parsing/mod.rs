//! Line-level parsing building blocks.
//!
//! - [`header`] recognizes the lines that open a new message
//! - [`dates`] gives a best-effort calendar reading of raw date tokens
//!
//! The accumulating scan that ties these together lives in [`crate::parser`].

pub mod dates;
pub mod header;

pub use dates::parse_dmy;
pub use header::{HeaderFormat, HeaderLine, match_header};
