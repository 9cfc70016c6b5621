//! Parser configuration.
//!
//! The defaults reproduce the standard behavior; every option is opt-in.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParserConfig;
//! use chatsift::parser::TranscriptParser;
//!
//! let config = ParserConfig::new().with_preserve_blank_lines(true);
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`TranscriptParser`](crate::parser::TranscriptParser).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Keep blank lines that appear inside a multi-line message (default: false).
    ///
    /// When disabled, blank lines are skipped entirely, so a paragraph break
    /// inside a message body is lost. When enabled, they are kept as empty
    /// continuation lines; blank lines trailing a message are still dropped.
    pub preserve_blank_lines: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables blank line preservation.
    #[must_use]
    pub fn with_preserve_blank_lines(mut self, enabled: bool) -> Self {
        self.preserve_blank_lines = enabled;
        self
    }
}
