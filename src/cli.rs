//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options as accepted on the command line

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::error::ChatsiftError;

/// Parse an exported chat transcript into messages, participants and a
/// date range, and optionally export it as CSV, JSON or JSON Lines.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift chat.txt
    chatsift chat.txt -o chat.csv
    chatsift chat.txt -o export.out --format json
    chatsift chat.txt -o messages.jsonl --preserve-blank-lines")]
pub struct Args {
    /// Path to the exported transcript (UTF-8 text)
    pub input: String,

    /// Write the parsed transcript to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (default: guessed from the output extension)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep blank lines inside multi-line messages
    #[arg(long)]
    pub preserve_blank_lines: bool,

    /// Do not print the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the parser configuration from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_preserve_blank_lines(self.preserve_blank_lines)
    }

    /// Log level selected by `-v` flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Resolves the export format for `output`.
    ///
    /// An explicit `--format` wins; otherwise the extension decides.
    pub fn output_format(&self, output: &str) -> Result<crate::format::OutputFormat, ChatsiftError> {
        match self.format {
            Some(format) => Ok(format.into()),
            None => crate::format::OutputFormat::from_path(output),
        }
    }
}

/// Output format options.
///
/// - [`Csv`](OutputFormat::Csv) - `Date,Time,Sender,Message` table
/// - [`Json`](OutputFormat::Json) - Full transcript record
/// - [`Jsonl`](OutputFormat::Jsonl) - One message per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV table of messages (default)
    #[default]
    Csv,

    /// JSON document with messages, participants, count and date range
    Json,

    /// JSON Lines - one message object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
