//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::error::ChatsiftError;
use crate::transcript::ParsedTranscript;

/// Writes a transcript to a JSON file.
///
/// # Format
/// ```json
/// {
///   "messages": [
///     {"timestamp": "1/2/24, 9:00", "date": "1/2/24", "time": "9:00", "sender": "Ann", "message": "hi"}
///   ],
///   "participants": ["Ann"],
///   "messageCount": 1,
///   "dateRange": {"start": "1/2/24", "end": "1/2/24"}
/// }
/// ```
pub fn write_json(transcript: &ParsedTranscript, output_path: &str) -> Result<(), ChatsiftError> {
    let json = to_json(transcript)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a transcript to a pretty-printed JSON string.
pub fn to_json(transcript: &ParsedTranscript) -> Result<String, ChatsiftError> {
    Ok(serde_json::to_string_pretty(transcript)?)
}
