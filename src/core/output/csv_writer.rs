//! CSV output writer.

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::error::ChatsiftError;

/// Column names, in output order.
const HEADER: [&str; 4] = ["Date", "Time", "Sender", "Message"];

/// Writes messages to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `Date`, `Time`, `Sender`, `Message`
/// - `Message` is always wrapped in double quotes, with embedded quotes doubled
/// - The other columns are quoted only when they contain `,`, `"` or a line break
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: &str) -> Result<(), ChatsiftError> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(messages: &[Message]) -> Result<String, ChatsiftError> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W) -> Result<(), ChatsiftError> {
    // Quoting is done by hand so that the Message column is always quoted.
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(sink);

    writer.write_record(HEADER)?;

    for msg in messages {
        writer.write_record([
            &*quote_if_needed(&msg.date),
            &*quote_if_needed(&msg.time),
            &*quote_if_needed(&msg.sender),
            quote_field(&msg.message).as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Wraps a field in double quotes, doubling any quote inside it.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Quotes a field only when it would otherwise split or break the row.
fn quote_if_needed(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(quote_field(value))
    } else {
        Cow::Borrowed(value)
    }
}
