//! Header line recognition.
//!
//! A header line opens a new message and carries its date, time and sender.
//! Exports differ by platform and locale, so several formats are supported.
//! They overlap: a single line can satisfy more than one pattern. Formats are
//! therefore always tried in the order of [`HeaderFormat::all`] and the first
//! match wins.
//!
//! Supported formats, in priority order:
//! - `[12/5/23, 9:04:01 PM] Alice: Hello` (bracketed)
//! - `12/5/2023, 21:04 - Alice: Hello` (dashed, 2-4 digit year)
//! - `12/5/23, 21:04 - Alice: Hello` (dashed, 2 digit year)
//! - `12/5/23, 9:04 PM - Alice: Hello` (dashed, mandatory AM/PM)

use once_cell::sync::Lazy;
use regex::Regex;

/// Header line formats, listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFormat {
    /// Date and time in square brackets, optional seconds and AM/PM.
    /// Example: `[12/5/23, 9:04:01 PM] Alice: Hello`
    Bracketed,
    /// Dash-separated, year with 2 to 4 digits, optional AM/PM.
    /// Example: `12/5/2023, 21:04 - Alice: Hello`
    Dashed,
    /// Dash-separated, two digit year, optional AM/PM.
    /// Example: `12/5/23, 21:04 - Alice: Hello`
    DashedShortYear,
    /// Dash-separated, two digit year, AM/PM required.
    /// Example: `12/5/23, 9:04 PM - Alice: Hello`
    DashedMeridiem,
}

impl HeaderFormat {
    /// Returns the regex pattern for this format.
    ///
    /// Every pattern is anchored at the start of the line and captures
    /// date, time, sender and the rest of the line, in that order.
    pub fn pattern(self) -> &'static str {
        match self {
            HeaderFormat::Bracketed => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?(?:\s*(?i:[ap]m))?)\]\s*([^:\s][^:]*):(.*)"
            }
            HeaderFormat::Dashed => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?:\s*(?i:[ap]m))?)\s*-\s*([^:\s][^:]*):(.*)"
            }
            HeaderFormat::DashedShortYear => {
                r"^(\d{1,2}/\d{1,2}/\d{2}),\s*(\d{1,2}:\d{2}(?:\s*(?i:[ap]m))?)\s*-\s*([^:\s][^:]*):(.*)"
            }
            HeaderFormat::DashedMeridiem => {
                r"^(\d{1,2}/\d{1,2}/\d{2}),\s*(\d{1,2}:\d{2}\s*(?i:[ap]m))\s*-\s*([^:\s][^:]*):(.*)"
            }
        }
    }

    /// Returns all formats in matching priority.
    pub fn all() -> &'static [HeaderFormat] {
        &[
            HeaderFormat::Bracketed,
            HeaderFormat::Dashed,
            HeaderFormat::DashedShortYear,
            HeaderFormat::DashedMeridiem,
        ]
    }

    /// Tries this format alone against `line`.
    pub fn captures(self, line: &str) -> Option<HeaderLine<'_>> {
        let matcher = MATCHERS.iter().find(|m| m.format == self)?;
        matcher.captures(line)
    }
}

/// Fields extracted from a header line. Borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// The format that recognized the line.
    pub format: HeaderFormat,
    /// Raw date token.
    pub date: &'a str,
    /// Raw time token.
    pub time: &'a str,
    /// Sender, trimmed.
    pub sender: &'a str,
    /// First line of the body, trimmed.
    pub body: &'a str,
}

struct HeaderMatcher {
    format: HeaderFormat,
    regex: Regex,
}

impl HeaderMatcher {
    fn new(format: HeaderFormat) -> Self {
        Self {
            format,
            regex: Regex::new(format.pattern()).expect("header patterns are valid regexes"),
        }
    }

    fn captures<'a>(&self, line: &'a str) -> Option<HeaderLine<'a>> {
        let caps = self.regex.captures(line)?;
        let field = |i| caps.get(i).map_or("", |m| m.as_str());

        Some(HeaderLine {
            format: self.format,
            date: field(1),
            time: field(2),
            sender: field(3).trim(),
            body: field(4).trim(),
        })
    }
}

static MATCHERS: Lazy<Vec<HeaderMatcher>> = Lazy::new(|| {
    HeaderFormat::all()
        .iter()
        .map(|&format| HeaderMatcher::new(format))
        .collect()
});

/// Classifies `line` as a header line.
///
/// Formats are tried in priority order; returns the first match, or `None`
/// if the line is not a header (a continuation, or leading noise).
///
/// ```
/// use chatsift::parsing::{HeaderFormat, match_header};
///
/// let header = match_header("[12/5/23, 9:04:01 PM] Alice: Hello there").unwrap();
/// assert_eq!(header.format, HeaderFormat::Bracketed);
/// assert_eq!(header.date, "12/5/23");
/// assert_eq!(header.time, "9:04:01 PM");
/// assert_eq!(header.sender, "Alice");
/// assert_eq!(header.body, "Hello there");
///
/// assert!(match_header("how are you?").is_none());
/// ```
pub fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    MATCHERS.iter().find_map(|m| m.captures(line))
}
