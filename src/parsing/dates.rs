//! Best-effort date interpretation.
//!
//! Transcript dates are kept verbatim everywhere else in the crate; this is
//! only used to decide whether a date token names a real calendar day.

use chrono::NaiveDate;

/// Parses a `D/M/Y` token into a calendar date.
///
/// Day and month may have one or two digits. A year with one or two digits
/// is taken to be in the 2000s. Returns `None` for anything that is not a
/// valid date (e.g. `31/2/24`, `1/13/24`, `a/b/c`).
pub fn parse_dmy(date: &str) -> Option<NaiveDate> {
    let mut parts = date.trim().split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let day: u32 = parse_digits(day)?;
    let month: u32 = parse_digits(month)?;
    let year = match parse_digits::<i32>(year)? {
        short if year.len() <= 2 => 2000 + short,
        full => full,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a non-empty run of ASCII digits.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month_order() {
        assert_eq!(parse_dmy("12/5/23"), NaiveDate::from_ymd_opt(2023, 5, 12));
        assert_eq!(parse_dmy("1/2/2024"), NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_two_digit_year_is_2000s() {
        assert_eq!(parse_dmy("01/01/99"), NaiveDate::from_ymd_opt(2099, 1, 1));
        assert_eq!(parse_dmy("15/01/24"), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_four_digit_year_kept() {
        assert_eq!(parse_dmy("15/01/1999"), NaiveDate::from_ymd_opt(1999, 1, 15));
    }

    #[test]
    fn test_invalid_calendar_dates() {
        assert!(parse_dmy("31/2/24").is_none());
        assert!(parse_dmy("1/13/24").is_none());
        assert!(parse_dmy("0/1/24").is_none());
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(parse_dmy("").is_none());
        assert!(parse_dmy("1/2").is_none());
        assert!(parse_dmy("1/2/3/4").is_none());
        assert!(parse_dmy("a/b/c").is_none());
        assert!(parse_dmy("1//24").is_none());
        assert!(parse_dmy("15.01.24").is_none());
    }
}
