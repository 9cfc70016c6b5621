//! Integration tests for the transcript parser

use std::fs;

use chatsift::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_conversation() {
    let text = "[12/5/23, 9:04:01 PM] Alice: Hello there
how are you?
[12/5/23, 9:05:00 PM] Bob: I'm fine";

    let transcript = parse_transcript(text).unwrap();

    assert_eq!(transcript.message_count, 2);
    assert_eq!(transcript.messages.len(), 2);

    let alice = &transcript.messages[0];
    assert_eq!(alice.sender, "Alice");
    assert_eq!(alice.date, "12/5/23");
    assert_eq!(alice.time, "9:04:01 PM");
    assert_eq!(alice.timestamp, "12/5/23, 9:04:01 PM");
    assert_eq!(alice.message, "Hello there\nhow are you?");

    let bob = &transcript.messages[1];
    assert_eq!(bob.sender, "Bob");
    assert_eq!(bob.message, "I'm fine");

    assert_eq!(transcript.participants, vec!["Alice", "Bob"]);
    assert_eq!(transcript.date_range.start, "12/5/23");
    assert_eq!(transcript.date_range.end, "12/5/23");
}

// ============================================================================
// Header formats
// ============================================================================

mod formats {
    use super::*;

    #[test]
    fn test_bracketed_24h() {
        let t = parse_transcript("[15/01/2024, 10:30:45] Alice: Hello\n[15/01/2024, 10:31] Bob: Hi").unwrap();
        assert_eq!(t.message_count, 2);
        assert_eq!(t.messages[0].time, "10:30:45");
        assert_eq!(t.messages[1].time, "10:31");
    }

    #[test]
    fn test_dashed_four_digit_year() {
        let t = parse_transcript("15/01/2024, 10:30 - Alice: Hello\n15/01/2024, 10:31 - Bob: Hi").unwrap();
        assert_eq!(t.message_count, 2);
        assert_eq!(t.messages[0].date, "15/01/2024");
        assert_eq!(t.date_range.start, "15/01/2024");
    }

    #[test]
    fn test_dashed_two_digit_year() {
        let t = parse_transcript("3/4/24, 8:15 - Carol: Morning").unwrap();
        assert_eq!(t.messages[0].date, "3/4/24");
        assert_eq!(t.messages[0].time, "8:15");
    }

    #[test]
    fn test_dashed_meridiem_case_insensitive() {
        let t = parse_transcript("3/4/24, 8:15 pm - Carol: Evening\n3/4/24, 8:16 PM - Dan: Hey").unwrap();
        assert_eq!(t.messages[0].time, "8:15 pm");
        assert_eq!(t.messages[1].time, "8:16 PM");
    }

    #[test]
    fn test_mixed_formats_in_one_transcript() {
        let text = "[1/2/24, 9:00 AM] Ann: bracketed
1/2/2024, 09:05 - Bob: dashed long year
1/2/24, 9:10 PM - Ann: dashed meridiem";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.message_count, 3);
        assert_eq!(t.messages[2].message, "dashed meridiem");
    }

    #[test]
    fn test_unsupported_format_is_continuation() {
        let text = "[1/2/24, 9:00] Ann: first
[15.01.24, 10:30:45] Bob: dotted dates are not headers";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.message_count, 1);
        assert_eq!(
            t.messages[0].message,
            "first\n[15.01.24, 10:30:45] Bob: dotted dates are not headers"
        );
    }
}

// ============================================================================
// Accumulation
// ============================================================================

mod accumulation {
    use super::*;

    #[test]
    fn test_many_continuation_lines() {
        let text = "[1/2/24, 9:00] Ann: line 0
line 1
line 2
line 3
[1/2/24, 9:01] Bob: next";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.messages[0].message, "line 0\nline 1\nline 2\nline 3");
        assert_eq!(t.messages[1].message, "next");
    }

    #[test]
    fn test_blank_lines_inside_message_are_dropped() {
        let text = "[1/2/24, 9:00] Ann: para one

para two";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.messages[0].message, "para one\npara two");
    }

    #[test]
    fn test_blank_lines_preserved_when_configured() {
        let parser = TranscriptParser::with_config(ParserConfig::new().with_preserve_blank_lines(true));
        let text = "[1/2/24, 9:00] Ann: para one

para two
";
        let t = parser.parse(text).unwrap();
        assert_eq!(t.messages[0].message, "para one\n\npara two");
    }

    #[test]
    fn test_leading_content_dropped() {
        let text = "Chat export of group
Exported on a Tuesday
[1/2/24, 9:00] Ann: hello";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.message_count, 1);
        assert_eq!(t.messages[0].message, "hello");
    }

    #[test]
    fn test_same_sender_consecutive_messages_stay_separate() {
        let text = "[1/2/24, 9:00] Ann: one\n[1/2/24, 9:00] Ann: two";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.message_count, 2);
        assert_eq!(t.participants, vec!["Ann"]);
    }
}

// ============================================================================
// Aggregates
// ============================================================================

mod aggregates {
    use super::*;

    #[test]
    fn test_participants_sorted_not_insertion_order() {
        let text = "[1/2/24, 9:00] Zoe: a
[1/2/24, 9:01] Mia: b
[1/2/24, 9:02] Abe: c
[1/2/24, 9:03] Zoe: d";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.participants, vec!["Abe", "Mia", "Zoe"]);
    }

    #[test]
    fn test_participants_trimmed() {
        let text = "[1/2/24, 9:00]   Ann  : a\n1/2/24, 9:01 - Ann: b";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.participants, vec!["Ann"]);
    }

    #[test]
    fn test_date_range_spans_first_and_last() {
        let text = "[1/2/24, 9:00] Ann: a
[5/2/24, 9:00] Bob: b
[28/2/24, 9:00] Ann: c";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.date_range.start, "1/2/24");
        assert_eq!(t.date_range.end, "28/2/24");
    }

    #[test]
    fn test_date_range_is_source_order_not_sorted() {
        let text = "[9/2/24, 9:00] Ann: later date first\n[1/2/24, 9:00] Bob: earlier date last";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.date_range.start, "9/2/24");
        assert_eq!(t.date_range.end, "1/2/24");
    }

    #[test]
    fn test_date_range_unavailable_when_no_valid_dates() {
        // Day/month order means 12/31 is not a valid date
        let text = "[12/31/23, 9:00] Ann: a\n[11/30/23, 9:00] Bob: b";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.date_range.start, NOT_AVAILABLE);
        assert_eq!(t.date_range.end, NOT_AVAILABLE);
        assert!(!t.date_range.is_available());
    }

    #[test]
    fn test_date_range_raw_endpoints_with_one_valid_date() {
        let text = "[12/31/23, 9:00] Ann: a\n[5/1/24, 9:00] Bob: b\n[11/30/24, 9:00] Ann: c";
        let t = parse_transcript(text).unwrap();
        assert_eq!(t.date_range.start, "12/31/23");
        assert_eq!(t.date_range.end, "11/30/24");
    }

    #[test]
    fn test_sender_counts() {
        let text = "[1/2/24, 9:00] Ann: a\n[1/2/24, 9:01] Bob: b\n[1/2/24, 9:02] Ann: c";
        let t = parse_transcript(text).unwrap();
        let counts = t.sender_counts();
        assert_eq!(counts["Ann"], 2);
        assert_eq!(counts["Bob"], 1);
        assert_eq!(t.messages_from("Ann").count(), 2);
    }
}

// ============================================================================
// File input
// ============================================================================

mod files {
    use super::*;

    #[test]
    fn test_parse_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, "[1/2/24, 9:00] Ann: hi\nthere\n").unwrap();

        let t = TranscriptParser::new().parse_file(&path).unwrap();
        assert_eq!(t.messages[0].message, "hi\nthere");
    }

    #[test]
    fn test_parse_file_without_messages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "just notes\nno chat here\n").unwrap();

        let err = TranscriptParser::new().parse_file(&path).unwrap_err();
        assert!(err.is_no_messages());
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempdir().unwrap();
        let err = TranscriptParser::new()
            .parse_file(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
