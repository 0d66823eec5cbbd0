//! Speaker extraction.

use std::collections::HashSet;

use super::header::header_regex;

/// Return the distinct speaker names found in header lines, in order of first
/// appearance.
///
/// Names are trimmed but otherwise kept verbatim, so `Alice` and `alice` are
/// two speakers. Lines that do not have the exact header shape are skipped.
pub fn extract_speakers(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for caps in header_regex().captures_iter(text) {
        let Some(raw) = caps.get(1) else { continue };
        let name = raw.as_str().trim();
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transcript_has_no_speakers() {
        assert!(extract_speakers("").is_empty());
    }

    #[test]
    fn plain_text_has_no_speakers() {
        let text = "hello there\nAlice: not a header\n[1/2] Bob: still not";
        assert!(extract_speakers(text).is_empty());
    }

    #[test]
    fn preserves_first_seen_order_without_duplicates() {
        let text = "[1/2, 9:00 am] Alice: hi\n\
                    [1/2, 9:01 am] Bob: hey\n\
                    [1/2, 9:02 am] Alice: how are you?";
        assert_eq!(extract_speakers(text), vec!["Alice", "Bob"]);
    }

    #[test]
    fn trims_but_keeps_internal_whitespace() {
        let text = "[1/2, 9:00 am] Mary Ann  : hi\n[1/2, 9:01 am] Mary Ann: again";
        assert_eq!(extract_speakers(text), vec!["Mary Ann"]);
    }

    #[test]
    fn case_variants_are_distinct() {
        let text = "[1/2, 9:00 am] Alice: hi\n[1/2, 9:01 am] ALICE: hi";
        assert_eq!(extract_speakers(text), vec!["Alice", "ALICE"]);
    }

    #[test]
    fn body_colons_do_not_leak_into_the_name() {
        let text = "[1/2, 9:00 am] Alice: meet at 10:30: ok?";
        assert_eq!(extract_speakers(text), vec!["Alice"]);
    }

    #[test]
    fn continuation_lines_are_ignored() {
        let text = "[1/2, 9:00 am] Alice: first line\nsecond line\n[1/2, 9:01 am] Bob: reply";
        assert_eq!(extract_speakers(text), vec!["Alice", "Bob"]);
    }

    #[test]
    fn system_message_without_colon_is_not_a_header() {
        let text = "[1/2, 9:00 am] Messages are end-to-end encrypted\n[1/2, 9:01 am] Bob: hi";
        assert_eq!(extract_speakers(text), vec!["Bob"]);
    }

    #[test]
    fn crlf_system_message_is_not_a_header() {
        let text = "[1/2, 9:00 am] Alice joined\r\n[1/2, 9:01 am] Alice: hi\r\n";
        assert_eq!(extract_speakers(text), vec!["Alice"]);
    }

    #[test]
    fn crlf_line_endings_are_supported() {
        let text = "[1/2, 9:00 am] Alice: hi\r\n[1/2, 9:01 am] Bob: hey\r\n";
        assert_eq!(extract_speakers(text), vec!["Alice", "Bob"]);
    }
}
