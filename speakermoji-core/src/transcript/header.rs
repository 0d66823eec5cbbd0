//! The timestamp-bracket header shape shared by extraction and substitution.

use std::sync::OnceLock;

use regex::Regex;

/// `[D/D, time am|pm]` followed by exactly one whitespace character.
///
/// Digits are ASCII only. No calendar validation: `99/99` is accepted.
/// Case-insensitivity applies to the `am`/`pm` marker.
pub const TIMESTAMP_PREFIX: &str = r"\[[0-9]{1,2}/[0-9]{1,2},\s*[0-9:]+\s*[ap]m\]\s";

/// Matches a full header line and captures the raw (untrimmed) speaker name.
///
/// The name never crosses a line break: a line without a colon is not a header.
pub fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(&format!(r"(?im)^{TIMESTAMP_PREFIX}([^:\r\n]+):"))
            .expect("header pattern is a valid regex")
    })
}

/// Build a matcher for the header of one specific speaker.
///
/// The name is escaped so it is matched verbatim, and it is matched
/// case-sensitively: only the timestamp prefix ignores case.
pub fn speaker_header_regex(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?m)^(?i:{TIMESTAMP_PREFIX}){}:",
        regex::escape(name)
    ))
}
