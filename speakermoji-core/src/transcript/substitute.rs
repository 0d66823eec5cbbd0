//! Header substitution.

use regex::NoExpand;
use tracing::warn;

use super::header::speaker_header_regex;
use crate::tokens::SpeakerToken;

/// Replace the header of every listed speaker with `token + ":"`.
///
/// The whole header (timestamp bracket, separator and name) is replaced, so
/// `[1/2, 9:00 am] Alice: hi` becomes `🙂: hi`. Entries are applied in order,
/// each one scanning the text produced by the previous entry. Occurrences of a
/// name inside a message body never match.
pub fn substitute<'a, I>(text: &str, entries: I) -> String
where
    I: IntoIterator<Item = &'a SpeakerToken>,
{
    let mut out = text.to_string();
    for entry in entries {
        let re = match speaker_header_regex(&entry.name) {
            Ok(re) => re,
            Err(e) => {
                warn!(speaker = %entry.name, error = %e, "skipping speaker with unbuildable matcher");
                continue;
            }
        };
        let replacement = format!("{}:", entry.token);
        let replaced = re.replace_all(&out, NoExpand(&replacement));
        if let std::borrow::Cow::Owned(s) = replaced {
            out = s;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(name: &str, token: &str) -> SpeakerToken {
        SpeakerToken::new(name, token)
    }

    #[test]
    fn replaces_the_whole_header() {
        let out = substitute("[1/2, 9:00 am] Alice: hi", &[token("Alice", "🙂")]);
        assert_eq!(out, "🙂: hi");
    }

    #[test]
    fn no_entries_leaves_text_unchanged() {
        let text = "[1/2, 9:00 am] Alice: hi";
        let none: [SpeakerToken; 0] = [];
        assert_eq!(substitute(text, &none), text);
    }

    #[test]
    fn replaces_every_header_of_the_speaker() {
        let text = "[1/2, 9:00 am] Alice: one\n[1/2, 9:01 am] Bob: two\n[1/2, 9:02 am] Alice: three";
        let out = substitute(text, &[token("Alice", "A")]);
        assert_eq!(out, "A: one\n[1/2, 9:01 am] Bob: two\nA: three");
    }

    #[test]
    fn body_mentions_are_untouched() {
        let text = "[1/2, 9:00 am] Bob: ask Alice: she knows\n[1/2, 9:01 am] Alice: yes";
        let out = substitute(text, &[token("Alice", "🐱"), token("Bob", "🐶")]);
        assert_eq!(out, "🐶: ask Alice: she knows\n🐱: yes");
    }

    #[test]
    fn metacharacters_in_names_are_literal() {
        let text = "[1/2, 9:00 am] J.R. (dev)+: hi\n[1/2, 9:01 am] JxRx (dev)+: no";
        let out = substitute(text, &[token("J.R. (dev)+", "🛠")]);
        assert_eq!(out, "🛠: hi\n[1/2, 9:01 am] JxRx (dev)+: no");
    }

    #[test]
    fn dollar_signs_in_tokens_are_not_expanded() {
        let out = substitute("[1/2, 9:00 am] Alice: hi", &[token("Alice", "$1$$")]);
        assert_eq!(out, "$1$$: hi");
    }

    #[test]
    fn system_message_line_keeps_following_header_replaceable() {
        let text = "[1/2, 9:00 am] Messages are end-to-end encrypted\n[1/2, 9:01 am] Bob: hi";
        let out = substitute(text, &[token("Bob", "🐶")]);
        assert_eq!(out, "[1/2, 9:00 am] Messages are end-to-end encrypted\n🐶: hi");
    }

    #[test]
    fn name_matching_is_case_sensitive() {
        let text = "[1/2, 9:00 am] Alice: hi\n[1/2, 9:01 am] ALICE: HI";
        let out = substitute(text, &[token("Alice", "a")]);
        assert_eq!(out, "a: hi\n[1/2, 9:01 am] ALICE: HI");
    }
}
