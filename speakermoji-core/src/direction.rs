//! Rendering direction inference.
//!
//! The output is rendered right-to-left as soon as it contains a single
//! Hebrew or Arabic codepoint.

use serde::{Deserialize, Serialize};

/// Codepoint ranges that switch rendering to right-to-left.
const RTL_RANGES: &[(char, char)] = &[
    ('\u{0590}', '\u{05FF}'), // Hebrew
    ('\u{0600}', '\u{06FF}'), // Arabic
    ('\u{0750}', '\u{077F}'), // Arabic Supplement
    ('\u{08A0}', '\u{08FF}'), // Arabic Extended-A
    ('\u{FB1D}', '\u{FB4F}'), // Hebrew presentation forms
    ('\u{FB50}', '\u{FDFF}'), // Arabic Presentation Forms-A
    ('\u{FE70}', '\u{FEFC}'), // Arabic Presentation Forms-B (U+FEFF is the BOM)
];

/// Direction the transformed transcript should be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

fn is_rtl_char(c: char) -> bool {
    RTL_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// `true` if `text` contains at least one Hebrew or Arabic codepoint.
pub fn is_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

pub fn detect_direction(text: &str) -> TextDirection {
    if is_rtl(text) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_ltr() {
        assert_eq!(detect_direction("🙂: hello there"), TextDirection::Ltr);
        assert!(!is_rtl("plain ascii"));
    }

    #[test]
    fn empty_text_is_ltr() {
        assert_eq!(detect_direction(""), TextDirection::Ltr);
    }

    #[test]
    fn hebrew_text_is_rtl() {
        assert_eq!(detect_direction("🙂: שלום"), TextDirection::Rtl);
    }

    #[test]
    fn arabic_text_is_rtl() {
        assert!(is_rtl("🐱: مرحبا"));
    }

    #[test]
    fn presentation_forms_are_rtl() {
        assert!(is_rtl("\u{FB2A}"));
        assert!(is_rtl("\u{FEFB}"));
    }

    #[test]
    fn byte_order_mark_is_not_rtl() {
        assert_eq!(detect_direction("\u{FEFF}🙂: hello"), TextDirection::Ltr);
    }

    #[test]
    fn a_single_rtl_codepoint_is_enough() {
        assert!(is_rtl("mostly latin text with one \u{05D0}"));
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(TextDirection::Rtl).expect("serialize direction");
        assert_eq!(json, "rtl");
    }
}
