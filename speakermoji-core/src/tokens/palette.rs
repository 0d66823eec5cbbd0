//! Default token palette.

use crate::error::{Result, SpeakermojiError};

/// Built-in default tokens, assigned to new speakers by position.
pub const DEFAULT_TOKENS: &[&str] = &[
    "😀", "😎", "🤖", "🐱", "🦊", "🐼", "🐸", "🦄", "🐙", "🌵", "🍕", "🚀",
];

/// A non-empty ordered list of default tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    tokens: Vec<String>,
}

impl Palette {
    /// # Errors
    /// `SpeakermojiError::EmptyPalette` if `tokens` yields nothing.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(SpeakermojiError::EmptyPalette);
        }
        Ok(Self { tokens })
    }

    /// Token for the speaker at zero-based `position`, cycling through the palette.
    pub fn token_for(&self, position: usize) -> &str {
        &self.tokens[position % self.tokens.len()]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
