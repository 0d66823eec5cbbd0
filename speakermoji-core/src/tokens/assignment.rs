//! `NAME=TOKEN` assignments from the command line or the interactive prompt.

use std::str::FromStr;

use crate::error::SpeakermojiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAssignment {
    pub name: String,
    pub token: String,
}

impl FromStr for TokenAssignment {
    type Err = SpeakermojiError;

    /// Splits on the last `=` so names may themselves contain `=`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (name, token) = raw
            .rsplit_once('=')
            .ok_or_else(|| SpeakermojiError::InvalidAssignment(raw.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SpeakermojiError::InvalidAssignment(raw.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            token: token.to_string(),
        })
    }
}
