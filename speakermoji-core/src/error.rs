use thiserror::Error;

/// All errors produced by speakermoji-core.
#[derive(Debug, Error)]
pub enum SpeakermojiError {
    #[error("token palette must contain at least one token")]
    EmptyPalette,

    #[error("invalid token assignment `{0}` — expected NAME=TOKEN")]
    InvalidAssignment(String),

    #[error("speaker not present in transcript: {0}")]
    UnknownSpeaker(String),
}

pub type Result<T> = std::result::Result<T, SpeakermojiError>;
