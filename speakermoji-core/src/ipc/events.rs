//! Events published by `TranscriptSession` to its observers.

use serde::{Deserialize, Serialize};

use crate::direction::TextDirection;
use crate::tokens::SpeakerToken;

/// Published whenever a session mutation changes derived state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    /// The transcript changed and the speaker list was rebuilt.
    #[serde(rename_all = "camelCase")]
    SpeakersChanged {
        seq: u64,
        speakers: Vec<SpeakerToken>,
    },
    /// The transformed output changed (new transcript or new token).
    #[serde(rename_all = "camelCase")]
    OutputChanged {
        seq: u64,
        output: String,
        direction: TextDirection,
    },
}

impl SessionEvent {
    pub fn seq(&self) -> u64 {
        match self {
            SessionEvent::SpeakersChanged { seq, .. } | SessionEvent::OutputChanged { seq, .. } => {
                *seq
            }
        }
    }
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Sequence number of the last published event.
    pub seq: u64,
    pub speakers: Vec<SpeakerToken>,
    pub output: String,
    pub direction: TextDirection,
}
