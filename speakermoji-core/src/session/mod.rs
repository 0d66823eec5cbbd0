//! `TranscriptSession` — recompute-on-mutation controller.
//!
//! ## Data flow
//!
//! ```text
//! set_transcript(text)
//!     └─► extract_speakers ─► reconcile ─► SpeakersChanged
//!         └─► substitute ─► detect_direction ─► OutputChanged
//! set_token(name, token)
//!     └─► substitute ─► detect_direction ─► OutputChanged
//! ```
//!
//! Every derived value is recomputed synchronously inside the mutating call,
//! so accessors always reflect the current transcript and token set.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

use crate::{
    direction::{detect_direction, TextDirection},
    error::{Result, SpeakermojiError},
    ipc::events::{SessionEvent, SessionSnapshot},
    tokens::{Palette, SpeakerTokenSet},
    transcript::{extract_speakers, substitute},
};

/// Holds one transcript, its speaker tokens and the derived output.
#[derive(Debug)]
pub struct TranscriptSession {
    palette: Palette,
    transcript: String,
    speakers: SpeakerTokenSet,
    output: String,
    direction: TextDirection,
    /// Sequence number of the last published event.
    seq: u64,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl TranscriptSession {
    /// Create an empty session. Call `set_transcript` to load text.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            transcript: String::new(),
            speakers: SpeakerTokenSet::new(),
            output: String::new(),
            direction: TextDirection::Ltr,
            seq: 0,
            subscribers: Vec::new(),
        }
    }

    /// Replace the transcript and rebuild every derived value.
    ///
    /// Speakers still present keep their tokens; new speakers get palette
    /// defaults; speakers no longer present are dropped.
    pub fn set_transcript(&mut self, text: impl Into<String>) {
        self.transcript = text.into();
        let names = extract_speakers(&self.transcript);
        self.speakers = self.speakers.reconcile(&names, &self.palette);
        debug!(
            speakers = self.speakers.len(),
            bytes = self.transcript.len(),
            "transcript updated"
        );

        let seq = self.next_seq();
        self.publish(SessionEvent::SpeakersChanged {
            seq,
            speakers: self.speakers.as_slice().to_vec(),
        });
        self.recompute_output();
    }

    /// Assign a new token to a speaker present in the current transcript.
    ///
    /// # Errors
    /// `SpeakermojiError::UnknownSpeaker` if `name` is not a current speaker.
    pub fn set_token(&mut self, name: &str, token: impl Into<String>) -> Result<()> {
        if !self.speakers.set_token(name, token) {
            return Err(SpeakermojiError::UnknownSpeaker(name.to_string()));
        }
        debug!(speaker = name, "token updated");
        self.recompute_output();
        Ok(())
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn speakers(&self) -> &SpeakerTokenSet {
        &self.speakers
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            seq: self.seq,
            speakers: self.speakers.as_slice().to_vec(),
            output: self.output.clone(),
            direction: self.direction,
        }
    }

    /// Subscribe to session events published from now on.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn recompute_output(&mut self) {
        self.output = substitute(&self.transcript, &self.speakers);
        self.direction = detect_direction(&self.output);
        let seq = self.next_seq();
        self.publish(SessionEvent::OutputChanged {
            seq,
            output: self.output.clone(),
            direction: self.direction,
        });
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn publish(&mut self, event: SessionEvent) {
        // Receivers that have been dropped are pruned here.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for TranscriptSession {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
