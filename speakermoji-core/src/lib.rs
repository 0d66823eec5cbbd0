//! # speakermoji-core
//!
//! Speaker extraction and token substitution for exported chat transcripts.
//!
//! ## Architecture
//!
//! ```text
//! transcript text ─► extract_speakers ─► SpeakerTokenSet::reconcile(prev, names, palette)
//!                                                    │
//!                                         substitute(text, tokens)
//!                                                    │
//!                                          detect_direction(output)
//!                                                    │
//!                                 crossbeam Sender<SessionEvent> (observers)
//! ```
//!
//! Everything is synchronous. `TranscriptSession` recomputes every derived
//! value on each mutation; nothing is cached across inputs.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod direction;
pub mod error;
pub mod ipc;
pub mod session;
pub mod tokens;
pub mod transcript;

// Convenience re-exports for downstream crates
pub use direction::{detect_direction, is_rtl, TextDirection};
pub use error::SpeakermojiError;
pub use ipc::events::{SessionEvent, SessionSnapshot};
pub use session::TranscriptSession;
pub use tokens::{Palette, SpeakerToken, SpeakerTokenSet, TokenAssignment};
pub use transcript::{extract_speakers, substitute};
