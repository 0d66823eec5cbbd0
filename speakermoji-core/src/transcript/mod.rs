//! Transcript header parsing.
//!
//! A header line looks like `[12/31, 9:05 pm] Alice: message body`. The
//! Extractor collects the distinct speaker names from such lines and the
//! Substituter rewrites the header of each speaker to its assigned token.

pub mod extract;
pub mod header;
pub mod substitute;

pub use extract::extract_speakers;
pub use substitute::substitute;
