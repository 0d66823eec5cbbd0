//! Serialisable session types.
//!
//! All types derive `serde::Serialize` + `serde::Deserialize` so a host can
//! print them as JSON or forward them to a frontend unchanged.

pub mod events;
