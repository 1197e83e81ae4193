//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It decodes
//! raw keyboard bytes into [`crate::types::Command`]s and hands them to the
//! game loop through a non-blocking single-slot mailbox.

pub mod channel;
pub mod decode;

pub use maze_chase_types as types;

pub use channel::{InputChannel, InputReadError};
pub use decode::decode;
