//! Raw keyboard bytes to game commands.
//!
//! The terminal is in raw mode, so a key press arrives as the bytes the
//! terminal emits for it: a lone `ESC` for the escape key, `ESC [ A..D` for
//! the arrow keys.

use crate::types::{Command, ESC};

/// Decode one read's worth of bytes.
///
/// Anything that is not the escape key or an arrow key decodes to
/// [`Command::None`].
pub fn decode(bytes: &[u8]) -> Command {
    match bytes {
        [ESC] => Command::Escape,
        [ESC, b'[', code, ..] => match code {
            b'A' => Command::Up,
            b'B' => Command::Down,
            b'C' => Command::Right,
            b'D' => Command::Left,
            _ => Command::None,
        },
        _ => Command::None,
    }
}
