//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Every tick
//! the whole screen is redrawn: clear, maze, actors, status line.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Build frames as plain bytes so they can be checked without a terminal
//! - Support two-column (emoji) glyphs without breaking the column mapping

pub mod game_view;
pub mod glyphs;
pub mod renderer;

pub use maze_chase_core as core;
pub use maze_chase_types as types;

pub use game_view::GameView;
pub use glyphs::{ConfigError, GlyphConfig};
pub use renderer::{TerminalModeError, TerminalRenderer};
