//! Engine module - ties input, simulation and rendering into the game loop.

pub mod game_loop;

pub use maze_chase_core as core;
pub use maze_chase_input as input;
pub use maze_chase_term as term;
pub use maze_chase_types as types;

pub use game_loop::{CommandSource, GameLoop, LoopTiming, Screen};
