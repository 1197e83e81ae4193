//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze model, the actors and the per-tick simulation.
//! It has **zero dependencies** on terminals or threads, making it:
//!
//! - **Deterministic**: a seeded RNG (or a [`ScriptedPicker`]) replays a game exactly
//! - **Testable**: every rule is a plain method call on [`GameState`]
//! - **Non-blocking**: a tick never waits on input or sleeps
//!
//! # Module Structure
//!
//! - [`grid`]: maze loading and the wrap-then-wall movement rule
//! - [`actor`]: player and ghost positions with their spawn points
//! - [`game_state`]: score/lives/dots and the one-tick [`GameState::step`]
//! - [`rng`]: uniform direction choice for the ghosts
//!
//! # Example
//!
//! ```
//! use maze_chase_core::{GameState, Maze, ScriptedPicker};
//! use maze_chase_core::types::{Command, Direction};
//!
//! let maze = Maze::parse(&["#####", "#P.X#", "#.G.#", "#####"]).unwrap();
//! let mut game = GameState::new(maze);
//! let mut ghosts = ScriptedPicker::constant(Direction::Down);
//!
//! game.step(Command::Right, &mut ghosts);
//! game.step(Command::Right, &mut ghosts);
//! assert_eq!(game.score(), 11);
//! ```

pub mod actor;
pub mod game_state;
pub mod grid;
pub mod rng;

pub use maze_chase_types as types;

// Re-export commonly used types for convenience
pub use actor::Actor;
pub use game_state::{GameState, TickReport};
pub use grid::{Grid, LoadError, Maze};
pub use rng::{DirectionPicker, ScriptedPicker};
