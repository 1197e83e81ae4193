//! Maze Chase (workspace facade crate).
//!
//! This package exposes the `maze_chase::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use maze_chase_core as core;
pub use maze_chase_engine as engine;
pub use maze_chase_input as input;
pub use maze_chase_term as term;
pub use maze_chase_types as types;
