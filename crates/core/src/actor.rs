//! Actor state - the player and the ghosts.

use crate::types::Position;

/// A moving piece on the grid: where it is now and where it spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub pos: Position,
    pub start: Position,
}

impl Actor {
    /// Create an actor standing on its spawn point.
    pub fn new(start: Position) -> Self {
        Self { pos: start, start }
    }

    /// Send the actor back to its spawn point.
    pub fn respawn(&mut self) {
        self.pos = self.start;
    }
}
