//! Direction picking for ghost movement
//!
//! Ghosts wander: every tick each one picks a direction uniformly from the four
//! [`Direction`]s. Any `rand::Rng` can drive that choice; [`ScriptedPicker`]
//! replays a fixed sequence for deterministic tests and benchmarks.

use rand::Rng;

use crate::types::Direction;

/// Source of ghost directions.
pub trait DirectionPicker {
    fn pick(&mut self) -> Direction;
}

impl<R: Rng> DirectionPicker for R {
    fn pick(&mut self) -> Direction {
        Direction::ALL[self.random_range(0..Direction::ALL.len())]
    }
}

/// Replays a fixed direction script, cycling when it runs out.
///
/// An empty script always yields [`Direction::Up`].
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<Direction>,
    next: usize,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            next: 0,
        }
    }

    /// Always pick the same direction.
    pub fn constant(dir: Direction) -> Self {
        Self::new([dir])
    }
}

impl DirectionPicker for ScriptedPicker {
    fn pick(&mut self) -> Direction {
        if self.script.is_empty() {
            return Direction::Up;
        }
        let dir = self.script[self.next % self.script.len()];
        self.next = (self.next + 1) % self.script.len();
        dir
    }
}
