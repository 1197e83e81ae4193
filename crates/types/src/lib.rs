//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input decoding).
//!
//! # Maze Characters
//!
//! | Char | Meaning |
//! |------|---------|
//! | `#` | Wall |
//! | `.` | Dot (1 point, counts towards the win) |
//! | `X` | Pill (10 points) |
//! | `P` | Player start (cell becomes empty) |
//! | `G` | Ghost start (cell becomes empty) |
//! | other | Empty |
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Fixed interval between simulation steps |
//! | `DEATH_PAUSE_MS` | 1000 | Freeze after the player is caught |
//!
//! # Examples
//!
//! ```
//! use maze_chase_types::{CellKind, Direction, Position};
//!
//! assert_eq!(CellKind::from_char('#'), CellKind::Wall);
//! assert_eq!(CellKind::from_char('P'), CellKind::Empty);
//!
//! let p = Position::new(1, 2);
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//! assert_eq!(p.row, 1);
//! ```

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u64 = 200;

/// How long the game freezes after the player loses a life.
pub const DEATH_PAUSE_MS: u64 = 1000;

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 3;

/// Points for eating a dot.
pub const DOT_SCORE: u32 = 1;

/// Points for eating a pill.
pub const PILL_SCORE: u32 = 10;

/// Escape byte (`0x1b`), both the quit key and the arrow-key prefix.
pub const ESC: u8 = 0x1b;


/// Kind of a single maze cell.
///
/// Walls never change. Dots and pills turn into `Empty` once the player
/// walks over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    Wall,
    Dot,
    Pill,
    #[default]
    Empty,
}

impl CellKind {
    /// Map a maze character to the cell it leaves behind.
    ///
    /// Start markers (`P`, `G`) are handled by the loader; the cell itself is empty.
    pub fn from_char(ch: char) -> Self {
        match ch {
            '#' => CellKind::Wall,
            '.' => CellKind::Dot,
            'X' => CellKind::Pill,
            _ => CellKind::Empty,
        }
    }

    /// True for dots and pills.
    pub fn is_consumable(&self) -> bool {
        matches!(self, CellKind::Dot | CellKind::Pill)
    }
}

/// A `(row, col)` pair referencing a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order used for uniform random choice.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// `(d_row, d_col)` unit step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Abstract command decoded from keyboard input.
///
/// `None` is the "nothing pressed" value; the simulation treats it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    /// Quit: forces lives to zero at the end of the tick.
    Escape,
    #[default]
    None,
}

impl Command {
    /// The movement direction carried by this command, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            Command::Escape | Command::None => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "UP",
            Command::Down => "DOWN",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::Escape => "ESC",
            Command::None => "NONE",
        }
    }
}

impl From<Direction> for Command {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Command::Up,
            Direction::Down => Command::Down,
            Direction::Left => Command::Left,
            Direction::Right => Command::Right,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every dot was eaten.
    Won,
    /// Lives ran out (caught, or the player quit).
    Lost,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "You won!",
            Outcome::Lost => "Game over!",
        }
    }
}
