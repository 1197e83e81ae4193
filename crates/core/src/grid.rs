//! Maze grid - loading and the shared movement rule
//!
//! The grid is built once from the maze text and never resized. Only
//! consumable cells change afterwards (a dot or pill becomes empty when eaten).
//!
//! Rows shorter than the widest row are padded with [`CellKind::Empty`], so
//! every row has the same width and both wrap moduli are uniform.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{CellKind, Direction, Position};

/// Errors raised while turning maze text into a [`Maze`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read maze file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("maze has no cells")]
    Empty,
    #[error("maze has no player start marker 'P'")]
    MissingPlayer,
    #[error("maze has more than one player start marker (at {first:?} and {second:?})")]
    DuplicatePlayer { first: Position, second: Position },
}

/// Rectangular grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a grid filled with one cell kind.
    pub fn filled(width: usize, height: usize, kind: CellKind) -> Self {
        Self {
            width,
            height,
            cells: vec![kind; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.height || pos.col >= self.width {
            return None;
        }
        Some(pos.row * self.width + pos.col)
    }

    /// Get the cell at `pos` (None if out of bounds).
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        self.idx(pos).map(|i| self.cells[i])
    }

    /// Set the cell at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, kind: CellKind) -> bool {
        match self.idx(pos) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellKind::Wall)
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> &[CellKind] {
        if row >= self.height {
            return &[];
        }
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Apply the movement rule shared by the player and the ghosts.
    ///
    /// The step wraps around the edges first; if the destination is a wall the
    /// move is rejected and `from` is returned unchanged.
    pub fn step(&self, from: Position, dir: Direction) -> Position {
        if self.width == 0 || self.height == 0 {
            return from;
        }

        let (dr, dc) = dir.delta();
        let to = Position {
            row: wrap(from.row, dr, self.height),
            col: wrap(from.col, dc, self.width),
        };

        if self.is_wall(to) {
            from
        } else {
            to
        }
    }

    /// Eat whatever consumable sits at `pos`.
    ///
    /// Returns the eaten kind (the cell is now empty), or None if there was
    /// nothing to eat.
    pub fn take_consumable(&mut self, pos: Position) -> Option<CellKind> {
        let kind = self.get(pos)?;
        if !kind.is_consumable() {
            return None;
        }
        self.set(pos, CellKind::Empty);
        Some(kind)
    }
}

fn wrap(v: usize, delta: isize, modulus: usize) -> usize {
    (v as isize + delta).rem_euclid(modulus as isize) as usize
}

/// A parsed maze: the grid plus the spawn points found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub player_start: Position,
    /// Ghost spawn points in row-major scan order.
    pub ghost_starts: Vec<Position>,
    /// Number of `.` cells; eating all of them wins the game.
    pub dot_count: u32,
}

impl Maze {
    /// Read and parse a maze file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lines: Vec<&str> = text.lines().collect();
        Self::parse(&lines)
    }

    /// Parse maze rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_chase_core::Maze;
    /// use maze_chase_core::types::Position;
    ///
    /// let maze = Maze::parse(&["#####", "#P.G#", "#####"]).unwrap();
    /// assert_eq!(maze.player_start, Position::new(1, 1));
    /// assert_eq!(maze.ghost_starts, vec![Position::new(1, 3)]);
    /// assert_eq!(maze.dot_count, 1);
    /// ```
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, LoadError> {
        let height = lines.len();
        let width = lines
            .iter()
            .map(|l| l.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(LoadError::Empty);
        }

        let mut grid = Grid::filled(width, height, CellKind::Empty);
        let mut player_start: Option<Position> = None;
        let mut ghost_starts = Vec::new();
        let mut dot_count = 0u32;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                let pos = Position::new(row, col);
                match ch {
                    'P' => {
                        if let Some(first) = player_start {
                            return Err(LoadError::DuplicatePlayer { first, second: pos });
                        }
                        player_start = Some(pos);
                    }
                    'G' => ghost_starts.push(pos),
                    '.' => dot_count += 1,
                    _ => {}
                }
                grid.set(pos, CellKind::from_char(ch));
            }
        }

        let player_start = player_start.ok_or(LoadError::MissingPlayer)?;

        Ok(Self {
            grid,
            player_start,
            ghost_starts,
            dot_count,
        })
    }
}
