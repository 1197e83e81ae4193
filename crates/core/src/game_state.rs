//! Game state module - owns the whole world and advances it one tick at a time
//!
//! One call to [`GameState::step`] runs the fixed tick sequence:
//!
//! 1. Move the player per the polled command (ESCAPE forces lives to zero instead)
//! 2. Eat the dot or pill under the player
//! 3. Move every ghost in a random direction
//! 4. Resolve the first ghost sharing the player's cell
//! 5. Evaluate win/loss
//!
//! The state is touched only by the game loop; nothing here blocks or sleeps.
//! The caller decides what to do with the [`TickReport`] (death pause, final frame).

use crate::actor::Actor;
use crate::grid::{Grid, Maze};
use crate::rng::DirectionPicker;
use crate::types::*;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// A ghost caught the player this tick.
    pub caught: bool,
    /// The caught player had lives left and went back to the start.
    pub respawned: bool,
    /// Where to draw the death glyph this frame, if anywhere.
    pub death_at: Option<Position>,
    /// Set once the game is over.
    pub outcome: Option<Outcome>,
}

impl TickReport {
    /// The death glyph stays up for the death pause before play resumes.
    ///
    /// Holds even when the same tick also wins the game.
    pub fn needs_death_pause(&self) -> bool {
        self.respawned
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    player: Actor,
    ghosts: Vec<Actor>,
    score: u32,
    lives: u32,
    dots_left: u32,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create a new game from a parsed maze.
    pub fn new(maze: Maze) -> Self {
        let Maze {
            grid,
            player_start,
            ghost_starts,
            dot_count,
        } = maze;

        Self {
            grid,
            player: Actor::new(player_start),
            ghosts: ghost_starts.into_iter().map(Actor::new).collect(),
            score: 0,
            lives: STARTING_LIVES,
            dots_left: dot_count,
            outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn ghosts(&self) -> &[Actor] {
        &self.ghosts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn dots_left(&self) -> u32 {
        self.dots_left
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    // Scripted setups (tests, benches, replays).

    pub fn player_mut(&mut self) -> &mut Actor {
        &mut self.player
    }

    pub fn ghosts_mut(&mut self) -> &mut [Actor] {
        &mut self.ghosts
    }

    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    /// Advance the world by one tick.
    ///
    /// A finished game is frozen: further calls change nothing and report the
    /// same outcome.
    pub fn step<P>(&mut self, cmd: Command, picker: &mut P) -> TickReport
    where
        P: DirectionPicker + ?Sized,
    {
        if let Some(outcome) = self.outcome {
            return TickReport {
                outcome: Some(outcome),
                ..TickReport::default()
            };
        }

        match cmd {
            Command::Escape => self.lives = 0,
            _ => {
                if let Some(dir) = cmd.direction() {
                    self.move_player(dir);
                }
            }
        }

        self.move_ghosts(picker);

        let caught_at = self.resolve_collision();
        let respawned = caught_at.is_some() && self.lives > 0;
        let outcome = self.evaluate();
        self.outcome = outcome;

        let death_at = match (caught_at, outcome) {
            (Some(at), _) => Some(at),
            (None, Some(Outcome::Lost)) => Some(self.player.pos),
            _ => None,
        };

        TickReport {
            caught: caught_at.is_some(),
            respawned,
            death_at,
            outcome,
        }
    }

    /// Move the player one cell and eat whatever is there.
    pub fn move_player(&mut self, dir: Direction) {
        self.player.pos = self.grid.step(self.player.pos, dir);

        match self.grid.take_consumable(self.player.pos) {
            Some(CellKind::Dot) => {
                self.dots_left = self.dots_left.saturating_sub(1);
                self.score += DOT_SCORE;
            }
            Some(CellKind::Pill) => self.score += PILL_SCORE,
            _ => {}
        }
    }

    /// Move every ghost one cell in a picked direction, in spawn order.
    pub fn move_ghosts<P>(&mut self, picker: &mut P)
    where
        P: DirectionPicker + ?Sized,
    {
        for ghost in &mut self.ghosts {
            let dir = picker.pick();
            ghost.pos = self.grid.step(ghost.pos, dir);
        }
    }

    /// Resolve the first ghost standing on the player.
    ///
    /// Costs one life; while lives remain the player goes back to the start.
    /// Returns where the player was caught.
    fn resolve_collision(&mut self) -> Option<Position> {
        let at = self.player.pos;
        if !self.ghosts.iter().any(|g| g.pos == at) {
            return None;
        }

        self.lives = self.lives.saturating_sub(1);
        log::debug!("caught at {:?}, {} lives left", at, self.lives);
        if self.lives > 0 {
            self.player.respawn();
        }
        Some(at)
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.dots_left == 0 {
            Some(Outcome::Won)
        } else if self.lives == 0 {
            Some(Outcome::Lost)
        } else {
            None
        }
    }
}
