//! Fixed-cadence game loop.
//!
//! Each iteration: poll input (never waits) -> step the simulation -> redraw
//! -> stop if the game is over -> sleep out the rest of the tick. A catch that
//! costs a life freezes the frame for the death pause before play resumes, and
//! the final frame is held for the same pause.
//!
//! Input and output sit behind [`CommandSource`] and [`Screen`], so the loop
//! runs headless in tests with zero-length ticks.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{DirectionPicker, GameState};
use crate::input::InputChannel;
use crate::term::TerminalRenderer;
use crate::types::{Command, Outcome, Position, DEATH_PAUSE_MS, TICK_MS};

/// Non-blocking source of player commands.
pub trait CommandSource {
    /// The pending command, if one arrived since the last poll.
    fn poll(&mut self) -> Option<Command>;
}

impl CommandSource for InputChannel {
    fn poll(&mut self) -> Option<Command> {
        self.try_recv()
    }
}

/// Replays queued commands, one per poll.
impl CommandSource for VecDeque<Command> {
    fn poll(&mut self) -> Option<Command> {
        self.pop_front()
    }
}

/// Where frames go.
pub trait Screen {
    fn present(&mut self, state: &GameState, death_at: Option<Position>) -> Result<()>;
}

impl Screen for TerminalRenderer {
    fn present(&mut self, state: &GameState, death_at: Option<Position>) -> Result<()> {
        self.draw(state, death_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    pub tick: Duration,
    pub death_pause: Duration,
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            death_pause: Duration::from_millis(DEATH_PAUSE_MS),
        }
    }
}

impl LoopTiming {
    /// No sleeping at all (headless runs, tests).
    pub fn instant() -> Self {
        Self {
            tick: Duration::ZERO,
            death_pause: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameLoop {
    timing: LoopTiming,
    ticks: u64,
}

impl GameLoop {
    pub fn new(timing: LoopTiming) -> Self {
        Self { timing, ticks: 0 }
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run until the game is won or lost.
    ///
    /// The frame of the final tick already shows the end state (death glyph
    /// on a loss); no further frame is drawn after it. That frame stays up for
    /// one death pause before `run` returns.
    pub fn run<I, S, P>(
        &mut self,
        state: &mut GameState,
        input: &mut I,
        screen: &mut S,
        picker: &mut P,
    ) -> Result<Outcome>
    where
        I: CommandSource + ?Sized,
        S: Screen + ?Sized,
        P: DirectionPicker + ?Sized,
    {
        loop {
            let started = Instant::now();

            let cmd = input.poll().unwrap_or(Command::None);
            let report = state.step(cmd, picker);
            self.ticks += 1;

            screen.present(state, report.death_at)?;

            if report.needs_death_pause() {
                thread::sleep(self.timing.death_pause);
            }

            if let Some(outcome) = report.outcome {
                log::info!(
                    "{} score={} lives={} ticks={}",
                    outcome.as_str(),
                    state.score(),
                    state.lives(),
                    self.ticks
                );
                // Hold the end screen before the caller tears the terminal down.
                thread::sleep(self.timing.death_pause);
                return Ok(outcome);
            }

            let remaining = self.timing.tick.saturating_sub(started.elapsed());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
    }
}
