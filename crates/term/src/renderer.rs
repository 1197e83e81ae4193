//! TerminalRenderer: owns the terminal mode and flushes frames to stdout.
//!
//! Entering switches the terminal to raw mode on the alternate screen; leaving
//! undoes it. Leaving also happens on drop, so every exit path (including a
//! panic unwinding through the game loop) gives the terminal back.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::game_view::GameView;
use crate::types::Position;

/// Raw mode could not be switched on or off.
#[derive(Debug, thiserror::Error)]
#[error("failed to switch terminal mode: {0}")]
pub struct TerminalModeError(#[from] io::Error);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new(view: GameView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            buf: Vec::with_capacity(16 * 1024),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<(), TerminalModeError> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<(), TerminalModeError> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole screen.
    pub fn draw(&mut self, state: &GameState, death_at: Option<Position>) -> Result<()> {
        self.buf.clear();
        self.view.encode_into(state, death_at, &mut self.buf)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("{e}");
        }
    }
}
