//! GameView: encodes a full-screen frame of the game as terminal commands.
//!
//! This module is pure (no I/O). Frames are built into a byte buffer that the
//! [`crate::renderer::TerminalRenderer`] flushes, so they can be unit-tested.
//!
//! Layout: the maze starts at the top-left corner, one grid column per
//! `cell_width` terminal columns. The status line sits one blank row below it.

use anyhow::Result;
use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::core::GameState;
use crate::glyphs::GlyphConfig;
use crate::types::Position;

/// Maps a [`GameState`] onto the screen.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    glyphs: GlyphConfig,
}

impl GameView {
    pub fn new(glyphs: GlyphConfig) -> Self {
        Self { glyphs }
    }

    /// Screen column and row of a grid cell (0-based).
    pub fn screen_pos(&self, pos: Position) -> (u16, u16) {
        let col = pos.col.saturating_mul(self.glyphs.cell_width() as usize);
        (clamp_u16(col), clamp_u16(pos.row))
    }

    /// Row of the status line.
    pub fn hud_row(&self, state: &GameState) -> u16 {
        clamp_u16(state.grid().height() + 1)
    }

    pub fn hud_text(&self, state: &GameState) -> String {
        format!(
            "Score: {}    Lives: {}",
            state.score(),
            self.glyphs.lives_text(state.lives())
        )
    }

    /// Encode a full redraw into `out`.
    ///
    /// While `death_at` is set the player glyph is hidden and the death glyph
    /// is drawn on top of everything else.
    pub fn encode_into(
        &self,
        state: &GameState,
        death_at: Option<Position>,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        out.queue(terminal::Clear(ClearType::All))?;

        for (row, cells) in state.grid().rows().enumerate() {
            out.queue(cursor::MoveTo(0, clamp_u16(row)))?;
            for &cell in cells {
                out.queue(Print(self.glyphs.for_cell(cell)))?;
            }
        }

        if death_at.is_none() {
            self.put_at(out, state.player().pos, &self.glyphs.player)?;
        }
        for ghost in state.ghosts() {
            self.put_at(out, ghost.pos, &self.glyphs.ghost)?;
        }
        if let Some(at) = death_at {
            self.put_at(out, at, &self.glyphs.death)?;
        }

        out.queue(cursor::MoveTo(0, self.hud_row(state)))?;
        out.queue(Print(self.hud_text(state)))?;
        Ok(())
    }

    fn put_at(&self, out: &mut Vec<u8>, pos: Position, glyph: &str) -> Result<()> {
        let (x, y) = self.screen_pos(pos);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(Print(glyph))?;
        Ok(())
    }
}

fn clamp_u16(v: usize) -> u16 {
    v.min(u16::MAX as usize) as u16
}
