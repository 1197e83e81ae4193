//! Terminal maze-chase runner (default binary).
//!
//! Loads the maze and glyphs, switches the terminal to raw mode, and runs the
//! fixed-tick game loop until the player wins, loses or presses ESC.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use maze_chase::core::{GameState, Maze};
use maze_chase::engine::{GameLoop, LoopTiming};
use maze_chase::input::InputChannel;
use maze_chase::term::{GameView, GlyphConfig, TerminalRenderer};

/// Eat every dot in the maze while the ghosts wander around.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Maze text file.
    #[arg(long = "maze-file", value_name = "PATH", default_value = "maze.txt")]
    maze_file: PathBuf,
    /// Glyph configuration (JSON).
    #[arg(long = "config-file", value_name = "PATH", default_value = "config_emoji.json")]
    config_file: PathBuf,
    /// Seed for ghost movement; random when omitted.
    #[arg(long, value_name = "U64")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let maze = match Maze::load(&cli.maze_file) {
        Ok(maze) => maze,
        Err(e) => {
            log::error!("{e}");
            return Ok(());
        }
    };
    let glyphs = GlyphConfig::load_or_default(&cli.config_file);

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("ghost seed: {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut state = GameState::new(maze);
    let mut term = TerminalRenderer::new(GameView::new(glyphs));
    term.enter()?;

    let result = run(&mut state, &mut term, &mut rng);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::error!("{e}");
    }
    let outcome = result?;
    println!("{} Score: {}", outcome.as_str(), state.score());
    Ok(())
}

fn run(
    state: &mut GameState,
    term: &mut TerminalRenderer,
    rng: &mut Pcg32,
) -> Result<maze_chase::types::Outcome> {
    let mut input = InputChannel::from_stdin()?;
    GameLoop::new(LoopTiming::default()).run(state, &mut input, term, rng)
}
