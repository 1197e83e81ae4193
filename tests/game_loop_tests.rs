//! Integration tests for the main game loop

use std::collections::VecDeque;

use anyhow::Result;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use maze_chase::core::{GameState, Maze, ScriptedPicker};
use maze_chase::engine::{GameLoop, LoopTiming, Screen};
use maze_chase::types::{Command, Direction, Outcome, Position, STARTING_LIVES};

/// Records what each frame showed.
#[derive(Default)]
struct Recorder {
    frames: Vec<Frame>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    player: Position,
    lives: u32,
    score: u32,
    death_at: Option<Position>,
}

impl Screen for Recorder {
    fn present(&mut self, state: &GameState, death_at: Option<Position>) -> Result<()> {
        self.frames.push(Frame {
            player: state.player().pos,
            lives: state.lives(),
            score: state.score(),
            death_at,
        });
        Ok(())
    }
}

fn run(
    lines: &[&str],
    input: impl IntoIterator<Item = Command>,
    picker: &mut ScriptedPicker,
) -> (Outcome, GameLoop, Recorder, GameState) {
    let mut state = GameState::new(Maze::parse(lines).unwrap());
    let mut input: VecDeque<Command> = input.into_iter().collect();
    let mut screen = Recorder::default();
    let mut game = GameLoop::new(LoopTiming::instant());
    let outcome = game.run(&mut state, &mut input, &mut screen, picker).unwrap();
    (outcome, game, screen, state)
}

#[test]
fn test_escape_renders_exactly_one_more_frame() {
    let (outcome, game, screen, state) = run(
        &["#####", "#P.X#", "#.G.#", "#####"],
        [Command::Right, Command::Escape],
        &mut ScriptedPicker::constant(Direction::Down),
    );

    assert_eq!(outcome, Outcome::Lost);
    assert_eq!(game.ticks(), 2);
    assert_eq!(screen.frames.len(), 2);
    assert_eq!(state.lives(), 0);

    let last = screen.frames.last().unwrap();
    assert_eq!(last.lives, 0);
    assert_eq!(last.score, 1);
    assert_eq!(last.death_at, Some(Position::new(1, 2)));
    assert_eq!(screen.frames[0].death_at, None);
}

#[test]
fn test_ghost_camping_the_spawn_takes_every_life() {
    // The dot is unreachable; only the ghost can end this game.
    let (outcome, game, screen, _) = run(
        &["#####", "#PG#.", "#####"],
        Vec::<Command>::new(),
        &mut ScriptedPicker::constant(Direction::Left),
    );

    assert_eq!(outcome, Outcome::Lost);
    assert_eq!(game.ticks(), STARTING_LIVES as u64);

    let lives: Vec<u32> = screen.frames.iter().map(|f| f.lives).collect();
    assert_eq!(lives, vec![2, 1, 0]);
    assert!(screen
        .frames
        .iter()
        .all(|f| f.death_at == Some(Position::new(1, 1))));
}

#[test]
fn test_win_ends_loop() {
    let (outcome, game, screen, state) = run(
        &["P..#"],
        [Command::Right, Command::Right],
        &mut ScriptedPicker::constant(Direction::Up),
    );

    assert_eq!(outcome, Outcome::Won);
    assert_eq!(game.ticks(), 2);
    assert_eq!(state.score(), 2);
    assert_eq!(screen.frames.last().unwrap().death_at, None);
}

#[test]
fn test_no_input_means_no_player_movement() {
    let (_, _, screen, _) = run(
        &["#####", "#P.X#", "#.G.#", "#####"],
        [Command::None, Command::None, Command::Escape],
        &mut ScriptedPicker::constant(Direction::Down),
    );

    assert!(screen
        .frames
        .iter()
        .all(|f| f.player == Position::new(1, 1)));
}

#[test]
fn test_same_seed_same_game() {
    let lines = [
        "#########",
        "#P......#",
        "#.##.##.#",
        "#...G...#",
        "#.##.##.#",
        "#...G...#",
        "#########",
    ];

    let play = |seed: u64| {
        let mut state = GameState::new(Maze::parse(&lines).unwrap());
        let mut input: VecDeque<Command> = std::iter::repeat(Command::Right)
            .take(5)
            .chain(std::iter::repeat(Command::Down).take(5))
            .chain([Command::Escape])
            .collect();
        let mut screen = Recorder::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        GameLoop::new(LoopTiming::instant())
            .run(&mut state, &mut input, &mut screen, &mut rng)
            .unwrap();
        (screen.frames, state.ghosts().to_vec())
    };

    assert_eq!(play(42), play(42));
}
