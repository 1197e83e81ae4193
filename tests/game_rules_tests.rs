//! Simulation step tests: scoring, collisions, termination

use maze_chase::core::{GameState, Maze, ScriptedPicker};
use maze_chase::types::{CellKind, Command, Direction, Outcome, Position, STARTING_LIVES};

fn sample() -> GameState {
    GameState::new(Maze::parse(&["#####", "#P.X#", "#.G.#", "#####"]).unwrap())
}

/// Ghost at (2,2) has a wall underneath; DOWN keeps it in place.
fn parked() -> ScriptedPicker {
    ScriptedPicker::constant(Direction::Down)
}

#[test]
fn test_right_right_eats_dot_then_pill() {
    let mut state = sample();
    let mut ghosts = parked();
    let dots_before = state.dots_left();

    state.step(Command::Right, &mut ghosts);
    state.step(Command::Right, &mut ghosts);

    assert_eq!(state.score(), 11);
    assert_eq!(state.dots_left(), dots_before - 1);
    assert_eq!(state.player().pos, Position::new(1, 3));
    assert_eq!(state.grid().get(Position::new(1, 2)), Some(CellKind::Empty));
    assert_eq!(state.grid().get(Position::new(1, 3)), Some(CellKind::Empty));
}

#[test]
fn test_score_never_decreases_within_a_life() {
    let mut state = sample();
    let mut ghosts = parked();
    let mut last = 0;
    for cmd in [Command::Right, Command::Right, Command::Left, Command::Left, Command::Down] {
        state.step(cmd, &mut ghosts);
        assert!(state.score() >= last);
        last = state.score();
    }
}

#[test]
fn test_collision_respawns_player() {
    let mut state = sample();
    state.player_mut().pos = Position::new(2, 3);

    // Ghost steps right from (2,2) onto the player.
    let report = state.step(Command::None, &mut ScriptedPicker::constant(Direction::Right));

    assert!(report.caught);
    assert_eq!(state.lives(), STARTING_LIVES - 1);
    assert_eq!(state.player().pos, state.player().start);
    assert_eq!(state.ghosts()[0].pos, Position::new(2, 3));
}

#[test]
fn test_loss_when_lives_run_out_with_dots_left() {
    let mut state = sample();
    state.set_lives(1);
    state.player_mut().pos = Position::new(2, 3);

    let report = state.step(Command::None, &mut ScriptedPicker::constant(Direction::Right));

    assert_eq!(report.outcome, Some(Outcome::Lost));
    assert!(state.dots_left() > 0);
    assert_eq!(report.death_at, Some(Position::new(2, 3)));
}

#[test]
fn test_win_when_dots_run_out_with_lives_left() {
    let mut state = sample();
    let mut ghosts = parked();

    // Eat (1,2), walk back, eat (2,1).
    for cmd in [Command::Right, Command::Left, Command::Down] {
        assert!(state.step(cmd, &mut ghosts).outcome.is_none());
    }
    assert_eq!(state.dots_left(), 1);

    state.player_mut().pos = Position::new(1, 3);
    let report = state.step(Command::Down, &mut ghosts);

    assert_eq!(report.outcome, Some(Outcome::Won));
    assert_eq!(state.lives(), STARTING_LIVES);
}

#[test]
fn test_escape_forces_zero_lives() {
    let mut state = sample();
    let report = state.step(Command::Escape, &mut parked());
    assert_eq!(state.lives(), 0);
    assert_eq!(report.outcome, Some(Outcome::Lost));
}

#[test]
fn test_ghost_into_wall_stays_in_bounds() {
    let mut state = sample();
    for dir in Direction::ALL {
        let before = state.ghosts()[0].pos;
        state.step(Command::None, &mut ScriptedPicker::constant(dir));
        let after = state.ghosts()[0].pos;
        assert!(after.row < state.grid().height());
        assert!(after.col < state.grid().width());
        assert!(state.grid().get(after) != Some(CellKind::Wall));
        if dir == Direction::Down {
            assert_eq!(after, before);
        }
        state.ghosts_mut()[0].pos = Position::new(2, 2);
    }
}

#[test]
fn test_ghosts_do_not_eat() {
    let mut state = sample();
    state.step(Command::None, &mut ScriptedPicker::constant(Direction::Left));
    assert_eq!(state.ghosts()[0].pos, Position::new(2, 1));
    assert_eq!(state.grid().get(Position::new(2, 1)), Some(CellKind::Dot));
    assert_eq!(state.score(), 0);
}
