//! Command semantics tests - movement, rotation, hold, pacing, game over.

use blockfall::{Command, GameConfig, GameSession, Outcome, SequencePieces, ShapeKind};

fn scripted(config: GameConfig, kinds: Vec<ShapeKind>) -> GameSession {
    GameSession::with_source(config, Box::new(SequencePieces::new(kinds)))
        .expect("config must be valid")
}

fn small(rows: u16, cols: u16) -> GameConfig {
    GameConfig {
        rows,
        cols,
        ..GameConfig::default()
    }
}

#[test]
fn test_rejected_shift_changes_nothing() {
    let mut session = scripted(GameConfig::default(), vec![ShapeKind::O]);

    // O spawns at col 4; four steps reach the left wall
    for _ in 0..4 {
        assert_eq!(session.apply(Command::MoveLeft), Outcome::Moved);
    }
    let at_wall = session.active().expect("active piece");
    assert_eq!(at_wall.col, 0);

    // further shifts are rejected and leave the piece untouched
    assert_eq!(session.apply(Command::MoveLeft), Outcome::Rejected);
    assert_eq!(session.apply(Command::MoveLeft), Outcome::Rejected);
    assert_eq!(session.active(), Some(at_wall));
}

#[test]
fn test_rotation_reverts_against_the_right_wall() {
    let mut session = scripted(GameConfig::default(), vec![ShapeKind::I]);

    // stand the I upright, then push it flush against the right wall
    assert_eq!(session.apply(Command::Rotate), Outcome::Moved);
    for _ in 0..6 {
        assert_eq!(session.apply(Command::MoveRight), Outcome::Moved);
    }
    assert_eq!(session.apply(Command::MoveRight), Outcome::Rejected);

    // the horizontal state would reach past the wall, so the index reverts
    let before = session.active().expect("active piece");
    assert_eq!(before.rotation, 1);
    assert_eq!(before.col, 9);
    assert_eq!(session.apply(Command::Rotate), Outcome::Rejected);
    assert_eq!(session.active(), Some(before));
}

#[test]
fn test_gravity_waits_for_the_full_interval() {
    let mut session = scripted(GameConfig::default(), vec![ShapeKind::T]);
    assert_eq!(session.fall_interval_ms(), 100);

    // the accumulator has to pass the interval, not merely reach it
    assert_eq!(session.apply(Command::Tick(50)), Outcome::Ignored);
    assert_eq!(session.apply(Command::Tick(50)), Outcome::Ignored);
    assert_eq!(session.apply(Command::Tick(1)), Outcome::Moved);
    assert_eq!(session.active().map(|piece| piece.row), Some(1));

    // the accumulator resets after a step
    assert_eq!(session.apply(Command::Tick(100)), Outcome::Ignored);
    assert_eq!(session.apply(Command::Tick(1)), Outcome::Moved);
    assert_eq!(session.active().map(|piece| piece.row), Some(2));
}

#[test]
fn test_soft_drop_never_locks() {
    let mut session = scripted(small(4, 4), vec![ShapeKind::O]);

    assert_eq!(session.apply(Command::SoftDrop), Outcome::Moved);
    assert_eq!(session.apply(Command::SoftDrop), Outcome::Moved);
    // resting on the floor: the step is refused, the piece stays live
    assert_eq!(session.apply(Command::SoftDrop), Outcome::Rejected);
    assert_eq!(session.apply(Command::SoftDrop), Outcome::Rejected);

    let piece = session.active().expect("still falling");
    assert_eq!(piece.row, 2);
    assert!(!session.game_over());
}

#[test]
fn test_hold_stores_then_swaps() {
    let mut session = scripted(
        GameConfig::default(),
        vec![
            ShapeKind::T,
            ShapeKind::S,
            ShapeKind::Z,
            ShapeKind::L,
            ShapeKind::J,
        ],
    );

    // empty slot: current goes to hold, the queued piece takes over
    assert_eq!(session.apply(Command::Hold), Outcome::Moved);
    assert_eq!(
        session.held_piece().map(|piece| piece.kind),
        Some(ShapeKind::T)
    );
    assert_eq!(session.active().map(|piece| piece.kind), Some(ShapeKind::S));
    assert_eq!(session.next_kind(), ShapeKind::Z);
    assert!(!session.can_hold());

    // one hold per spawn
    assert_eq!(session.apply(Command::Hold), Outcome::Rejected);

    // locking re-arms the hold
    assert_eq!(
        session.apply(Command::HardDrop),
        Outcome::Locked { lines_cleared: 0 }
    );
    assert!(session.can_hold());
    assert_eq!(session.active().map(|piece| piece.kind), Some(ShapeKind::Z));

    // occupied slot: kinds swap
    assert_eq!(session.apply(Command::Hold), Outcome::Moved);
    assert_eq!(session.active().map(|piece| piece.kind), Some(ShapeKind::T));
    assert_eq!(
        session.held_piece().map(|piece| piece.kind),
        Some(ShapeKind::Z)
    );
    assert!(!session.can_hold());
}

#[test]
fn test_hold_swap_recenters_at_the_held_rotation() {
    let mut session = scripted(
        GameConfig::default(),
        vec![ShapeKind::I, ShapeKind::O, ShapeKind::T],
    );

    // rotate the I upright, then stash it
    assert_eq!(session.apply(Command::Rotate), Outcome::Moved);
    assert_eq!(session.apply(Command::Hold), Outcome::Moved);
    assert_eq!(session.active().map(|piece| piece.kind), Some(ShapeKind::O));

    // settle the O so holding is allowed again
    assert_eq!(
        session.apply(Command::HardDrop),
        Outcome::Locked { lines_cleared: 0 }
    );

    // the I comes back upright, recentered for its one-column width
    assert_eq!(session.apply(Command::Hold), Outcome::Moved);
    let piece = session.active().expect("swapped-in piece");
    assert_eq!(piece.kind, ShapeKind::I);
    assert_eq!(piece.rotation, 1);
    assert_eq!(piece.col, 5);
    assert_eq!(piece.row, 0);
}

#[test]
fn test_blocked_spawn_ends_the_game_without_locking() {
    let mut session = scripted(small(4, 4), vec![ShapeKind::O]);

    // first O settles on the floor
    assert_eq!(
        session.apply(Command::HardDrop),
        Outcome::Locked { lines_cleared: 0 }
    );
    // second O stacks on top of it, and the third cannot spawn
    assert_eq!(session.apply(Command::HardDrop), Outcome::GameOver);

    assert!(session.game_over());
    assert_eq!(session.active(), None);
    // exactly the two locked pieces are on the board
    let occupied = session
        .board()
        .cells()
        .iter()
        .filter(|cell| cell.is_some())
        .count();
    assert_eq!(occupied, 8);

    // terminal state: commands are ignored and nothing moves
    let before = session.snapshot();
    assert_eq!(session.apply(Command::HardDrop), Outcome::Ignored);
    assert_eq!(session.apply(Command::Tick(10_000)), Outcome::Ignored);
    assert_eq!(session.snapshot(), before);
}
