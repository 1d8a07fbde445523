//! Game session tests - the state machine seen from outside

use grid_puzzle::core::{FallingBlock, GameSession, Grid, Play, SimpleRng, TileMerge};
use grid_puzzle::types::{Direction, Input, PieceKind, Status, Variant};

fn running(variant: Variant, seed: u32) -> GameSession {
    GameSession::new(variant, SimpleRng::new(seed)).step(Input::Restart)
}

fn tiles(rows: Vec<Vec<u32>>) -> GameSession {
    let game = TileMerge::from_board(Grid::from_rows(rows).unwrap());
    GameSession::from_play(Play::TileMerge(game), SimpleRng::new(11))
}

fn drop_until_game_over(mut session: GameSession) -> GameSession {
    for _ in 0..500 {
        if session.status() == Status::GameOver {
            break;
        }
        session = session.step(Input::HardDrop);
    }
    session
}

#[test]
fn test_same_seed_same_game() {
    let inputs = [
        Input::Move(Direction::Left),
        Input::RotateCw,
        Input::Tick,
        Input::HardDrop,
        Input::Move(Direction::Right),
        Input::Move(Direction::Down),
        Input::HardDrop,
    ];
    let mut a = running(Variant::FallingBlock, 99);
    let mut b = running(Variant::FallingBlock, 99);
    for input in inputs {
        a = a.step(input);
        b = b.step(input);
        assert_eq!(a, b);
    }

    let mut a = running(Variant::TileMerge, 99);
    let mut b = running(Variant::TileMerge, 99);
    for direction in Direction::ALL.iter().cycle().take(40) {
        a = a.step(Input::Move(*direction));
        b = b.step(Input::Move(*direction));
    }
    assert_eq!(a, b);
}

#[test]
fn test_step_does_not_touch_input_session() {
    let session = running(Variant::TileMerge, 3);
    let snapshot = session.clone();
    let _ = session.step(Input::Move(Direction::Left));
    let _ = session.step(Input::Restart);
    assert_eq!(session, snapshot);
}

#[test]
fn test_idle_waits_for_restart() {
    let idle = GameSession::new(Variant::FallingBlock, SimpleRng::new(1));
    assert_eq!(idle.step(Input::HardDrop).status(), Status::Idle);
    assert_eq!(idle.step(Input::Pause).status(), Status::Idle);
    assert_eq!(idle.step(Input::Restart).status(), Status::Running);
}

#[test]
fn test_hard_drop_pays_lock_bonus() {
    let session = running(Variant::FallingBlock, 5);
    let once = session.step(Input::HardDrop);
    assert_eq!(once.score(), 10);
    let twice = once.step(Input::HardDrop);
    assert_eq!(twice.score(), 20);
    assert_eq!(twice.best_score(), 20);
    assert_eq!(twice.falling_board().unwrap().count(Option::is_some), 8);
}

#[test]
fn test_up_rotates_falling_piece() {
    let session = running(Variant::FallingBlock, 5);
    assert_eq!(
        session.step(Input::Move(Direction::Up)),
        session.step(Input::RotateCw)
    );
}

#[test]
fn test_blocked_move_is_ignored() {
    let mut session = running(Variant::FallingBlock, 5);
    for _ in 0..10 {
        session = session.step(Input::Move(Direction::Left));
    }
    assert_eq!(session.active_piece().unwrap().x, 0);
    assert_eq!(session.step(Input::Move(Direction::Left)), session);
}

#[test]
fn test_tick_moves_piece_down() {
    let session = running(Variant::FallingBlock, 5);
    let y = session.active_piece().unwrap().y;
    let ticked = session.step(Input::Tick);
    assert_eq!(ticked.active_piece().unwrap().y, y + 1);
    assert_eq!(ticked, session.step(Input::Move(Direction::Down)));
}

#[test]
fn test_line_clear_through_session() {
    // Bottom row full except where a flat I lands.
    let mut board = Grid::new(10, 20);
    for x in [0, 1, 2, 7, 8, 9] {
        board = board.set(x, 19, Some(grid_puzzle::types::PieceColor::Red)).unwrap();
    }
    let piece = grid_puzzle::core::spawn::spawn_kind(&board, PieceKind::I);
    let game = FallingBlock::from_parts(board, Some(piece), 0);
    let session = GameSession::from_play(Play::FallingBlock(game), SimpleRng::new(3));

    let next = session.step(Input::HardDrop);
    assert_eq!(next.score(), 110);
    assert_eq!(next.lines_cleared(), 1);
    assert_eq!(next.gravity_interval_ms(), Some(490));
    assert_eq!(next.falling_board().unwrap().count(Option::is_some), 0);
}

#[test]
fn test_game_over_is_terminal_until_restart() {
    let session = drop_until_game_over(running(Variant::FallingBlock, 21));
    assert_eq!(session.status(), Status::GameOver);
    assert!(session.active_piece().is_none());

    for input in [
        Input::Tick,
        Input::HardDrop,
        Input::RotateCw,
        Input::Pause,
        Input::Move(Direction::Left),
    ] {
        assert_eq!(session.step(input), session);
    }

    let best = session.best_score();
    assert!(best > 0);
    let restarted = session.step(Input::Restart);
    assert_eq!(restarted.status(), Status::Running);
    assert_eq!(restarted.score(), 0);
    assert_eq!(restarted.best_score(), best);
    assert_eq!(restarted.lines_cleared(), 0);
    assert_eq!(restarted.falling_board().unwrap().count(Option::is_some), 0);
}

#[test]
fn test_restart_continues_rng_stream() {
    let first = running(Variant::TileMerge, 8);
    let second = first.step(Input::Restart);
    assert_ne!(first.rng(), second.rng());
    assert_eq!(second.tile_board().unwrap().count(|&v| v != 0), 2);
}

#[test]
fn test_tick_is_noop_for_tiles() {
    let session = running(Variant::TileMerge, 4);
    assert_eq!(session.step(Input::Tick), session);
    assert_eq!(session.step(Input::HardDrop), session);
    assert_eq!(session.step(Input::RotateCw), session);
    assert_eq!(session.gravity_interval_ms(), None);
}

#[test]
fn test_tile_move_scores_merges() {
    let session = tiles(vec![
        vec![2, 2, 4, 4],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let next = session.step(Input::Move(Direction::Left));
    assert_eq!(next.score(), 12);
    assert_eq!(next.tile_board().unwrap().row(0).unwrap()[..2], [4, 8]);
    assert_eq!(next.tile_board().unwrap().count(|&v| v != 0), 3);
}

#[test]
fn test_won_is_reported_once() {
    let session = tiles(vec![
        vec![1024, 1024, 0, 0],
        vec![1024, 1024, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let won = session.step(Input::Move(Direction::Left));
    assert_eq!(won.status(), Status::Won);
    assert_eq!(won.score(), 4096);
    assert_eq!(won.max_tile(), 2048);

    // Pausing and resuming from Won goes back to Running.
    let paused = won.step(Input::Pause);
    assert_eq!(paused.status(), Status::Paused);

    let resumed = won.step(Input::Move(Direction::Right));
    assert_eq!(resumed.status(), Status::Running);
    let again = resumed.step(Input::Move(Direction::Left));
    assert_ne!(again.status(), Status::Won);
}

#[test]
fn test_stuck_board_ends_game() {
    // Only a right slide of the last row is possible; the spawn fills the gap.
    let session = tiles(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![8, 16, 32, 0],
    ]);
    let next = session.step(Input::Move(Direction::Right));
    let board = next.tile_board().unwrap();
    assert_eq!(board.row(3).unwrap()[1..], [8, 16, 32]);
    // Column 0 now reads 2,4,2,x with x in {2,4}: x == 2 would stack on a 2.
    let x = board.get(0, 3).unwrap();
    let expected = if x == 2 { Status::Running } else { Status::GameOver };
    assert_eq!(next.status(), expected);
}
