//! Session driver tests - queueing, gravity cadence and score persistence

use std::path::PathBuf;

use grid_puzzle::core::{ScoreStore, SimpleRng};
use grid_puzzle::engine::{DriverConfig, SessionDriver};
use grid_puzzle::store::{JsonFileStore, MemoryStore};
use grid_puzzle::types::{Direction, Input, Status, Variant, FALLING_BEST_KEY};

fn temp_store(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("grid-puzzle-driver-{}-{}.json", name, std::process::id()))
}

#[test]
fn test_driver_matches_direct_stepping() {
    let inputs = [
        Input::Restart,
        Input::Move(Direction::Left),
        Input::RotateCw,
        Input::HardDrop,
        Input::Move(Direction::Right),
    ];

    let mut driver = SessionDriver::new(
        Variant::FallingBlock,
        SimpleRng::new(17),
        MemoryStore::new(),
        DriverConfig::default(),
    );
    for input in inputs {
        assert!(driver.enqueue(input));
    }
    assert_eq!(driver.pending_len(), inputs.len());
    driver.advance(0);

    let mut direct = grid_puzzle::core::GameSession::new(Variant::FallingBlock, SimpleRng::new(17));
    for input in inputs {
        direct = direct.step(input);
    }
    assert_eq!(driver.session(), &direct);
}

#[test]
fn test_gravity_eventually_locks_piece() {
    let mut driver = SessionDriver::new(
        Variant::FallingBlock,
        SimpleRng::new(2),
        MemoryStore::new(),
        DriverConfig::default(),
    );
    driver.enqueue(Input::Restart);
    driver.advance(0);

    // 20 rows at 500ms: the first piece has locked after 10.5s of play.
    for _ in 0..21 {
        driver.advance(500);
    }
    assert_eq!(driver.session().score(), 10);
    assert_eq!(driver.session().status(), Status::Running);
}

#[test]
fn test_pause_stops_the_clock() {
    let mut driver = SessionDriver::new(
        Variant::FallingBlock,
        SimpleRng::new(2),
        MemoryStore::new(),
        DriverConfig::default(),
    );
    driver.enqueue(Input::Restart);
    driver.advance(0);
    driver.advance(300);

    driver.enqueue(Input::Pause);
    driver.advance(10_000);
    let y = driver.session().active_piece().unwrap().y;

    driver.enqueue(Input::Pause);
    driver.advance(0);
    driver.advance(199);
    assert_eq!(driver.session().active_piece().unwrap().y, y);
    driver.advance(1);
    assert_eq!(driver.session().active_piece().unwrap().y, y + 1);
}

#[test]
fn test_best_score_survives_reopen() {
    let path = temp_store("reopen");
    let _ = std::fs::remove_file(&path);

    let mut driver = SessionDriver::new(
        Variant::FallingBlock,
        SimpleRng::new(9),
        JsonFileStore::open(&path),
        DriverConfig::default(),
    );
    driver.enqueue(Input::Restart);
    driver.enqueue(Input::HardDrop);
    driver.enqueue(Input::HardDrop);
    driver.advance(0);
    assert_eq!(driver.session().score(), 20);

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.best_score(FALLING_BEST_KEY), 20);

    let driver = SessionDriver::new(
        Variant::FallingBlock,
        SimpleRng::new(9),
        reopened,
        DriverConfig::default(),
    );
    assert_eq!(driver.session().best_score(), 20);

    let _ = std::fs::remove_file(&path);
}
