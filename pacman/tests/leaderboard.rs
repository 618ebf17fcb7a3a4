mod common;

use std::fs;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::Unreachable;
use pacman::leaderboard::{HttpLeaderboard, Leaderboard, LocalLeaderboard, ScoreReporter};
use pacman_common::ScoreRecord;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tempfile::TempDir;

#[test]
fn test_local_top_is_sorted_and_limited() {
    let board = LocalLeaderboard::in_memory();
    for (name, score) in [("A", 30), ("B", 90), ("C", 60), ("D", 90)] {
        board.submit(&ScoreRecord::new(name, score)).unwrap();
    }

    let top = board.top(3).unwrap();
    assert_eq!(
        top,
        vec![
            ScoreRecord::new("B", 90),
            ScoreRecord::new("D", 90),
            ScoreRecord::new("C", 60),
        ]
    );
}

#[test]
fn test_local_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    let board = LocalLeaderboard::open(&path).unwrap();
    assert_that(&board.is_empty()).is_true();
    board.submit(&ScoreRecord::new("PINKY", 1200)).unwrap();

    let reopened = LocalLeaderboard::open(&path).unwrap();
    assert_that(&reopened.len()).is_equal_to(1);
    assert_that(&reopened.top(1).unwrap()[0].score).is_equal_to(1200);

    reopened.clear().unwrap();
    assert_that(&LocalLeaderboard::open(&path).unwrap().is_empty()).is_true();
}

#[test]
fn test_corrupt_fallback_file_degrades_to_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "{ not a leaderboard").unwrap();
    assert_that(&LocalLeaderboard::open(&path).is_err()).is_true();

    let board = LocalLeaderboard::open_or_in_memory(&path);
    assert_that(&board.is_empty()).is_true();
    board.submit(&ScoreRecord::new("FUNKY", 80)).unwrap();
    assert_that(&board.len()).is_equal_to(1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not a leaderboard");
}

#[test]
fn test_failed_submission_falls_back_locally() {
    let primary = Arc::new(Unreachable::default());
    let fallback = Arc::new(LocalLeaderboard::in_memory());
    let reporter = ScoreReporter::new(Some(primary.clone()), fallback.clone());

    let handle = reporter.report(ScoreRecord::new("BLINKY", 740)).expect("reporter thread");
    handle.join().unwrap();

    assert_that(&primary.attempts.load(Ordering::SeqCst)).is_equal_to(1);
    assert_eq!(fallback.top(5).unwrap(), vec![ScoreRecord::new("BLINKY", 740)]);
}

#[test]
fn test_successful_submission_skips_fallback() {
    let primary = Arc::new(LocalLeaderboard::in_memory());
    let fallback = Arc::new(LocalLeaderboard::in_memory());
    let reporter = ScoreReporter::new(Some(primary.clone()), fallback.clone());

    reporter.submit_blocking(&ScoreRecord::new("INKY", 10));
    assert_that(&primary.len()).is_equal_to(1);
    assert_that(&fallback.is_empty()).is_true();
}

#[test]
fn test_unreachable_server_falls_back() {
    // Nothing listens on port 9 of localhost in the test environment
    let primary = Arc::new(HttpLeaderboard::new("http://127.0.0.1:9/").unwrap());
    assert_that(&primary.endpoint()).is_equal_to("http://127.0.0.1:9/leaderboard");

    let fallback = Arc::new(LocalLeaderboard::in_memory());
    ScoreReporter::new(Some(primary), fallback.clone()).submit_blocking(&ScoreRecord::new("SUE", 5));
    assert_that(&fallback.len()).is_equal_to(1);
}
