use std::fs;

use pacman::error::HighScoreError;
use pacman::highscore::HighScore;
use speculoos::prelude::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_starts_at_zero() {
    let dir = TempDir::new().unwrap();
    let high_score = HighScore::load(dir.path().join("best")).unwrap();
    assert_that(&high_score.best()).is_equal_to(0);
}

#[test]
fn test_record_persists_only_improvements() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("best");

    let mut high_score = HighScore::load(&path).unwrap();
    assert_that(&high_score.record(120).unwrap()).is_true();
    assert_that(&fs::read_to_string(&path).unwrap().as_str()).is_equal_to("120");

    assert_that(&high_score.record(80).unwrap()).is_false();
    assert_that(&high_score.record(120).unwrap()).is_false();
    assert_that(&fs::read_to_string(&path).unwrap().as_str()).is_equal_to("120");

    let reloaded = HighScore::load(&path).unwrap();
    assert_that(&reloaded.best()).is_equal_to(120);
}

#[test]
fn test_surrounding_whitespace_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("best");
    fs::write(&path, "  4410\n").unwrap();

    assert_that(&HighScore::load(&path).unwrap().best()).is_equal_to(4410);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("best");
    fs::write(&path, "lots").unwrap();

    let result = HighScore::load(&path);
    assert!(matches!(result, Err(HighScoreError::Malformed(ref s)) if s == "lots"));
}

#[test]
fn test_in_memory_never_touches_disk() {
    let mut high_score = HighScore::in_memory(10);
    assert_that(&high_score.record(11).unwrap()).is_true();
    assert_that(&high_score.best()).is_equal_to(11);
}

#[test]
fn test_empty_at_overwrites_on_first_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("best");
    fs::write(&path, "garbage").unwrap();

    let mut high_score = HighScore::empty_at(&path);
    assert_that(&high_score.best()).is_equal_to(0);
    assert_that(&high_score.record(30).unwrap()).is_true();
    assert_that(&HighScore::load(&path).unwrap().best()).is_equal_to(30);
}
