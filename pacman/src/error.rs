//! Centralized error types for the Pac-Man simulation.
//!
//! Moving into a wall is not an error and never shows up here; it is a normal
//! no-op handled by the movement system.

use std::io;

/// Main error type for the Pac-Man game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Leaderboard error: {0}")]
    Leaderboard(#[from] LeaderboardError),

    #[error("High score error: {0}")]
    HighScore(#[from] HighScoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for layout parsing. Every variant is fatal at level load.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Layout has no rows")]
    EmptyLayout,
    #[error("Unknown character in layout: {0:?}")]
    UnknownCharacter(char),
    #[error("Row {row} is {found} cells wide, expected {expected}")]
    InconsistentWidth { row: usize, expected: usize, found: usize },
    #[error("Layout has no player start")]
    MissingPlayerStart,
    #[error("Layout must have exactly one player start, found {0}")]
    MultiplePlayerStarts(usize),
    #[error("Boundary cell ({x}, {y}) is not a wall")]
    OpenBoundary { x: usize, y: usize },
}

/// Failures talking to a leaderboard store. These are never fatal to a round.
#[derive(thiserror::Error, Debug)]
pub enum LeaderboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum HighScoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed high score file: {0:?}")]
    Malformed(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
