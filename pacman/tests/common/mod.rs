#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use pacman::config::GameConfig;
use pacman::error::LeaderboardError;
use pacman::leaderboard::Leaderboard;
use pacman::round::{make_rng, Carryover, Round, RoundSettings};
use pacman::systems::PursuerPolicy;
use pacman_common::ScoreRecord;

/// A 5x5 room with a single pellet directly right of the player and no pursuers.
pub const ONE_PELLET: [&str; 5] = ["WWWWW", "W   W", "WP. W", "W   W", "WWWWW"];

/// Two pursuers walled in on either side of the player, with one pellet out of everyone's reach.
pub const PINCER: [&str; 5] = ["WWWWW", "WW.WW", "WGPGW", "WWWWW", "WWWWW"];

/// A plus-shaped room: power pellets next to the player in every direction, ordinary pellets
/// beyond them, and a pursuer spawn sealed away in the corner.
pub const CROSS: [&str; 9] = [
    "WWWWWWWWW",
    "WGWW.WWWW",
    "WWWW.WWWW",
    "WWWWoWWWW",
    "W..oPo..W",
    "WWWWoWWWW",
    "WWWW.WWWW",
    "WWWW.WWWW",
    "WWWWWWWWW",
];

pub fn settings(cadences: &[u32], greedy_chance: f64) -> RoundSettings {
    RoundSettings {
        policy: PursuerPolicy::new(greedy_chance),
        pursuer_cadences: cadences.to_vec(),
        ..RoundSettings::default()
    }
}

pub fn round<S: AsRef<str>>(layout: &[S], lives: u32, settings: &RoundSettings) -> Round {
    Round::from_layout(layout, 0, Carryover { score: 0, lives }, settings, make_rng(Some(7))).unwrap()
}

/// A configuration that touches neither the filesystem nor the network.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        highscore_path: None,
        leaderboard_url: None,
        fallback_path: None,
        seed: Some(42),
        ..GameConfig::default()
    }
}

/// A leaderboard that is always down.
#[derive(Default)]
pub struct Unreachable {
    pub attempts: AtomicUsize,
}

impl Leaderboard for Unreachable {
    fn submit(&self, _record: &ScoreRecord) -> Result<(), LeaderboardError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(LeaderboardError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    fn top(&self, _limit: usize) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        Ok(Vec::new())
    }
}
