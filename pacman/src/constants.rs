//! This module contains all the constants used in the game.

use std::time::Duration;

use strum_macros::{AsRefStr, Display};

/// How often the headless driver wakes up to feed elapsed time into the game.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Simulation tick period; the player moves at most one cell per tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(120);
/// Granularity of the power-mode countdown.
pub const POWER_STEP: Duration = Duration::from_millis(100);
/// How often coalesced input is committed to the running round.
pub const INPUT_PERIOD: Duration = Duration::from_millis(30);

/// How long a power pellet keeps the pursuers vulnerable.
pub const POWER_DURATION_MS: u32 = 5000;
/// Probability that a pursuer takes the greedy heading instead of a random one.
pub const GREEDY_CHANCE: f64 = 0.35;
/// Ticks between pursuer moves, assigned round-robin by spawn order.
pub const PURSUER_CADENCES: [u32; 3] = [2, 3, 4];

pub const STARTING_LIVES: u32 = 3;

pub const PELLET_SCORE: u32 = 10;
pub const POWER_PELLET_SCORE: u32 = 50;
pub const PURSUER_EATEN_SCORE: u32 = 200;
pub const COMPLETION_BONUS: u32 = 500;

/// The static kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Cell {
    Wall,
    #[default]
    Empty,
    Pellet,
    PowerPellet,
}

impl Cell {
    /// Points awarded for eating this cell, if it holds an item.
    pub const fn score_value(self) -> Option<u32> {
        match self {
            Cell::Pellet => Some(PELLET_SCORE),
            Cell::PowerPellet => Some(POWER_PELLET_SCORE),
            Cell::Wall | Cell::Empty => None,
        }
    }

    pub const fn is_item(self) -> bool {
        matches!(self, Cell::Pellet | Cell::PowerPellet)
    }
}

/// The base 15x15 layout every built-in level is derived from.
///
/// `W` is a wall, `.` a pellet, `o` a power pellet, `P` the player start and `G` a pursuer start.
pub const BASE_LAYOUT: [&str; 15] = [
    "WWWWWWWWWWWWWWW",
    "W....o....o...W",
    "W.WWWW.WWWWW.WW",
    "W.W...W...W..GW",
    "W.W.W.W.W.W.W.W",
    "W...o...P...o.W",
    "WWW.WWWWWWW.WWW",
    "W.............W",
    "WWW.WWWWWWW.WWW",
    "W.o...G...o...W",
    "W.W.W.W.W.W.W.W",
    "W..W...W...W..W",
    "WW.WWW.WWW.WW.W",
    "W....o....o...W",
    "WWWWWWWWWWWWWWW",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_item_scores() {
        assert_eq!(Cell::Pellet.score_value(), Some(10));
        assert_eq!(Cell::PowerPellet.score_value(), Some(50));
        assert_eq!(Cell::Wall.score_value(), None);
        assert_eq!(Cell::Empty.score_value(), None);
    }

    #[test]
    fn test_base_layout_is_square() {
        for row in BASE_LAYOUT {
            assert_eq!(row.len(), BASE_LAYOUT.len());
        }
    }
}
