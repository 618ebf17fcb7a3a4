use glam::IVec2;
use strum_macros::AsRefStr;

use crate::map::direction::Direction;

/// The player-controlled entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub position: IVec2,
    /// Where the player returns to after losing a life.
    pub start: IVec2,
    pub facing: Direction,
    /// The most recent requested turn. Kept until it becomes possible.
    pub queued: Direction,
    /// Never decreases within a session.
    pub score: u32,
    pub lives: u32,
    /// Mirrors whether the power timer is running.
    pub powered: bool,
}

impl PlayerState {
    pub fn new(start: IVec2, lives: u32) -> Self {
        Self {
            position: start,
            start,
            facing: Direction::None,
            queued: Direction::None,
            score: 0,
            lives,
            powered: false,
        }
    }

    /// Sends the player back to the start, dropping any pending turn.
    pub fn respawn(&mut self) {
        self.position = self.start;
        self.facing = Direction::None;
        self.queued = Direction::None;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

/// Whether a pursuer is hunting the player or running from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PursuerMode {
    #[default]
    Chase,
    Flee,
}

/// An AI-controlled pursuer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PursuerState {
    pub id: usize,
    pub position: IVec2,
    pub spawn: IVec2,
    pub facing: Direction,
    pub mode: PursuerMode,
    /// Ticks between moves; higher is slower.
    pub cadence: u32,
    pub cadence_counter: u32,
}

impl PursuerState {
    pub fn new(id: usize, spawn: IVec2, cadence: u32) -> Self {
        Self {
            id,
            position: spawn,
            spawn,
            facing: Direction::None,
            mode: PursuerMode::Chase,
            cadence: cadence.max(1),
            cadence_counter: 0,
        }
    }

    /// Advances the cadence counter by one tick, returning `true` when the pursuer gets to move.
    pub fn tick_cadence(&mut self) -> bool {
        self.cadence_counter += 1;
        if self.cadence_counter >= self.cadence {
            self.cadence_counter = 0;
            true
        } else {
            false
        }
    }

    /// Returns the pursuer to its spawn point in chase mode.
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.facing = Direction::None;
        self.mode = PursuerMode::Chase;
        self.cadence_counter = 0;
    }
}
