//! The seam between whatever captures player input and the simulation.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::map::direction::Direction;
use crate::round::Snapshot;
use crate::systems::legal_headings;

/// Holds at most one pending turn. Later requests overwrite earlier ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    pending: Option<Direction>,
}

impl InputLatch {
    /// Records a requested direction. `None` is not a turn and is ignored.
    pub fn set(&mut self, direction: Direction) {
        if !direction.is_none() {
            self.pending = Some(direction);
        }
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}

/// Anything that can produce turn requests from what is on screen.
pub trait InputSource {
    fn poll(&mut self, snapshot: &Snapshot<'_>) -> Option<Direction>;
}

/// A stand-in for a human: keeps going straight and picks a new random corridor when stuck.
pub struct Autopilot {
    rng: SmallRng,
}

impl Autopilot {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot<'_>) -> Option<Direction> {
        let player = snapshot.player;
        let ahead = player.position + player.facing.as_ivec2();
        if !player.facing.is_none() && snapshot.maze.is_passable(ahead) {
            return None;
        }

        let options = legal_headings(snapshot.maze, player.position);
        options.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_last_direction_wins() {
        let mut latch = InputLatch::default();
        latch.set(Direction::Up);
        latch.set(Direction::Left);
        assert_eq!(latch.take(), Some(Direction::Left));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_latch_ignores_none() {
        let mut latch = InputLatch::default();
        latch.set(Direction::Down);
        latch.set(Direction::None);
        assert_eq!(latch.take(), Some(Direction::Down));
    }
}
