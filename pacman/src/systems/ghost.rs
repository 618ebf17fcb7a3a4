//! Pursuer heading selection.
//!
//! The policy is deliberately heuristic: a biased coin decides between the locally greedy heading
//! and a uniformly random legal one. There is no lookahead and no reversal avoidance.

use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::GREEDY_CHANCE;
use crate::map::{direction::Direction, maze::Maze};
use crate::systems::components::{PursuerMode, PursuerState};

/// Grid distance ignoring walls.
pub fn manhattan(a: IVec2, b: IVec2) -> i32 {
    let delta = a - b;
    delta.x.abs() + delta.y.abs()
}

/// The headings out of `from` that do not lead into a wall, in tie-break order.
pub fn legal_headings(maze: &Maze, from: IVec2) -> SmallVec<[Direction; 4]> {
    Direction::DIRECTIONS
        .into_iter()
        .filter(|dir| maze.is_passable(from + dir.as_ivec2()))
        .collect()
}

/// Picks the heading that brings `from` closest to (chase) or furthest from (flee) `target`.
///
/// Ties go to whichever heading comes first in `candidates`.
pub fn greedy_heading(candidates: &[Direction], from: IVec2, target: IVec2, mode: PursuerMode) -> Option<Direction> {
    let mut best: Option<(Direction, i32)> = None;
    for &dir in candidates {
        let distance = manhattan(from + dir.as_ivec2(), target);
        let better = match (best, mode) {
            (None, _) => true,
            (Some((_, best_distance)), PursuerMode::Chase) => distance < best_distance,
            (Some((_, best_distance)), PursuerMode::Flee) => distance > best_distance,
        };
        if better {
            best = Some((dir, distance));
        }
    }
    best.map(|(dir, _)| dir)
}

/// Mixed greedy/random pursuer behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuerPolicy {
    /// Probability of taking the greedy heading on a given move.
    pub greedy_chance: f64,
}

impl Default for PursuerPolicy {
    fn default() -> Self {
        Self {
            greedy_chance: GREEDY_CHANCE,
        }
    }
}

impl PursuerPolicy {
    /// Clamps `greedy_chance` into `0..=1`. NaN falls back to the default chance.
    pub fn new(greedy_chance: f64) -> Self {
        if greedy_chance.is_nan() {
            return Self::default();
        }
        Self {
            greedy_chance: greedy_chance.clamp(0.0, 1.0),
        }
    }

    /// Chooses the next heading for `pursuer`. Returns [`Direction::None`] when boxed in.
    ///
    /// Never returns a heading into a wall.
    pub fn next_heading<R: Rng + ?Sized>(
        &self,
        pursuer: &PursuerState,
        maze: &Maze,
        player: IVec2,
        rng: &mut R,
    ) -> Direction {
        let candidates = legal_headings(maze, pursuer.position);
        if candidates.is_empty() {
            trace!(pursuer = pursuer.id, "Pursuer boxed in, staying put");
            return Direction::None;
        }

        if rng.random_bool(self.greedy_chance) {
            if let Some(dir) = greedy_heading(&candidates, pursuer.position, player, pursuer.mode) {
                return dir;
            }
        }

        candidates.choose(rng).copied().unwrap_or(Direction::None)
    }
}
