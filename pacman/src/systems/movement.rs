use glam::IVec2;
use rand::Rng;
use tracing::trace;

use crate::constants::Cell;
use crate::map::{direction::Direction, maze::Maze};
use crate::systems::components::{PlayerState, PursuerState};
use crate::systems::ghost::PursuerPolicy;

/// What happened to the player on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStep {
    /// No turn has been requested yet.
    Idle,
    /// The requested heading leads into a wall; the request stays queued.
    Blocked(Direction),
    Moved(IVec2),
}

/// Moves the player one cell along its queued direction, if that cell is open.
///
/// A blocked request is not cleared, so a turn can be queued slightly before the corridor
/// opens up.
pub fn move_player(player: &mut PlayerState, maze: &Maze) -> PlayerStep {
    if player.queued.is_none() {
        return PlayerStep::Idle;
    }

    let target = player.position + player.queued.as_ivec2();
    if !maze.is_passable(target) {
        trace!(queued = player.queued.as_ref(), "Player blocked");
        return PlayerStep::Blocked(player.queued);
    }

    player.position = target;
    player.facing = player.queued;
    PlayerStep::Moved(target)
}

/// Eats the item under the player and scores it. Returns what was eaten.
pub fn eat_item(player: &mut PlayerState, maze: &mut Maze) -> Option<Cell> {
    let cell = maze.consume(player.position);
    let points = cell.score_value()?;
    player.add_score(points);
    Some(cell)
}

/// Ticks the pursuer's cadence and, when it fires, moves it one cell along the heading the
/// policy picks. Returns the new position when the pursuer actually moved.
pub fn move_pursuer<R: Rng + ?Sized>(
    pursuer: &mut PursuerState,
    maze: &Maze,
    player: IVec2,
    policy: &PursuerPolicy,
    rng: &mut R,
) -> Option<IVec2> {
    if !pursuer.tick_cadence() {
        return None;
    }

    let heading = policy.next_heading(pursuer, maze, player, rng);
    if heading.is_none() {
        return None;
    }

    pursuer.facing = heading;
    pursuer.position += heading.as_ivec2();
    trace!(pursuer = pursuer.id, x = pursuer.position.x, y = pursuer.position.y, mode = pursuer.mode.as_ref(), "Pursuer moved");
    Some(pursuer.position)
}
