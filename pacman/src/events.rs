use glam::IVec2;

use crate::constants::Cell;
use crate::map::direction::Direction;
use crate::systems::Collision;

/// Something observable that happened while the game advanced.
///
/// Events are returned to the caller rather than acted on, so drivers, loggers and tests can
/// inspect a tick without reaching into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerMoved { to: IVec2 },
    PlayerBlocked { queued: Direction },
    ItemEaten { cell: Cell, at: IVec2 },
    PowerArmed { duration_ms: u32 },
    PowerExpired,
    PursuerMoved { pursuer: usize, to: IVec2 },
    Collision(Collision),
    RoundWon { level: usize },
    RoundLost { level: usize },
    BonusAwarded { points: u32 },
    LevelLoaded { level: usize },
    NewHighScore { score: u32 },
}
