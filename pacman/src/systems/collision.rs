use smallvec::SmallVec;
use tracing::{debug, info};

use crate::constants::PURSUER_EATEN_SCORE;
use crate::systems::components::{PlayerState, PursuerState};

/// The result of the player and a pursuer sharing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The powered player ate the pursuer, which went back to its spawn.
    PursuerEaten { pursuer: usize },
    /// The player lost a life and both entities went back to their starts.
    LifeLost { pursuer: usize, lives: u32 },
    /// The player lost its last life. Always the final entry.
    GameOver { pursuer: usize },
}

/// Resolves exact cell coincidences between the player and each pursuer, in list order.
///
/// A powered player eats the pursuer for a flat bonus and sends it home in chase mode. Otherwise
/// the player loses a life; losing the last one stops the scan, so no later pursuer can touch the
/// lives count on the same tick.
pub fn resolve_collisions(player: &mut PlayerState, pursuers: &mut [PursuerState]) -> SmallVec<[Collision; 4]> {
    let mut collisions = SmallVec::new();

    for pursuer in pursuers.iter_mut() {
        if pursuer.position != player.position {
            continue;
        }

        if player.powered {
            player.add_score(PURSUER_EATEN_SCORE);
            pursuer.respawn();
            debug!(pursuer = pursuer.id, score = player.score, "Pursuer eaten");
            collisions.push(Collision::PursuerEaten { pursuer: pursuer.id });
            continue;
        }

        player.lives = player.lives.saturating_sub(1);
        if player.lives == 0 {
            info!(pursuer = pursuer.id, score = player.score, "Player caught on last life");
            collisions.push(Collision::GameOver { pursuer: pursuer.id });
            break;
        }

        debug!(pursuer = pursuer.id, lives = player.lives, "Player caught, respawning");
        player.respawn();
        pursuer.respawn();
        collisions.push(Collision::LifeLost {
            pursuer: pursuer.id,
            lives: player.lives,
        });
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::components::PursuerMode;
    use glam::IVec2;

    #[test]
    fn test_no_collision_when_apart() {
        let mut player = PlayerState::new(IVec2::new(1, 1), 3);
        let mut pursuers = vec![PursuerState::new(0, IVec2::new(2, 2), 1)];
        assert!(resolve_collisions(&mut player, &mut pursuers).is_empty());
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_eaten_pursuer_returns_to_chase_immediately() {
        let mut player = PlayerState::new(IVec2::new(1, 1), 3);
        player.powered = true;
        let mut pursuer = PursuerState::new(0, IVec2::new(3, 3), 1);
        pursuer.position = IVec2::new(1, 1);
        pursuer.mode = PursuerMode::Flee;
        let mut pursuers = vec![pursuer];

        let collisions = resolve_collisions(&mut player, &mut pursuers);
        assert_eq!(collisions.as_slice(), &[Collision::PursuerEaten { pursuer: 0 }]);
        assert_eq!(pursuers[0].mode, PursuerMode::Chase);
        assert_eq!(pursuers[0].position, IVec2::new(3, 3));
    }
}
