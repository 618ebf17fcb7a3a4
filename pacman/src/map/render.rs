//! Plain-text rendering of a snapshot, used by the headless driver for log output.

use crate::constants::Cell;
use crate::round::Snapshot;
use crate::systems::PursuerMode;

/// Draws the maze with entities on top, one line per row.
///
/// The player is `P`; pursuers are `G` while chasing and `g` while fleeing.
pub fn render_ascii(snapshot: &Snapshot<'_>) -> String {
    let mut grid: Vec<Vec<char>> = snapshot
        .maze
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Wall => '#',
                    Cell::Empty => ' ',
                    Cell::Pellet => '.',
                    Cell::PowerPellet => 'o',
                })
                .collect()
        })
        .collect();

    let mut put = |x: i32, y: i32, c: char| {
        if let Some(slot) = grid.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            *slot = c;
        }
    };

    for pursuer in snapshot.pursuers {
        let glyph = match pursuer.mode {
            PursuerMode::Chase => 'G',
            PursuerMode::Flee => 'g',
        };
        put(pursuer.position.x, pursuer.position.y, glyph);
    }
    put(snapshot.player.position.x, snapshot.player.position.y, 'P');

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
