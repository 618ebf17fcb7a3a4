//! The mutable cell grid a round is played on.

use glam::IVec2;
use tracing::trace;

use crate::constants::Cell;
use crate::map::parser::ParsedMap;

/// Row-major grid of cells plus a running count of the items left on it.
///
/// Dimensions are fixed for the lifetime of a round. Anything outside the grid reads as a wall,
/// so lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    pellets_remaining: u32,
}

impl Maze {
    /// Builds a maze from rows of cells. Rows are assumed to be of equal width, which the
    /// parser guarantees.
    pub fn new(rows: &[Vec<Cell>]) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        let cells: Vec<Cell> = rows.iter().flatten().copied().collect();
        let pellets_remaining = cells.iter().filter(|cell| cell.is_item()).count() as u32;

        Self {
            height: if width == 0 { 0 } else { cells.len() / width },
            cells,
            width,
            pellets_remaining,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Items (pellets and power pellets) not yet eaten.
    pub fn pellets_remaining(&self) -> u32 {
        self.pellets_remaining
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        self.index(pos).is_some()
    }

    /// Returns the cell at `pos`, or a wall when `pos` is outside the grid.
    pub fn peek(&self, pos: IVec2) -> Cell {
        self.index(pos).map_or(Cell::Wall, |i| self.cells[i])
    }

    pub fn is_passable(&self, pos: IVec2) -> bool {
        self.peek(pos) != Cell::Wall
    }

    /// Eats whatever item is at `pos`.
    ///
    /// Returns the cell kind that was there when it held an item, in which case the cell becomes
    /// empty and the item count drops by one. Any other cell is left untouched and reported as
    /// [`Cell::Empty`], so eating the same cell twice never counts twice.
    pub fn consume(&mut self, pos: IVec2) -> Cell {
        let Some(index) = self.index(pos) else {
            return Cell::Empty;
        };

        let cell = self.cells[index];
        if !cell.is_item() {
            return Cell::Empty;
        }

        self.cells[index] = Cell::Empty;
        self.pellets_remaining -= 1;
        trace!(x = pos.x, y = pos.y, ?cell, remaining = self.pellets_remaining, "Item consumed");
        cell
    }

    /// Iterates over the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }
}

impl From<&ParsedMap> for Maze {
    fn from(parsed: &ParsedMap) -> Self {
        Maze::new(&parsed.rows)
    }
}
