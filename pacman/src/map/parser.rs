//! Map parsing functionality for converting raw text layouts into structured data.

use glam::IVec2;

use crate::constants::Cell;
use crate::error::ParseError;

/// Represents the parsed data from a raw layout.
#[derive(Debug, Clone)]
pub struct ParsedMap {
    /// The parsed cells, row by row.
    pub rows: Vec<Vec<Cell>>,
    /// The player's starting position.
    pub player_start: IVec2,
    /// Pursuer spawn points, in reading order.
    pub pursuer_starts: Vec<IVec2>,
}

impl ParsedMap {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// What a single layout symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Cell(Cell),
    PlayerStart,
    PursuerStart,
}

/// Parser for converting raw layouts into structured map data.
pub struct LayoutParser;

impl LayoutParser {
    /// Parses a single layout character.
    pub fn parse_character(c: char) -> Result<Symbol, ParseError> {
        match c {
            'W' | '#' => Ok(Symbol::Cell(Cell::Wall)),
            '.' => Ok(Symbol::Cell(Cell::Pellet)),
            'o' => Ok(Symbol::Cell(Cell::PowerPellet)),
            ' ' => Ok(Symbol::Cell(Cell::Empty)),
            'P' => Ok(Symbol::PlayerStart),
            'G' => Ok(Symbol::PursuerStart),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw layout into structured map data.
    ///
    /// Start markers become empty cells. A layout without pursuer starts is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, has rows of different widths, contains an
    /// unknown symbol, does not have exactly one player start, or has a non-wall boundary cell.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<ParsedMap, ParseError> {
        let width = match raw.first() {
            Some(row) => row.as_ref().chars().count(),
            None => return Err(ParseError::EmptyLayout),
        };
        if width == 0 {
            return Err(ParseError::EmptyLayout);
        }

        let mut rows = Vec::with_capacity(raw.len());
        let mut player_starts = Vec::new();
        let mut pursuer_starts = Vec::new();

        for (y, line) in raw.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }

            let mut row = Vec::with_capacity(width);
            for (x, character) in line.chars().enumerate() {
                let position = IVec2::new(x as i32, y as i32);
                let cell = match Self::parse_character(character)? {
                    Symbol::Cell(cell) => cell,
                    Symbol::PlayerStart => {
                        player_starts.push(position);
                        Cell::Empty
                    }
                    Symbol::PursuerStart => {
                        pursuer_starts.push(position);
                        Cell::Empty
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        let height = rows.len();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let on_boundary = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if on_boundary && *cell != Cell::Wall {
                    return Err(ParseError::OpenBoundary { x, y });
                }
            }
        }

        let player_start = match player_starts.as_slice() {
            [] => return Err(ParseError::MissingPlayerStart),
            [start] => *start,
            many => return Err(ParseError::MultiplePlayerStarts(many.len())),
        };

        Ok(ParsedMap {
            rows,
            player_start,
            pursuer_starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE_LAYOUT;

    #[test]
    fn test_parse_character() {
        assert_eq!(LayoutParser::parse_character('W').unwrap(), Symbol::Cell(Cell::Wall));
        assert_eq!(LayoutParser::parse_character('#').unwrap(), Symbol::Cell(Cell::Wall));
        assert_eq!(LayoutParser::parse_character('.').unwrap(), Symbol::Cell(Cell::Pellet));
        assert_eq!(LayoutParser::parse_character('o').unwrap(), Symbol::Cell(Cell::PowerPellet));
        assert_eq!(LayoutParser::parse_character(' ').unwrap(), Symbol::Cell(Cell::Empty));
        assert_eq!(LayoutParser::parse_character('P').unwrap(), Symbol::PlayerStart);
        assert_eq!(LayoutParser::parse_character('G').unwrap(), Symbol::PursuerStart);

        assert!(LayoutParser::parse_character('Z').is_err());
    }

    #[test]
    fn test_parse_base_layout() {
        let parsed = LayoutParser::parse(&BASE_LAYOUT).unwrap();

        assert_eq!(parsed.width(), 15);
        assert_eq!(parsed.height(), 15);
        assert_eq!(parsed.player_start, IVec2::new(8, 5));
        assert_eq!(parsed.pursuer_starts, vec![IVec2::new(13, 3), IVec2::new(6, 9)]);
        assert_eq!(parsed.rows[5][8], Cell::Empty);
    }
}
