use glam::IVec2;
use strum_macros::{AsRefStr, EnumString};

/// A heading on the grid. `None` means "stay put".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// The four cardinal directions, in tie-break order.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the one-cell offset for this direction. Rows grow downwards.
    pub const fn as_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::None => IVec2::ZERO,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        dir.as_ivec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_offsets_are_unit_steps() {
        for dir in Direction::DIRECTIONS {
            let offset = dir.as_ivec2();
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
            assert_eq!(IVec2::from(dir), offset);
        }
        assert_eq!(Direction::None.as_ivec2(), IVec2::ZERO);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!(Direction::from_str("UP").unwrap(), Direction::Up);
        assert_eq!(Direction::from_str("left").unwrap(), Direction::Left);
        assert!(Direction::from_str("sideways").is_err());
    }
}
