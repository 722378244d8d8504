use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer grid cell.
///
/// Coordinates are wider than workspace bounds (`i32`), so the cell one step
/// past any edge is still representable and fails as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`.
    pub fn move_towards(self, direction: Direction) -> Self {
        match direction {
            Direction::N => Self::new(self.x, self.y + 1),
            Direction::E => Self::new(self.x + 1, self.y),
            Direction::S => Self::new(self.x, self.y - 1),
            Direction::W => Self::new(self.x - 1, self.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
