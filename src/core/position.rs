//! Board positions.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// A cell on the board, `(row, col)` with both coordinates in `[0, 8]`.
///
/// A plain value type with no identity of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position. Bounds are not checked here; use
    /// [`Position::in_bounds`] before trusting external input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(8, 8).in_bounds());
        assert!(!Position::new(9, 0).in_bounds());
        assert!(!Position::new(0, 9).in_bounds());
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);

        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new(4, 7);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
