//! Wall segments.
//!
//! A wall is a two-cell-long segment anchored at the top-left intersection
//! of the 2x2 block of cells it passes between. Anchor coordinates are
//! constrained to `[0, 7]` on a 9x9 board.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Blocks vertical movement between rows `r` and `r + 1`.
    Horizontal,
    /// Blocks horizontal movement between columns `c` and `c + 1`.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A placed or candidate wall segment.
///
/// A `Horizontal` wall anchored at `(r, c)` blocks the edges between
/// `(r, c)`-`(r + 1, c)` and `(r, c + 1)`-`(r + 1, c + 1)`. A `Vertical`
/// wall anchored at `(r, c)` blocks the edges between `(r, c)`-`(r, c + 1)`
/// and `(r + 1, c)`-`(r + 1, c + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
}

impl Wall {
    /// Create a wall at the given anchor.
    #[must_use]
    pub const fn new(row: u8, col: u8, orientation: Orientation) -> Self {
        Self { row, col, orientation }
    }

    /// Shorthand for a horizontal wall.
    #[must_use]
    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    /// Shorthand for a vertical wall.
    #[must_use]
    pub const fn vertical(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    /// Whether the anchor lies in the `[0, 7] x [0, 7]` anchor grid.
    #[must_use]
    pub const fn anchor_in_bounds(self) -> bool {
        self.row < BOARD_SIZE - 1 && self.col < BOARD_SIZE - 1
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}({}, {})", tag, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_bounds() {
        assert!(Wall::horizontal(0, 0).anchor_in_bounds());
        assert!(Wall::vertical(7, 7).anchor_in_bounds());
        assert!(!Wall::horizontal(8, 0).anchor_in_bounds());
        assert!(!Wall::vertical(0, 8).anchor_in_bounds());
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Wall::horizontal(3, 4)), "h(3, 4)");
        assert_eq!(format!("{}", Wall::vertical(1, 2)), "v(1, 2)");
    }

    #[test]
    fn test_serialization() {
        let wall = Wall::vertical(5, 2);
        let json = serde_json::to_string(&wall).unwrap();
        let deserialized: Wall = serde_json::from_str(&json).unwrap();
        assert_eq!(wall, deserialized);
    }
}
