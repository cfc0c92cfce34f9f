//! Static grid geometry: bounds and adjacency. No state.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 9;

/// One of the four orthogonal directions.
///
/// `Direction::ALL` fixes the traversal order (up, down, left, right).
/// BFS ties between equally short paths are broken by this order, which
/// matters only for reproducibility of the bot's chosen path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in traversal order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Step one cell in this direction, `None` if that leaves the board.
    #[must_use]
    pub fn step(self, from: Position) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = from.row as i16 + dr as i16;
        let col = from.col as i16 + dc as i16;

        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// In-bounds orthogonal neighbors of a cell, in traversal order.
pub fn neighbors(of: Position) -> impl Iterator<Item = Position> {
    Direction::ALL.into_iter().filter_map(move |d| d.step(of))
}
