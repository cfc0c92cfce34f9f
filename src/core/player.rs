//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Quoridor is strictly two-player: Player 1 starts on the bottom row and
//! races to row 0; Player 2 starts on the top row and races to row 8.
//!
//! ## PlayerMap
//!
//! Fixed two-slot per-player storage, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::Position;
use crate::board::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }

    /// The starting cell: the center column of the row farthest from the goal.
    #[must_use]
    pub const fn start(self) -> Position {
        match self {
            Player::One => Position::new(BOARD_SIZE - 1, BOARD_SIZE / 2),
            Player::Two => Position::new(0, BOARD_SIZE / 2),
        }
    }

    /// Slot index for `PlayerMap` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Both players, in turn order.
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Player, PlayerMap};
///
/// let mut walls: PlayerMap<u8> = PlayerMap::with_value(10);
/// walls[Player::Two] -= 1;
///
/// assert_eq!(walls[Player::One], 10);
/// assert_eq!(walls[Player::Two], 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, Player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [Player::One, Player::Two].into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_goal_rows() {
        assert_eq!(Player::One.goal_row(), 0);
        assert_eq!(Player::Two.goal_row(), 8);
    }

    #[test]
    fn test_starting_cells() {
        assert_eq!(Player::One.start(), Position::new(8, 4));
        assert_eq!(Player::Two.start(), Position::new(0, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::One), "Player 1");
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_both_order() {
        let players: Vec<_> = Player::both().collect();
        assert_eq!(players, vec![Player::One, Player::Two]);
    }

    #[test]
    fn test_player_map_factory() {
        let map = PlayerMap::new(|p| p.goal_row());
        assert_eq!(map[Player::One], 0);
        assert_eq!(map[Player::Two], 8);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);
        map[Player::One] = 10;
        map[Player::Two] = 20;

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::new(|p| p.index() as i32);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs, vec![(Player::One, &0), (Player::Two, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::with_value(10);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
