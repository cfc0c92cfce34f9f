//! Game state.
//!
//! A `GameState` is owned by exactly one game session and is mutated only
//! through [`crate::rules::apply`]. Callers read it; they never write it
//! directly. Independent sessions may run in parallel with zero shared
//! mutable state.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};
use super::position::Position;
use super::wall::Wall;
use crate::board::WallLedger;

/// Walls each player starts with.
pub const INITIAL_WALLS: u8 = 10;

/// Complete state of one Quoridor game.
///
/// Invariants (hold before and after every applied action):
///
/// 1. Pawn positions are in-bounds and mutually distinct.
/// 2. The ledger contains no overlapping, crossing, or colinear-adjacent
///    walls.
/// 3. Both players retain at least one path to their goal row.
/// 4. `winner` is set iff some pawn occupies its owner's goal row; once
///    set the state is terminal and accepts no further actions.
/// 5. Inventories only decrease, only on a successful placement by the
///    owning player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pawns: PlayerMap<Position>,
    walls: WallLedger,
    inventory: PlayerMap<u8>,
    turn: Player,
    winner: Option<Player>,
}

impl GameState {
    /// Create the initial layout: pawns on their starting cells, empty
    /// ledger, full inventories, Player 1 to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pawns: PlayerMap::new(Player::start),
            walls: WallLedger::new(),
            inventory: PlayerMap::with_value(INITIAL_WALLS),
            turn: Player::One,
            winner: None,
        }
    }

    /// The cell a player's pawn occupies.
    #[must_use]
    pub fn pawn(&self, player: Player) -> Position {
        self.pawns[player]
    }

    /// The placed walls.
    #[must_use]
    pub fn walls(&self) -> &WallLedger {
        &self.walls
    }

    /// How many walls a player may still place.
    #[must_use]
    pub fn walls_remaining(&self, player: Player) -> u8 {
        self.inventory[player]
    }

    /// Total walls placed so far, a coarse game-progress measure.
    #[must_use]
    pub fn walls_placed(&self) -> usize {
        self.walls.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    // === Mutators, rules-engine and bot-simulation only ===

    pub(crate) fn set_pawn(&mut self, player: Player, to: Position) {
        self.pawns[player] = to;
    }

    /// Record a wall placement: append to the ledger and spend inventory.
    /// Legality must have been established by the caller.
    pub(crate) fn place_wall(&mut self, player: Player, wall: Wall) {
        debug_assert!(self.inventory[player] > 0);
        self.walls.place(wall);
        self.inventory[player] -= 1;
    }

    pub(crate) fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    pub(crate) fn set_winner(&mut self, winner: Player) {
        self.winner = Some(winner);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();

        assert_eq!(state.pawn(Player::One), Position::new(8, 4));
        assert_eq!(state.pawn(Player::Two), Position::new(0, 4));
        assert_eq!(state.walls_remaining(Player::One), 10);
        assert_eq!(state.walls_remaining(Player::Two), 10);
        assert_eq!(state.walls_placed(), 0);
        assert_eq!(state.turn(), Player::One);
        assert_eq!(state.winner(), None);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_place_wall_spends_inventory() {
        let mut state = GameState::new();

        state.place_wall(Player::One, Wall::horizontal(4, 4));

        assert_eq!(state.walls_remaining(Player::One), 9);
        assert_eq!(state.walls_remaining(Player::Two), 10);
        assert_eq!(state.walls_placed(), 1);
        assert!(state.walls().contains(&Wall::horizontal(4, 4)));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = GameState::new();
        state.place_wall(Player::Two, Wall::vertical(2, 3));
        state.set_pawn(Player::One, Position::new(7, 4));
        state.set_turn(Player::Two);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.pawn(Player::One), Position::new(7, 4));
        assert_eq!(restored.walls_remaining(Player::Two), 9);
        assert!(restored.walls().contains(&Wall::vertical(2, 3)));
        assert_eq!(restored.turn(), Player::Two);
        assert_eq!(restored.winner(), None);
    }
}
