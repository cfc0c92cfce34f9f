//! Game actions.
//!
//! An action is data, not behavior: the rules engine interprets it,
//! validates it against the current mover, and either mutates the state
//! or returns a [`RuleViolation`](super::error::RuleViolation).

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::wall::Wall;

/// A complete game action for the current mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the mover's pawn to a destination cell.
    Move { to: Position },
    /// Place a wall and spend one unit of inventory.
    PlaceWall { wall: Wall },
    /// Pass the turn. Only produced by the bot when it can prove no legal
    /// action exists for the mover; a defensive fallback, not a normal rule.
    Skip,
}

impl Action {
    /// Shorthand for a pawn move.
    #[must_use]
    pub const fn move_to(to: Position) -> Self {
        Action::Move { to }
    }

    /// Shorthand for a wall placement.
    #[must_use]
    pub const fn place(wall: Wall) -> Self {
        Action::PlaceWall { wall }
    }

    /// Whether this is the defensive pass.
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, Action::Skip)
    }
}
