//! Rule violations.
//!
//! Every rejected action reports the specific violation so a presentation
//! layer can show a precise message. None are fatal: a rejected action
//! leaves the `GameState` unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    /// Move destination or wall anchor outside the grid.
    #[error("move or wall anchor is outside the board")]
    OutOfBounds,

    /// Destination occupied without a valid jump, or the movement edge is
    /// blocked by a wall.
    #[error("destination is occupied or blocked by a wall")]
    OccupiedOrBlocked,

    /// Duplicate, crossing, or colinear-adjacent wall.
    #[error("wall overlaps or crosses another wall")]
    WallOverlap,

    /// Placement would leave some player with no path to their goal.
    #[error("wall would block all paths to a goal row")]
    WallSeversPath,

    /// The mover's wall inventory is empty.
    #[error("no walls remaining")]
    NoWallsRemaining,

    /// Action submitted for a player who is not the current mover.
    #[error("not this player's turn")]
    NotYourTurn,

    /// Action submitted after a winner was decided.
    #[error("the game is already over")]
    GameOver,
}
