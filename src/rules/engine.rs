//! The rules engine.
//!
//! Composes grid geometry, the wall ledger, and BFS reachability into the
//! public command/query surface: `legal_moves`, `legal_walls`, `apply`,
//! `check_win`. Every action goes through the same validation whether it
//! came from a human or the bot.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::geometry::{Direction, BOARD_SIZE};
use crate::board::path::path_exists;
use crate::core::{Action, GameState, Player, Position, RuleViolation, Wall};

/// A mover has at most five destinations: three plain steps plus up to
/// two jump landings past the adjacent opponent.
pub type MoveList = SmallVec<[Position; 5]>;

/// Create a fresh game in the initial layout.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Legal pawn destinations for the current mover.
#[must_use]
pub fn legal_moves(state: &GameState) -> MoveList {
    legal_moves_for(state, state.turn())
}

/// Legal pawn destinations for `player`, regardless of whose turn it is.
///
/// For each orthogonal direction: an in-bounds, unblocked, unoccupied
/// neighbor is a destination. A neighbor occupied by the opponent allows
/// the straight jump over it; if the straight jump is wall-blocked or
/// off-board, the diagonal landings beside the opponent are tried instead.
/// Straight and diagonal jumps from the same approach are never both
/// legal.
#[must_use]
pub fn legal_moves_for(state: &GameState, player: Player) -> MoveList {
    let me = state.pawn(player);
    let opponent = state.pawn(player.opponent());
    let walls = state.walls();
    let mut moves = MoveList::new();

    for dir in Direction::ALL {
        let Some(next) = dir.step(me) else { continue };
        if walls.blocks(me, next) {
            continue;
        }
        if next != opponent {
            moves.push(next);
            continue;
        }

        // Opponent adjacent: straight jump to the cell beyond
        let straight = dir
            .step(next)
            .filter(|&landing| !walls.blocks(next, landing));

        if let Some(landing) = straight {
            moves.push(landing);
        } else {
            // Straight jump blocked by a wall or the board edge: land
            // diagonally beside the opponent instead
            for side in Direction::ALL {
                if side == dir {
                    continue;
                }
                let Some(diagonal) = side.step(next) else { continue };
                if diagonal != me && !walls.blocks(next, diagonal) {
                    moves.push(diagonal);
                }
            }
        }
    }

    moves
}

/// Whether adding `wall` would leave either player with no path to their
/// goal row. A placement is legal only when it preserves at least one
/// path for *every* player, not just the mover's opponent.
#[must_use]
pub fn wall_severs_path(state: &GameState, wall: Wall) -> bool {
    let walls = state.walls().with_wall(wall);

    !(path_exists(state.pawn(Player::One), Player::One.goal_row(), &walls)
        && path_exists(state.pawn(Player::Two), Player::Two.goal_row(), &walls))
}

/// Whether a candidate wall passes every geometric and connectivity gate.
///
/// The mover's inventory is intentionally not consulted here; the caller
/// (or `apply`) checks it.
#[must_use]
pub fn is_wall_legal(state: &GameState, wall: Wall) -> bool {
    wall.anchor_in_bounds() && !state.walls().overlaps(&wall) && !wall_severs_path(state, wall)
}

/// All legal wall placements: every anchor in the 8x8 grid, both
/// orientations, filtered by [`is_wall_legal`].
#[must_use]
pub fn legal_walls(state: &GameState) -> Vec<Wall> {
    let mut walls = Vec::new();

    for row in 0..BOARD_SIZE - 1 {
        for col in 0..BOARD_SIZE - 1 {
            for wall in [Wall::horizontal(row, col), Wall::vertical(row, col)] {
                if is_wall_legal(state, wall) {
                    walls.push(wall);
                }
            }
        }
    }

    walls
}

/// The winner, if any pawn stands on its owner's goal row.
///
/// Both players are checked independently, Player 1 first. A pure query
/// with no side effects.
#[must_use]
pub fn check_win(state: &GameState) -> Option<Player> {
    if state.pawn(Player::One).row == Player::One.goal_row() {
        return Some(Player::One);
    }
    if state.pawn(Player::Two).row == Player::Two.goal_row() {
        return Some(Player::Two);
    }
    None
}

/// Validate and apply an action for `player`.
///
/// On success the state is mutated, the turn advances to the other
/// player, and the win condition is re-checked. On failure the state is
/// unchanged and the specific [`RuleViolation`] is returned.
pub fn apply(state: &mut GameState, player: Player, action: Action) -> Result<(), RuleViolation> {
    if state.is_terminal() {
        return Err(RuleViolation::GameOver);
    }
    if player != state.turn() {
        return Err(RuleViolation::NotYourTurn);
    }

    match action {
        Action::Move { to } => {
            if !to.in_bounds() {
                return Err(RuleViolation::OutOfBounds);
            }
            if !legal_moves_for(state, player).contains(&to) {
                return Err(RuleViolation::OccupiedOrBlocked);
            }
            state.set_pawn(player, to);
        }
        Action::PlaceWall { wall } => {
            if !wall.anchor_in_bounds() {
                return Err(RuleViolation::OutOfBounds);
            }
            if state.walls_remaining(player) == 0 {
                return Err(RuleViolation::NoWallsRemaining);
            }
            if state.walls().overlaps(&wall) {
                return Err(RuleViolation::WallOverlap);
            }
            if wall_severs_path(state, wall) {
                return Err(RuleViolation::WallSeversPath);
            }
            state.place_wall(player, wall);
        }
        Action::Skip => {
            // A pass mutates nothing; the turn still advances
        }
    }

    state.set_turn(player.opponent());

    if let Some(winner) = check_win(state) {
        debug!(%winner, "game over");
        state.set_winner(winner);
    }

    Ok(())
}
