//! Static position evaluation.
//!
//! Scores a board from one player's perspective; higher is better for
//! that player. Decisive closeness to goal dominates; the positional
//! terms are tie-breakers.

use crate::board::geometry::BOARD_SIZE;
use crate::board::path::shortest_path;
use crate::core::{GameState, Player, Position, INITIAL_WALLS};
use crate::rules::engine::legal_moves_for;

use super::config::EvalWeights;

/// Rows a pawn has advanced from its starting row toward its goal.
pub(crate) fn rows_advanced(state: &GameState, player: Player) -> u8 {
    let row = state.pawn(player).row;
    match player {
        Player::One => BOARD_SIZE - 1 - row,
        Player::Two => row,
    }
}

/// Fraction of the combined wall inventory already spent, in `[0, 1]`.
pub(crate) fn game_progress(state: &GameState) -> f64 {
    (state.walls_placed() as f64 / (2.0 * INITIAL_WALLS as f64)).min(1.0)
}

/// Evaluate a position from `perspective`'s point of view.
///
/// Terminal shortcuts first: a missing path for either side, or either
/// side a single move from its goal, returns a decisive score. Otherwise
/// a weighted sum of the path-length differential (scaled up as the game
/// progresses), a fading center-column bias, mobility, wall inventory
/// (boosted when the race is close), coarse territory control, and
/// progress toward the goal rows.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Player, weights: &EvalWeights) -> f64 {
    let me = perspective;
    let opponent = me.opponent();
    let my_pawn = state.pawn(me);
    let opp_pawn = state.pawn(opponent);

    let Some(my_path) = shortest_path(my_pawn, me.goal_row(), state.walls(), Some(opp_pawn))
    else {
        return -weights.no_path_score;
    };
    let Some(opp_path) =
        shortest_path(opp_pawn, opponent.goal_row(), state.walls(), Some(my_pawn))
    else {
        return weights.no_path_score;
    };

    let my_dist = (my_path.len() - 1) as f64;
    let opp_dist = (opp_path.len() - 1) as f64;

    if my_dist <= 1.0 {
        return weights.near_goal_score;
    }
    if opp_dist <= 1.0 {
        return -weights.near_goal_score;
    }

    let progress = game_progress(state);
    let mut score = 0.0;

    // Path-length race, more decisive late-game
    let differential = opp_dist - my_dist;
    score += weights.path_differential * differential * (1.0 + weights.progress_scale * progress);

    // Center-column bias, fading as the game progresses
    let center = f64::from(BOARD_SIZE / 2);
    score -= weights.center_bias * (f64::from(my_pawn.col) - center).abs() * (1.0 - progress);

    // Mobility differential
    let my_moves = legal_moves_for(state, me).len() as f64;
    let opp_moves = legal_moves_for(state, opponent).len() as f64;
    score += weights.mobility * (my_moves - opp_moves);

    // Wall inventory, weighted up when the race is close
    let inventory_diff =
        f64::from(state.walls_remaining(me)) - f64::from(state.walls_remaining(opponent));
    let inventory_weight = if differential.abs() <= 2.0 {
        weights.wall_inventory * weights.close_race_inventory_boost
    } else {
        weights.wall_inventory
    };
    score += inventory_weight * inventory_diff;

    // Coarse territory control over empty cells
    score += weights.territory * f64::from(territory(my_pawn, opp_pawn));

    // Progress toward goal rows, weighted up late-game
    let advance_diff =
        f64::from(rows_advanced(state, me)) - f64::from(rows_advanced(state, opponent));
    score += weights.row_progress * advance_diff * (1.0 + progress);

    score
}

/// For every empty cell: +1 if it is Manhattan-closer to `mine`, -1 if
/// closer to `theirs`, 0 on ties.
fn territory(mine: Position, theirs: Position) -> i32 {
    let mut balance = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = Position::new(row, col);
            if cell == mine || cell == theirs {
                continue;
            }
            let to_mine = cell.manhattan_distance(mine);
            let to_theirs = cell.manhattan_distance(theirs);
            balance += match to_mine.cmp(&to_theirs) {
                std::cmp::Ordering::Less => 1,
                std::cmp::Ordering::Greater => -1,
                std::cmp::Ordering::Equal => 0,
            };
        }
    }

    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Wall;

    fn weights() -> EvalWeights {
        EvalWeights::default()
    }

    #[test]
    fn test_initial_position_is_symmetric() {
        let state = GameState::new();

        let p1 = evaluate(&state, Player::One, &weights());
        let p2 = evaluate(&state, Player::Two, &weights());

        assert!((p1 - p2).abs() < 1e-9);
    }

    #[test]
    fn test_shorter_path_scores_higher() {
        let mut ahead = GameState::new();
        ahead.set_pawn(Player::One, Position::new(4, 4));

        let baseline = evaluate(&GameState::new(), Player::One, &weights());
        let improved = evaluate(&ahead, Player::One, &weights());

        assert!(improved > baseline);
    }

    #[test]
    fn test_near_goal_is_decisive() {
        let mut state = GameState::new();
        state.set_pawn(Player::One, Position::new(1, 0));

        assert_eq!(evaluate(&state, Player::One, &weights()), weights().near_goal_score);
        assert_eq!(evaluate(&state, Player::Two, &weights()), -weights().near_goal_score);
    }

    #[test]
    fn test_wall_advantage_counts() {
        let mut state = GameState::new();
        // Simulate the opponent having spent three walls
        state.place_wall(Player::Two, Wall::horizontal(6, 0));
        state.place_wall(Player::Two, Wall::horizontal(6, 2));
        state.place_wall(Player::Two, Wall::vertical(0, 6));

        // None of these walls lengthen either center-column path, so the
        // inventory differential (10 vs 7) is the only asymmetric term
        let score = evaluate(&state, Player::One, &weights());
        let mirror = evaluate(&state, Player::Two, &weights());

        assert_eq!(state.walls_remaining(Player::Two), 7);
        assert!(score > 0.0);
        assert!(mirror < 0.0);
    }

    #[test]
    fn test_no_path_dominates() {
        // A full barrier across the board seals both players away from
        // their goal rows; each perspective sees its own missing path
        // first and scores the worst possible value.
        let mut state = GameState::new();
        for col in [0u8, 2, 4, 6] {
            state.place_wall(Player::Two, Wall::horizontal(3, col));
        }
        state.place_wall(Player::Two, Wall::vertical(3, 7));
        state.place_wall(Player::Two, Wall::horizontal(2, 7));

        assert_eq!(evaluate(&state, Player::One, &weights()), -weights().no_path_score);
        assert_eq!(evaluate(&state, Player::Two, &weights()), -weights().no_path_score);
    }

    #[test]
    fn test_territory_balance_is_antisymmetric() {
        let a = Position::new(6, 2);
        let b = Position::new(2, 6);
        assert_eq!(territory(a, b), -territory(b, a));
    }
}
