//! Best-wall placement search.
//!
//! Candidate anchors come from "strategic spots": cells along the
//! opponent's shortest path (and, for defensive placements, along our
//! own) where few exits remain open, the narrow-corridor heuristic.
//! Candidates are ranked by proximity to the opponent, filtered through
//! the full legality gate, scored with the static evaluation plus a
//! detour bonus, and the winner survives a one-ply counter-wall check.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::geometry::neighbors;
use crate::board::ledger::WallLedger;
use crate::board::path::shortest_path;
use crate::core::{GameState, Orientation, Player, Position, Wall, INITIAL_WALLS};
use crate::rules::engine::is_wall_legal;

use super::config::BotConfig;
use super::evaluator::evaluate;

fn path_distance(
    from: Position,
    goal_row: u8,
    walls: &WallLedger,
    blocked: Position,
) -> Option<usize> {
    shortest_path(from, goal_row, walls, Some(blocked)).map(|p| p.len() - 1)
}

/// How many of a cell's exits are in-bounds and not wall-blocked.
fn open_exits(cell: Position, walls: &WallLedger) -> usize {
    neighbors(cell)
        .filter(|&next| !walls.blocks(cell, next))
        .count()
}

/// Cells of a path prefix that qualify as narrow corridors.
fn strategic_spots(path: &[Position], walls: &WallLedger, config: &BotConfig) -> Vec<Position> {
    path.iter()
        .skip(1)
        .take(config.path_prefix_limit)
        .copied()
        .filter(|&cell| open_exits(cell, walls) <= config.corridor_max_exits)
        .collect()
}

/// Every wall anchor whose segment touches an edge of the given cell:
/// the four anchors of the surrounding 2x2 intersection block, both
/// orientations, bounds-filtered.
fn anchors_around(cell: Position) -> impl Iterator<Item = Wall> {
    let rows = cell.row.saturating_sub(1)..=cell.row;
    rows.flat_map(move |row| {
        let cols = cell.col.saturating_sub(1)..=cell.col;
        cols.flat_map(move |col| {
            [
                Wall::new(row, col, Orientation::Horizontal),
                Wall::new(row, col, Orientation::Vertical),
            ]
        })
    })
    .filter(|w| w.anchor_in_bounds())
}

/// A clone of the state with `wall` placed by `player`, turn untouched.
/// Used to score hypothetical placements; legality is the caller's job.
pub(crate) fn simulate_wall(state: &GameState, player: Player, wall: Wall) -> GameState {
    let mut next = state.clone();
    next.place_wall(player, wall);
    next
}

/// The largest detour (in moves) any opponent counter-wall could force on
/// `player`'s path in `state`. Candidates are drawn from the strategic
/// spots along `player`'s own path, the same generator the opponent's
/// search would use.
fn worst_counter_detour(state: &GameState, player: Player, config: &BotConfig) -> usize {
    let opponent = player.opponent();
    if state.walls_remaining(opponent) == 0 {
        return 0;
    }

    let my_pawn = state.pawn(player);
    let opp_pawn = state.pawn(opponent);
    let Some(my_path) = shortest_path(my_pawn, player.goal_row(), state.walls(), Some(opp_pawn))
    else {
        return 0;
    };
    let my_dist = my_path.len() - 1;

    let mut worst = 0;
    let mut seen = FxHashSet::default();

    for spot in strategic_spots(&my_path, state.walls(), config) {
        for wall in anchors_around(spot) {
            if !seen.insert(wall) || !is_wall_legal(state, wall) {
                continue;
            }
            let walls = state.walls().with_wall(wall);
            if let Some(lengthened) = path_distance(my_pawn, player.goal_row(), &walls, opp_pawn) {
                worst = worst.max(lengthened.saturating_sub(my_dist));
            }
        }
    }

    worst
}

/// Find the best wall for `player` to place, or `None` when no candidate
/// scores positively (including after the counter-wall penalty).
#[must_use]
pub fn find_best_wall(state: &GameState, player: Player, config: &BotConfig) -> Option<Wall> {
    if state.walls_remaining(player) == 0 {
        return None;
    }

    let opponent = player.opponent();
    let my_pawn = state.pawn(player);
    let opp_pawn = state.pawn(opponent);
    let walls = state.walls();

    let my_path = shortest_path(my_pawn, player.goal_row(), walls, Some(opp_pawn))?;
    let opp_path = shortest_path(opp_pawn, opponent.goal_row(), walls, Some(my_pawn))?;
    let my_dist = my_path.len() - 1;
    let opp_dist = opp_path.len() - 1;

    // Offensive spots on the opponent's path, then defensive spots on ours
    let mut spots = strategic_spots(&opp_path, walls, config);
    spots.extend(strategic_spots(&my_path, walls, config));

    let mut candidates: Vec<Wall> = Vec::new();
    let mut seen = FxHashSet::default();
    for spot in spots {
        for wall in anchors_around(spot) {
            if seen.insert(wall) {
                candidates.push(wall);
            }
        }
    }

    // Closer to the opponent's pawn first
    candidates.sort_by_key(|w| Position::new(w.row, w.col).manhattan_distance(opp_pawn));

    let spent = INITIAL_WALLS - state.walls_remaining(player);
    let scarcity = config.scarcity_penalty * f64::from(spent);

    let mut best: Option<(Wall, f64)> = None;

    for wall in candidates {
        if !is_wall_legal(state, wall) {
            continue;
        }

        let extended = walls.with_wall(wall);
        let Some(new_my) = path_distance(my_pawn, player.goal_row(), &extended, opp_pawn) else {
            continue;
        };
        let Some(new_opp) = path_distance(opp_pawn, opponent.goal_row(), &extended, my_pawn)
        else {
            continue;
        };

        let my_detour = new_my.saturating_sub(my_dist);
        let opp_detour = new_opp.saturating_sub(opp_dist);

        // A wall that hurts us more than the opponent is self-defeating
        if my_detour > opp_detour {
            continue;
        }

        let simulated = simulate_wall(state, player, wall);
        let score = evaluate(&simulated, player, &config.weights)
            + config.detour_bonus * opp_detour as f64
            - scarcity;

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((wall, score));
        }
    }

    let (wall, mut score) = best?;
    if score <= 0.0 {
        return None;
    }

    // One-ply lookahead: does the opponent hold a punishing counter-wall?
    let after = simulate_wall(state, player, wall);
    let counter = worst_counter_detour(&after, player, config);
    if counter >= config.counter_wall_threshold {
        score -= config.counter_wall_penalty * counter as f64;
        if score <= 0.0 {
            debug!(%wall, counter, "wall candidate discarded after counter-wall check");
            return None;
        }
    }

    Some(wall)
}

/// Direct-block fallback: the first legal wall anchored on the opponent's
/// immediate path prefix, tried in path order, both orientations.
///
/// This is the simplest obstruction the search can produce, used when no
/// strategic candidate scores positively.
#[must_use]
pub(crate) fn direct_block(state: &GameState, player: Player, config: &BotConfig) -> Option<Wall> {
    if state.walls_remaining(player) == 0 {
        return None;
    }

    let opponent = player.opponent();
    let opp_path = shortest_path(
        state.pawn(opponent),
        opponent.goal_row(),
        state.walls(),
        Some(state.pawn(player)),
    )?;

    for spot in opp_path.iter().skip(1).take(config.path_prefix_limit) {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let wall = Wall::new(spot.row, spot.col, orientation);
            if is_wall_legal(state, wall) {
                return Some(wall);
            }
        }
    }

    None
}
