//! The bot's decision procedure: classify, dispatch, fall back.

use tracing::{debug, warn};

use crate::board::path::shortest_path;
use crate::core::{Action, BotRng, GameState, Player, Position, Wall, INITIAL_WALLS};
use crate::rules::engine::{is_wall_legal, legal_moves};

use super::config::BotConfig;
use super::evaluator::evaluate;
use super::regime::{classify, Regime};
use super::wall_search::{direct_block, find_best_wall};

/// Probability that the bot reaches for a wall instead of moving, in the
/// probabilistic regimes.
///
/// Guaranteed monotone: fewer walls remaining lowers it (to zero at an
/// empty inventory); an opponent closer to their goal raises it. The
/// exact values are tunable, the monotonicity is the contract.
#[must_use]
pub fn wall_probability(
    regime: Regime,
    walls_remaining: u8,
    opponent_distance: usize,
    config: &BotConfig,
) -> f64 {
    let base = match regime {
        Regime::Catchup => config.catchup_wall_bias,
        Regime::MaintainLead => config.maintain_wall_bias,
        Regime::Balanced => config.balanced_wall_bias,
        // The remaining regimes never flip this coin
        _ => 0.0,
    };

    let inventory = f64::from(walls_remaining) / f64::from(INITIAL_WALLS);
    // Most distant possible crossing is 2 * (N - 1) moves
    let threat = 1.0 - (opponent_distance.min(16) as f64 / 16.0);

    ((base + config.threat_weight * threat) * inventory).min(config.max_wall_probability)
}

/// The heuristic adversary.
///
/// Holds only configuration and a seeded RNG; all position knowledge is
/// recomputed fresh from the `GameState` each turn.
#[derive(Clone, Debug)]
pub struct Bot {
    config: BotConfig,
    rng: BotRng,
}

impl Bot {
    /// Create a bot; the RNG is seeded from the config.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        let rng = BotRng::new(config.seed);
        Self { config, rng }
    }

    /// The bot's configuration.
    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Choose an action for the current mover.
    ///
    /// The result is always legal for the mover, or `Skip` when no legal
    /// action exists (a modeling gap worth investigating; logged at
    /// `warn`). Call only on non-terminal states.
    pub fn choose_action(&mut self, state: &GameState) -> Action {
        let player = state.turn();
        let opponent = player.opponent();

        let my_path = shortest_path(
            state.pawn(player),
            player.goal_row(),
            state.walls(),
            Some(state.pawn(opponent)),
        );
        let opp_path = shortest_path(
            state.pawn(opponent),
            opponent.goal_row(),
            state.walls(),
            Some(state.pawn(player)),
        );
        let my_distance = my_path.as_ref().map(|p| p.len() - 1);
        let opp_distance = opp_path.as_ref().map(|p| p.len() - 1);

        let regime = classify(my_distance, opp_distance);
        debug!(?regime, ?my_distance, ?opp_distance, %player, "position classified");

        match regime {
            // Race: step along our path, never spend a wall
            Regime::Winning | Regime::Rush => self
                .path_step(state, my_path.as_deref())
                .unwrap_or_else(|| self.fallback(state, my_path.as_deref(), false)),

            // Block first, move only if no improving wall exists
            Regime::Emergency => find_best_wall(state, player, &self.config)
                .map(Action::place)
                .unwrap_or_else(|| self.fallback(state, my_path.as_deref(), true)),

            Regime::Desperate => self
                .desperate_recovery(state, player)
                .unwrap_or_else(|| self.fallback(state, my_path.as_deref(), true)),

            Regime::Catchup | Regime::MaintainLead | Regime::Balanced => {
                // opp_distance is Some in these regimes by classification
                let opp_dist = opp_distance.unwrap_or(usize::MAX);
                let p = wall_probability(
                    regime,
                    state.walls_remaining(player),
                    opp_dist,
                    &self.config,
                );
                if self.rng.gen_bool(p) {
                    // The coin committed to a wall: keep walls in play all
                    // the way down the fallback chain
                    return find_best_wall(state, player, &self.config)
                        .map(Action::place)
                        .unwrap_or_else(|| self.fallback(state, my_path.as_deref(), true));
                }
                self.fallback(state, my_path.as_deref(), false)
            }
        }
    }

    /// One step along our own shortest path, if it is a legal move.
    fn path_step(&self, state: &GameState, my_path: Option<&[Position]>) -> Option<Action> {
        let next = *my_path?.get(1)?;
        legal_moves(state)
            .contains(&next)
            .then_some(Action::move_to(next))
    }

    /// Best-effort recovery when our own path is gone: find a placed wall
    /// whose removal would restore it, then try to place a flipped wall
    /// beside the culprit to pry open an alternative route.
    ///
    /// The culprit test uses the same pawn-blocking path notion that
    /// classified the position, since in legal play a lost path always
    /// means the opponent's pawn seals a walled pocket. The flipped
    /// candidates may still all fail the overlap or severing gates, so
    /// this remains a soft fallback rather than a guarantee.
    fn desperate_recovery(&self, state: &GameState, player: Player) -> Option<Action> {
        if state.walls_remaining(player) == 0 {
            return None;
        }
        let opponent = state.pawn(player.opponent());

        for culprit in state.walls().iter() {
            let reduced = state.walls().without(&culprit);
            if shortest_path(state.pawn(player), player.goal_row(), &reduced, Some(opponent))
                .is_none()
            {
                continue;
            }

            debug!(wall = %culprit, "found wall whose removal would restore a path");
            for candidate in flipped_neighbors(culprit) {
                if is_wall_legal(state, candidate) {
                    return Some(Action::place(candidate));
                }
            }
        }

        None
    }

    /// The fallback chain: (1) direct block on the opponent's path prefix
    /// when walls are allowed, (2) best single-step move by evaluation,
    /// (3) shortest-path step, (4) any legal move closest to the goal,
    /// (5) the defensive `Skip`.
    fn fallback(
        &self,
        state: &GameState,
        my_path: Option<&[Position]>,
        allow_walls: bool,
    ) -> Action {
        let player = state.turn();

        if allow_walls {
            if let Some(wall) = direct_block(state, player, &self.config) {
                return Action::place(wall);
            }
        }

        if let Some(action) = self.best_move(state, player) {
            return action;
        }

        if let Some(action) = self.path_step(state, my_path) {
            return action;
        }

        if let Some(action) = nearest_goal_move(state, player) {
            return action;
        }

        warn!(%player, "no legal action available; passing the turn");
        Action::Skip
    }

    /// The legal move whose resulting position evaluates best. Ties keep
    /// the first candidate in enumeration order, for reproducibility.
    fn best_move(&self, state: &GameState, player: Player) -> Option<Action> {
        let mut best: Option<(Position, f64)> = None;

        for to in legal_moves(state) {
            let mut next = state.clone();
            next.set_pawn(player, to);
            let score = evaluate(&next, player, &self.config.weights);

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((to, score));
            }
        }

        best.map(|(to, _)| Action::move_to(to))
    }
}

/// Anchors adjacent to a wall, with the opposite orientation.
fn flipped_neighbors(wall: Wall) -> impl Iterator<Item = Wall> {
    let orientation = wall.orientation.flipped();
    let Wall { row, col, .. } = wall;

    [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ]
    .into_iter()
    .map(move |(r, c)| Wall::new(r, c, orientation))
    .filter(|w| w.anchor_in_bounds())
}

/// Any legal move, preferring the one closest to the mover's goal row.
fn nearest_goal_move(state: &GameState, player: Player) -> Option<Action> {
    legal_moves(state)
        .into_iter()
        .min_by_key(|to| to.row.abs_diff(player.goal_row()))
        .map(Action::move_to)
}
