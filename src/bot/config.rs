//! Bot tuning parameters.
//!
//! Every weight, probability, and threshold the bot uses is a field here
//! with a sensible default. The constants are tunable, not contracts: the
//! testable guarantees are relative orderings (decisive closeness to goal
//! dominates positional heuristics) and monotonicity of the wall-use
//! probability, not exact values.

use serde::{Deserialize, Serialize};

/// Weights for the static position evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Score magnitude when one side has no path at all.
    pub no_path_score: f64,

    /// Score magnitude when one side is a single move from its goal row.
    pub near_goal_score: f64,

    /// Weight on the path-length differential (opponent minus own).
    pub path_differential: f64,

    /// How much the path differential grows with game progress.
    pub progress_scale: f64,

    /// Early-game pull toward the center column; fades with progress.
    pub center_bias: f64,

    /// Weight on the legal-move-count differential.
    pub mobility: f64,

    /// Weight on the wall-inventory differential.
    pub wall_inventory: f64,

    /// Inventory multiplier when the path race is close (within 2 moves).
    pub close_race_inventory_boost: f64,

    /// Weight on coarse territory control; kept small.
    pub territory: f64,

    /// Weight on rows already advanced; grows with progress.
    pub row_progress: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            no_path_score: 10_000.0,
            near_goal_score: 5_000.0,
            path_differential: 10.0,
            progress_scale: 1.5,
            center_bias: 1.0,
            mobility: 0.5,
            wall_inventory: 1.0,
            close_race_inventory_boost: 2.0,
            territory: 0.05,
            row_progress: 2.0,
        }
    }
}

/// Bot configuration: evaluation weights plus strategy parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Seed for the bot's decision RNG.
    pub seed: u64,

    /// Static evaluation weights.
    pub weights: EvalWeights,

    /// Base wall-use probability when trailing by more than 2 moves.
    pub catchup_wall_bias: f64,

    /// Base wall-use probability when leading by more than 2 moves.
    pub maintain_wall_bias: f64,

    /// Base wall-use probability in balanced positions.
    pub balanced_wall_bias: f64,

    /// How strongly the opponent's closeness to goal raises wall use.
    pub threat_weight: f64,

    /// Upper clamp on the wall-use probability.
    pub max_wall_probability: f64,

    /// Bonus per move the candidate wall adds to the opponent's path.
    pub detour_bonus: f64,

    /// Penalty per wall already spent, discouraging placement when the
    /// inventory runs low.
    pub scarcity_penalty: f64,

    /// How many cells of a path prefix the wall search samples for
    /// strategic spots.
    pub path_prefix_limit: usize,

    /// A path cell counts as a narrow corridor when it has at most this
    /// many unobstructed exits.
    pub corridor_max_exits: usize,

    /// An opponent counter-wall matters when it would lengthen our path
    /// by at least this many moves.
    pub counter_wall_threshold: usize,

    /// Penalty per move of the worst counter-wall's detour.
    pub counter_wall_penalty: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weights: EvalWeights::default(),
            catchup_wall_bias: 0.55,
            maintain_wall_bias: 0.20,
            balanced_wall_bias: 0.35,
            threat_weight: 0.4,
            max_wall_probability: 0.95,
            detour_bonus: 8.0,
            scarcity_penalty: 2.0,
            path_prefix_limit: 6,
            corridor_max_exits: 2,
            counter_wall_threshold: 4,
            counter_wall_penalty: 6.0,
        }
    }
}

impl BotConfig {
    /// Create a config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a config with custom evaluation weights.
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}
