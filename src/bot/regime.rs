//! Strategic regime classification.
//!
//! Recomputed fresh every turn from the two shortest-path lengths; never
//! persisted. Distances are in moves remaining (`path.len() - 1`).

use serde::{Deserialize, Serialize};

/// The coarse strategic regime of the current position, from the bot's
/// perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// The opponent has no path at all.
    Winning,
    /// We have no path at all.
    Desperate,
    /// The opponent is within two moves of their goal.
    Emergency,
    /// We are within two moves of our goal.
    Rush,
    /// The opponent's path is more than two moves shorter than ours.
    Catchup,
    /// Our path is more than two moves shorter than the opponent's.
    MaintainLead,
    /// Neither side holds a meaningful edge.
    Balanced,
}

/// Classify a position from the two path lengths, in the fixed priority
/// order: missing paths first, goal proximity second, lead size last.
#[must_use]
pub fn classify(own_distance: Option<usize>, opponent_distance: Option<usize>) -> Regime {
    let Some(own) = own_distance else {
        return Regime::Desperate;
    };
    let Some(opponent) = opponent_distance else {
        return Regime::Winning;
    };

    if opponent <= 2 {
        return Regime::Emergency;
    }
    if own <= 2 {
        return Regime::Rush;
    }
    if (opponent as i64) < own as i64 - 2 {
        return Regime::Catchup;
    }
    if (own as i64) < opponent as i64 - 2 {
        return Regime::MaintainLead;
    }

    Regime::Balanced
}
