//! The heuristic adversary.
//!
//! ## Overview
//!
//! The bot is a classify-then-policy dispatch, not a tree search:
//!
//! 1. Compute both players' shortest paths.
//! 2. Classify the position into a [`Regime`] from the two path lengths.
//! 3. Run that regime's policy: race along the path, hunt for the best
//!    wall, or choose probabilistically between the two.
//! 4. If the policy produces nothing, walk the fallback chain: a direct
//!    block on the opponent's path, the best single-step move by static
//!    evaluation, the shortest-path step, any move toward the goal, and
//!    finally the defensive [`Action::Skip`](crate::core::Action::Skip).
//!
//! Every candidate is pre-filtered through the same legality predicates
//! the rules engine applies, so [`Bot::choose_action`] always returns a
//! legal action (or `Skip`, which the caller should treat as "pass turn"
//! and investigate; it indicates a modeling gap and is logged at `warn`).
//!
//! ## Determinism
//!
//! The only randomness is the wall-vs-move coin flip in the balanced
//! regimes, drawn from a seeded [`BotRng`](crate::core::BotRng). The same
//! `BotConfig` seed over the same state sequence reproduces the same
//! actions.

pub mod config;
pub mod evaluator;
pub mod regime;
pub mod strategy;
pub mod wall_search;

pub use config::{BotConfig, EvalWeights};
pub use evaluator::evaluate;
pub use regime::{classify, Regime};
pub use strategy::{wall_probability, Bot};
pub use wall_search::find_best_wall;
