//! # quoridor-engine
//!
//! A rules engine and heuristic adversary for two-player Quoridor:
//! pawns race across a 9x9 grid while placing walls to obstruct the
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: All rules operate on a `GameState` value passed
//!    in and returned; the engine holds no process-wide mutable state.
//!
//! 2. **Validate, Then Mutate**: `rules::apply` rejects an illegal action
//!    with a specific [`RuleViolation`] and leaves the state untouched.
//!
//! 3. **Connectivity Is Sacred**: No wall placement may sever the last
//!    path of *either* player to their goal row. Every wall candidate,
//!    whether from a human or the bot's search, passes the same gate.
//!
//! 4. **Deterministic Bot**: The adversary's probabilistic decisions run
//!    on a seeded RNG; the same seed over the same states reproduces the
//!    same actions.
//!
//! ## Architecture
//!
//! - **Single-ply lookahead**: The bot classifies the position into a
//!   strategic regime and scores candidate actions with a static
//!   evaluation function. No minimax tree search.
//!
//! - **Bounded search**: BFS visits at most 81 cells; the wall search
//!   considers at most 128 anchors. Every query terminates.
//!
//! ## Modules
//!
//! - `core`: Players, positions, walls, actions, game state, errors, RNG
//! - `board`: Grid geometry, the wall ledger, BFS reachability
//! - `rules`: Move/wall legality, action application, win detection
//! - `bot`: Regime classification, evaluation, wall search, strategy

pub mod core;
pub mod board;
pub mod rules;
pub mod bot;

// Re-export commonly used types
pub use crate::core::{
    Action, BotRng, BotRngState, GameState, Orientation, Player, PlayerMap,
    Position, RuleViolation, Wall, INITIAL_WALLS,
};

pub use crate::board::{
    path_exists, shortest_path, Direction, WallLedger, BOARD_SIZE,
};

pub use crate::rules::{
    apply, check_win, legal_moves, legal_moves_for, legal_walls, new_game,
    wall_severs_path,
};

pub use crate::bot::{
    classify, evaluate, wall_probability, Bot, BotConfig, EvalWeights, Regime,
};
