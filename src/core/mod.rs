//! Core value types: players, positions, walls, actions, state, errors, RNG.
//!
//! Everything here is a plain value. The rules live in `crate::rules`;
//! graph queries live in `crate::board`.

pub mod action;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;
pub mod wall;

pub use action::Action;
pub use error::RuleViolation;
pub use player::{Player, PlayerMap};
pub use position::Position;
pub use rng::{BotRng, BotRngState};
pub use state::{GameState, INITIAL_WALLS};
pub use wall::{Orientation, Wall};
