//! Move and wall legality, action application, win detection.

pub mod engine;

pub use engine::{
    apply, check_win, is_wall_legal, legal_moves, legal_moves_for, legal_walls, new_game,
    wall_severs_path, MoveList,
};
