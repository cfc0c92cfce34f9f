//! Board facts and graph queries: grid geometry, the wall ledger, and
//! BFS reachability.

pub mod geometry;
pub mod ledger;
pub mod path;

pub use geometry::{Direction, BOARD_SIZE};
pub use ledger::WallLedger;
pub use path::{path_exists, shortest_path};
