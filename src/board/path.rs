//! BFS reachability over the walled grid.
//!
//! All edges are unweighted, so breadth-first search returns a path that
//! is shortest in move count. The grid has 81 cells, each visited at most
//! once, so every query terminates with a queue bounded by 81.

use std::collections::VecDeque;

use crate::board::geometry::{Direction, BOARD_SIZE};
use crate::board::ledger::WallLedger;
use crate::core::Position;

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

fn cell_index(p: Position) -> usize {
    p.row as usize * BOARD_SIZE as usize + p.col as usize
}

/// Shortest path from `from` to any cell in `goal_row`, or `None` if no
/// path exists.
///
/// The returned path includes `from` as its first element; if `from` is
/// already on the goal row it is the single-element path. `blocked` marks
/// one cell (the other pawn) as impassable; the severing gate uses
/// [`path_exists`], which ignores pawns, since pawns move and walls do not.
///
/// Ties between equally short paths are broken by the traversal order
/// up, down, left, right.
#[must_use]
pub fn shortest_path(
    from: Position,
    goal_row: u8,
    walls: &WallLedger,
    blocked: Option<Position>,
) -> Option<Vec<Position>> {
    let mut visited = [false; CELLS];
    let mut parent: [Option<Position>; CELLS] = [None; CELLS];
    let mut queue = VecDeque::with_capacity(CELLS);

    visited[cell_index(from)] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        if cur.row == goal_row {
            return Some(reconstruct(cur, &parent));
        }

        for dir in Direction::ALL {
            let Some(next) = dir.step(cur) else { continue };
            if visited[cell_index(next)] {
                continue;
            }
            if blocked == Some(next) {
                continue;
            }
            if walls.blocks(cur, next) {
                continue;
            }

            visited[cell_index(next)] = true;
            parent[cell_index(next)] = Some(cur);
            queue.push_back(next);
        }
    }

    None
}

/// Whether any cell in `goal_row` is reachable from `from`.
///
/// Pawn occupancy is ignored: this is the connectivity question behind the
/// wall-severing rule, and a pawn never permanently disconnects the board.
#[must_use]
pub fn path_exists(from: Position, goal_row: u8, walls: &WallLedger) -> bool {
    let mut visited = [false; CELLS];
    let mut queue = VecDeque::with_capacity(CELLS);

    visited[cell_index(from)] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        if cur.row == goal_row {
            return true;
        }

        for dir in Direction::ALL {
            let Some(next) = dir.step(cur) else { continue };
            if !visited[cell_index(next)] && !walls.blocks(cur, next) {
                visited[cell_index(next)] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

fn reconstruct(goal: Position, parent: &[Option<Position>; CELLS]) -> Vec<Position> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(prev) = parent[cell_index(cur)] {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
