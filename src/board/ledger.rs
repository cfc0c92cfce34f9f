//! The wall ledger: placed walls plus the legality predicates over them.
//!
//! Walls live in both a `Vec` (placement order, for replay) and an
//! `FxHashSet` (O(1) membership). Edge-blocking and overlap checks reduce
//! to membership tests on a handful of specific anchors, so every
//! predicate here is constant-time.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Position, Wall};

/// Placed wall segments.
///
/// The ledger stores walls and answers the geometric legality questions:
/// does a wall block this edge, and would a candidate overlap, cross, or
/// sit colinear-adjacent to a placed wall? (Colinear-adjacent walls are
/// forbidden in this rule variant even though they do not geometrically
/// overlap.)
///
/// Path severing is not decided here; it needs reachability and is gated
/// in [`crate::rules::wall_severs_path`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WallLedger {
    walls: Vec<Wall>,
    index: FxHashSet<Wall>,
}

impl WallLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed walls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether no walls have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Placed walls in placement order.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        self.walls.iter().copied()
    }

    /// Whether this exact wall has been placed.
    #[must_use]
    pub fn contains(&self, wall: &Wall) -> bool {
        self.index.contains(wall)
    }

    /// Append a wall. Legality must have been established by the caller.
    pub(crate) fn place(&mut self, wall: Wall) {
        debug_assert!(wall.anchor_in_bounds());
        debug_assert!(!self.overlaps(&wall));
        self.walls.push(wall);
        self.index.insert(wall);
    }

    /// A copy of this ledger with one extra wall, for what-if queries.
    #[must_use]
    pub fn with_wall(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        next.walls.push(wall);
        next.index.insert(wall);
        next
    }

    /// A copy of this ledger with one wall removed, for what-if queries.
    /// Returns an unchanged copy if the wall is not present.
    #[must_use]
    pub fn without(&self, wall: &Wall) -> Self {
        let mut next = self.clone();
        if next.index.remove(wall) {
            next.walls.retain(|w| w != wall);
        }
        next
    }

    /// Whether a placed wall segment lies directly between two orthogonally
    /// adjacent cells.
    ///
    /// A `Horizontal` wall at `(r, c)` blocks the vertical edges
    /// `(r, x)`-`(r + 1, x)` for `x in {c, c + 1}`; a `Vertical` wall at
    /// `(r, c)` blocks the horizontal edges `(x, c)`-`(x, c + 1)` for
    /// `x in {r, r + 1}`.
    #[must_use]
    pub fn blocks(&self, from: Position, to: Position) -> bool {
        debug_assert_eq!(from.manhattan_distance(to), 1);

        if from.col == to.col {
            // Vertical movement: a horizontal wall above the lower cell
            let top = from.row.min(to.row);
            let col = from.col;
            self.contains(&Wall::horizontal(top, col))
                || (col > 0 && self.contains(&Wall::horizontal(top, col - 1)))
        } else {
            // Horizontal movement: a vertical wall left of the right cell
            let left = from.col.min(to.col);
            let row = from.row;
            self.contains(&Wall::vertical(row, left))
                || (row > 0 && self.contains(&Wall::vertical(row - 1, left)))
        }
    }

    /// Whether a candidate duplicates, crosses, or sits colinear-adjacent
    /// to a placed wall.
    #[must_use]
    pub fn overlaps(&self, candidate: &Wall) -> bool {
        let Wall { row, col, orientation } = *candidate;

        // Duplicate at the same anchor, or crossing at the same intersection
        if self.contains(&Wall::horizontal(row, col)) || self.contains(&Wall::vertical(row, col)) {
            return true;
        }

        // Colinear-adjacent: same orientation, anchor offset by one along
        // the segment's axis
        match orientation {
            Orientation::Horizontal => {
                (col > 0 && self.contains(&Wall::horizontal(row, col - 1)))
                    || self.contains(&Wall::horizontal(row, col + 1))
            }
            Orientation::Vertical => {
                (row > 0 && self.contains(&Wall::vertical(row - 1, col)))
                    || self.contains(&Wall::vertical(row + 1, col))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = WallLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert!(!ledger.blocks(Position::new(4, 4), Position::new(3, 4)));
    }

    #[test]
    fn test_horizontal_wall_blocks_vertical_edges() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(3, 2));

        // Both covered columns, both travel directions
        assert!(ledger.blocks(Position::new(3, 2), Position::new(4, 2)));
        assert!(ledger.blocks(Position::new(4, 2), Position::new(3, 2)));
        assert!(ledger.blocks(Position::new(3, 3), Position::new(4, 3)));

        // Adjacent column is unaffected
        assert!(!ledger.blocks(Position::new(3, 4), Position::new(4, 4)));
        assert!(!ledger.blocks(Position::new(3, 1), Position::new(4, 1)));

        // Horizontal movement is unaffected
        assert!(!ledger.blocks(Position::new(3, 2), Position::new(3, 3)));
    }

    #[test]
    fn test_vertical_wall_blocks_horizontal_edges() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::vertical(5, 6));

        assert!(ledger.blocks(Position::new(5, 6), Position::new(5, 7)));
        assert!(ledger.blocks(Position::new(5, 7), Position::new(5, 6)));
        assert!(ledger.blocks(Position::new(6, 6), Position::new(6, 7)));

        assert!(!ledger.blocks(Position::new(4, 6), Position::new(4, 7)));
        assert!(!ledger.blocks(Position::new(7, 6), Position::new(7, 7)));
        assert!(!ledger.blocks(Position::new(5, 6), Position::new(6, 6)));
    }

    #[test]
    fn test_wall_at_edge_of_board() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(0, 0));

        // Column 0 has no wall anchored one to its left; no underflow
        assert!(ledger.blocks(Position::new(0, 0), Position::new(1, 0)));
        assert!(ledger.blocks(Position::new(0, 1), Position::new(1, 1)));
        assert!(!ledger.blocks(Position::new(0, 2), Position::new(1, 2)));
    }

    #[test]
    fn test_overlap_duplicate() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(3, 3));

        assert!(ledger.overlaps(&Wall::horizontal(3, 3)));
    }

    #[test]
    fn test_overlap_crossing() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(3, 3));

        assert!(ledger.overlaps(&Wall::vertical(3, 3)));
    }

    #[test]
    fn test_overlap_colinear_adjacent() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(3, 3));
        ledger.place(Wall::vertical(6, 1));

        // End-to-end parallel walls are forbidden in this variant
        assert!(ledger.overlaps(&Wall::horizontal(3, 2)));
        assert!(ledger.overlaps(&Wall::horizontal(3, 4)));
        assert!(ledger.overlaps(&Wall::vertical(5, 1)));
        assert!(ledger.overlaps(&Wall::vertical(7, 1)));
    }

    #[test]
    fn test_no_overlap_for_clear_anchors() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(3, 3));

        // Two columns away along the same row is fine
        assert!(!ledger.overlaps(&Wall::horizontal(3, 5)));
        // Same column, different row is fine
        assert!(!ledger.overlaps(&Wall::horizontal(4, 3)));
        // Perpendicular at a different anchor is fine
        assert!(!ledger.overlaps(&Wall::vertical(3, 4)));
        // Parallel walls stacked vertically do not touch
        assert!(!ledger.overlaps(&Wall::horizontal(2, 3)));
    }

    #[test]
    fn test_with_wall_leaves_original_unchanged() {
        let ledger = WallLedger::new();
        let extended = ledger.with_wall(Wall::vertical(2, 2));

        assert!(ledger.is_empty());
        assert_eq!(extended.len(), 1);
        assert!(extended.blocks(Position::new(2, 2), Position::new(2, 3)));
    }

    #[test]
    fn test_without_removes_wall() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(4, 4));
        ledger.place(Wall::vertical(1, 1));

        let reduced = ledger.without(&Wall::horizontal(4, 4));

        assert_eq!(reduced.len(), 1);
        assert!(!reduced.contains(&Wall::horizontal(4, 4)));
        assert!(reduced.contains(&Wall::vertical(1, 1)));
        // Original unchanged
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut ledger = WallLedger::new();
        ledger.place(Wall::horizontal(2, 6));
        ledger.place(Wall::vertical(5, 0));

        let json = serde_json::to_string(&ledger).unwrap();
        let restored: WallLedger = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        assert!(restored.contains(&Wall::horizontal(2, 6)));
        assert!(restored.contains(&Wall::vertical(5, 0)));
    }
}
