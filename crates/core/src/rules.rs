//! Game-over rules - pure predicates over a grid
//!
//! The game ends when a tile reaches the target value, or when no tilt in
//! any direction could change the board.

use crate::grid::Grid;
use crate::tilt::can_merge;

/// Orthogonal neighbor offsets as (dcol, drow)
const NEIGHBORS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// True if any tile is at least `threshold`
pub fn has_max_tile(grid: &Grid, threshold: u32) -> bool {
    grid.iter_tiles().any(|(_, _, value)| value >= threshold)
}

/// True if at least one tilt could change the board.
///
/// That is the case when a cell is empty, or when two orthogonally adjacent
/// tiles hold the same (still mergeable) value. Every cell is compared with
/// each of its in-bounds neighbors.
pub fn has_any_move(grid: &Grid) -> bool {
    if !grid.is_full() {
        return true;
    }

    let size = grid.size();
    for (col, row, value) in grid.iter_tiles() {
        for (dc, dr) in NEIGHBORS {
            let (Some(nc), Some(nr)) = (col.checked_add_signed(dc), row.checked_add_signed(dr)) else {
                continue;
            };
            if nc >= size || nr >= size {
                continue;
            }
            if let Some(other) = grid.cell(nc, nr) {
                if can_merge(value, other) {
                    return true;
                }
            }
        }
    }
    false
}

/// True if the game is finished: a tile reached `threshold` or no move is left
pub fn is_game_over(grid: &Grid, threshold: u32) -> bool {
    has_max_tile(grid, threshold) || !has_any_move(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilt::tilt;
    use crate::types::Direction;

    #[test]
    fn test_empty_grid_has_moves() {
        let grid = Grid::new(4).unwrap();
        assert!(has_any_move(&grid));
        assert!(!has_max_tile(&grid, 2));
    }

    #[test]
    fn test_equal_pair_on_each_edge() {
        // One equal pair per case, placed along each edge and corner of an
        // otherwise unmergeable board.
        let base = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let pairs = [
            ((0, 3), (1, 3)), // top edge, top-left corner
            ((3, 3), (3, 2)), // right edge, top-right corner
            ((3, 0), (2, 0)), // bottom edge, bottom-right corner
            ((0, 0), (0, 1)), // left edge, bottom-left corner
            ((1, 1), (2, 1)), // interior
        ];
        for ((c1, r1), (c2, r2)) in pairs {
            let mut grid = Grid::from_rows(&base).unwrap();
            assert!(!has_any_move(&grid));
            grid.set(c1, r1, Some(64)).unwrap();
            grid.set(c2, r2, Some(64)).unwrap();
            assert!(has_any_move(&grid), "pair ({c1},{r1})-({c2},{r2}) missed");
        }
    }

    #[test]
    fn test_has_any_move_agrees_with_tilt() {
        let grid = Grid::from_rows(&[[2, 4, 8], [4, 8, 2], [8, 2, 8]]).unwrap();
        let any_tilt_changes = Direction::ALL.iter().any(|&d| tilt(&grid, d).changed);
        assert_eq!(has_any_move(&grid), any_tilt_changes);
    }

    #[test]
    fn test_max_tile_is_threshold_based() {
        let grid = Grid::from_rows(&[[4096, 0], [0, 0]]).unwrap();
        assert!(has_max_tile(&grid, 2048));
        assert!(is_game_over(&grid, 2048));
        assert!(!has_max_tile(&grid, 8192));
    }
}
