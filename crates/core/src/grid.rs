//! Grid module - fixed-size square storage for tiles
//!
//! The grid is an N x N array of optional tile values stored as a flat,
//! row-major vector. Coordinates are `(col, row)` with `(0, 0)` in the
//! lower-left corner, so row 0 is the bottom edge and `size - 1` the top.
//!
//! The grid enforces its invariants at the mutation boundary: every occupied
//! cell holds a power of two >= 2 (see [`is_valid_tile`]). It has no gameplay
//! behavior of its own; see [`crate::tilt`] and [`crate::rules`].

use std::fmt;

use crate::error::{GridError, GridResult};
use crate::types::{is_valid_tile, Cell, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// N x N board of optional tile values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid with `size` cells per side
    pub fn new(size: usize) -> GridResult<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GridError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Build a grid from rows listed top to bottom, the way a board is drawn.
    ///
    /// `0` marks an empty cell. The first row becomes `row = size - 1`.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[
    ///     [0, 0],
    ///     [2, 4],
    /// ]).unwrap();
    /// assert_eq!(grid.get(0, 0), Ok(Some(2)));
    /// assert_eq!(grid.get(1, 0), Ok(Some(4)));
    /// assert_eq!(grid.get(0, 1), Ok(None));
    /// ```
    pub fn from_rows<const N: usize>(rows: &[[u32; N]]) -> GridResult<Self> {
        if rows.len() != N {
            return Err(GridError::InvalidSize { size: rows.len() });
        }
        let mut grid = Self::new(N)?;
        for (i, values) in rows.iter().enumerate() {
            let row = N - 1 - i;
            for (col, &value) in values.iter().enumerate() {
                let cell = if value == 0 { None } else { Some(value) };
                grid.set(col, row, cell)?;
            }
        }
        Ok(grid)
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> GridResult<usize> {
        if col >= self.size || row >= self.size {
            return Err(GridError::OutOfBounds {
                col,
                row,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Number of cells on one side of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position (col, row)
    pub fn get(&self, col: usize, row: usize) -> GridResult<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at (col, row) with a tile or with nothing.
    ///
    /// Any previous content is replaced. Values that are not valid tiles are
    /// rejected and leave the grid untouched.
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> GridResult<()> {
        let idx = self.index(col, row)?;
        if let Some(value) = cell {
            if !is_valid_tile(value) {
                return Err(GridError::InvalidTile { value });
            }
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Unchecked read used by the tilt engine, whose coordinates are always in range
    #[inline(always)]
    pub(crate) fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Unchecked write used by the tilt engine; values come from valid tiles
    #[inline(always)]
    pub(crate) fn put(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array (row-major, bottom row first)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over occupied cells as `(col, row, value)`
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|v| (i % size, i / size, v)))
    }

    /// Iterate over empty cells as `(col, row)`
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| (i % size, i / size))
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Largest tile on the grid, if any
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

/// Renders the top row first, one `|%4d` column per cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                match self.cell(col, row) {
                    Some(v) => write!(f, "|{:4}", v)?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.index(0, 0), Ok(0));
        assert_eq!(grid.index(3, 0), Ok(3));
        assert_eq!(grid.index(0, 1), Ok(4));
        assert_eq!(grid.index(3, 3), Ok(15));
        assert_eq!(
            grid.index(4, 0),
            Err(GridError::OutOfBounds {
                col: 4,
                row: 0,
                size: 4
            })
        );
        assert!(grid.index(0, 4).is_err());
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(0, 0, Some(2)).unwrap();
        grid.set(1, 2, Some(8)).unwrap();

        assert_eq!(grid.cells[0], Some(2));
        assert_eq!(grid.cells[2 * 4 + 1], Some(8));
    }

    #[test]
    fn test_from_rows_puts_first_row_on_top() {
        let grid = Grid::from_rows(&[[2, 0, 0], [0, 0, 0], [0, 0, 4]]).unwrap();
        assert_eq!(grid.get(0, 2), Ok(Some(2)));
        assert_eq!(grid.get(2, 0), Ok(Some(4)));
        assert_eq!(grid.count_empty(), 7);
    }

    #[test]
    fn test_from_rows_rejects_non_square_input() {
        assert_eq!(
            Grid::from_rows(&[[2, 2, 2], [2, 2, 2]]),
            Err(GridError::InvalidSize { size: 2 })
        );
    }

    #[test]
    fn test_display_matches_board_layout() {
        let grid = Grid::from_rows(&[[2, 0], [0, 128]]).unwrap();
        assert_eq!(grid.to_string(), "|   2|    |\n|    | 128|\n");
    }
}
