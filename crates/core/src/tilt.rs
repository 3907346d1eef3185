//! Tilt engine - slides and merges every line of a grid toward one wall
//!
//! A tilt treats the grid as `size` independent lines running in the
//! direction of travel. Each line is read into a small stack buffer,
//! slid by [`slide_line`], and written back. All four directions share the
//! same routine; they differ only in how a `(lane, index)` pair maps to a
//! `(col, row)` cell, see [`line_position`].
//!
//! Merge rules:
//!
//! 1. Two adjacent equal tiles (ignoring gaps) merge into one tile of twice
//!    the value, placed on the wall side. The new value is added to the score.
//! 2. A merged tile is frozen for the rest of the tilt.
//! 3. With three equal tiles in a row, the two nearest the wall merge and the
//!    trailing one stays as it is.
//!
//! The engine is pure: the input grid is never modified.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Cell, Direction, MAX_BOARD_SIZE, MAX_TILE_VALUE};

/// Result of tilting a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiltOutcome {
    /// Grid after sliding and merging
    pub grid: Grid,
    /// Sum of the values created by merges during this tilt
    pub score_delta: u64,
    /// Number of merges performed
    pub merges: usize,
    /// True iff at least one cell differs from the input grid
    pub changed: bool,
}

/// Tilt `grid` toward `direction`, returning the new grid and what happened.
///
/// ```
/// use tui_2048_core::{tilt, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows(&[
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 2, 2, 2],
/// ]).unwrap();
/// let out = tilt(&grid, Direction::East);
/// assert_eq!(out.grid.get(3, 0), Ok(Some(4)));
/// assert_eq!(out.grid.get(2, 0), Ok(Some(2)));
/// assert_eq!(out.score_delta, 4);
/// assert!(out.changed);
/// ```
pub fn tilt(grid: &Grid, direction: Direction) -> TiltOutcome {
    let size = grid.size();
    let mut next = grid.clone();
    let mut score_delta = 0;
    let mut merges = 0;
    let mut changed = false;

    // Grid::new caps size at MAX_BOARD_SIZE, so a line always fits.
    let mut line: ArrayVec<Cell, MAX_BOARD_SIZE> = ArrayVec::new();

    for lane in 0..size {
        line.clear();
        for index in 0..size {
            let (col, row) = line_position(direction, size, lane, index);
            line.push(grid.cell(col, row));
        }

        let (score, merged) = slide(&mut line);
        score_delta += score;
        merges += merged;

        for (index, &cell) in line.iter().enumerate() {
            let (col, row) = line_position(direction, size, lane, index);
            if grid.cell(col, row) != cell {
                next.put(col, row, cell);
                changed = true;
            }
        }
    }

    log::trace!(
        "tilt {}: changed={} merges={} score_delta={}",
        direction.as_str(),
        changed,
        merges,
        score_delta
    );

    TiltOutcome {
        grid: next,
        score_delta,
        merges,
        changed,
    }
}

/// Map position `index` of line `lane` to a `(col, row)` cell.
///
/// Index `size - 1` is always the cell against the wall and index 0 the
/// cell farthest from it. Lanes are columns for North/South and rows for
/// East/West.
pub fn line_position(direction: Direction, size: usize, lane: usize, index: usize) -> (usize, usize) {
    let far = size - 1 - index;
    match direction {
        Direction::North => (lane, index),
        Direction::South => (lane, far),
        Direction::East => (index, lane),
        Direction::West => (far, lane),
    }
}

/// Slide and merge a single line in place, returning the score gained.
///
/// The slice is ordered in the direction of travel: the last element is
/// the cell against the wall. Afterwards all tiles sit at the end of the
/// slice with empties in front.
///
/// ```
/// use tui_2048_core::slide_line;
///
/// let mut line = [None, Some(2), Some(2), Some(2)];
/// assert_eq!(slide_line(&mut line), 4);
/// assert_eq!(line, [None, None, Some(2), Some(4)]);
/// ```
pub fn slide_line(line: &mut [Cell]) -> u64 {
    slide(line).0
}

/// Returns `(score, merges)`.
///
/// Tiles are consumed from the wall end backwards. `pending` holds the last
/// tile seen that has not been placed yet; it either merges with the next
/// tile or is written out unchanged. A merge result is written immediately,
/// so it can never take part in a second merge. The write cursor never
/// passes the read cursor, so no scratch buffer is needed.
fn slide(line: &mut [Cell]) -> (u64, usize) {
    let mut write = line.len();
    let mut pending: Option<u32> = None;
    let mut score = 0;
    let mut merges = 0;

    for read in (0..line.len()).rev() {
        let Some(value) = line[read].take() else {
            continue;
        };
        match pending {
            Some(prev) if can_merge(prev, value) => {
                let merged = prev * 2;
                write -= 1;
                line[write] = Some(merged);
                score += merged as u64;
                merges += 1;
                pending = None;
            }
            Some(prev) => {
                write -= 1;
                line[write] = Some(prev);
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(prev) = pending {
        write -= 1;
        line[write] = Some(prev);
    }

    (score, merges)
}

/// True if two tiles would combine when pushed together
#[inline]
pub(crate) fn can_merge(a: u32, b: u32) -> bool {
    a == b && a < MAX_TILE_VALUE
}
