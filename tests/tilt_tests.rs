//! Tilt engine tests - sliding, merging and the changed flag in all directions

use tui_2048::core::{slide_line, tilt, Grid};
use tui_2048::types::Direction;

fn grid(rows: &[[u32; 4]; 4]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_leading_pair_rule_east() {
    let g = grid(&[[0, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let out = tilt(&g, Direction::East);

    assert_eq!(out.grid, grid(&[[0, 0, 2, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
    assert_eq!(out.score_delta, 4);
    assert_eq!(out.merges, 1);
    assert!(out.changed);
}

#[test]
fn test_leading_pair_rule_line() {
    // The last slot is the wall.
    let mut line = [None, Some(2), Some(2), Some(2)];
    assert_eq!(slide_line(&mut line), 4);
    assert_eq!(line, [None, None, Some(2), Some(4)]);
}

#[test]
fn test_four_in_a_row_every_direction() {
    let row = grid(&[[2, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

    let west = tilt(&row, Direction::West);
    assert_eq!(west.grid, grid(&[[4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
    assert_eq!(west.score_delta, 8);
    assert!(west.changed);

    let east = tilt(&row, Direction::East);
    assert_eq!(east.grid, grid(&[[0, 0, 4, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
    assert_eq!(east.score_delta, 8);

    let col = grid(&[[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0]]);

    let north = tilt(&col, Direction::North);
    assert_eq!(north.grid, grid(&[[4, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));
    assert_eq!(north.score_delta, 8);

    let south = tilt(&col, Direction::South);
    assert_eq!(south.grid, grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]]));
    assert_eq!(south.score_delta, 8);
}

#[test]
fn test_three_in_a_column_north_and_south() {
    // Column 1, bottom three cells hold 2s.
    let g = grid(&[[0, 0, 0, 0], [0, 2, 0, 0], [0, 2, 0, 0], [0, 2, 0, 0]]);

    // North: the two nearest the top merge, the bottom one trails.
    let north = tilt(&g, Direction::North);
    assert_eq!(north.grid, grid(&[[0, 4, 0, 0], [0, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]));

    // South: the two nearest the bottom merge.
    let south = tilt(&g, Direction::South);
    assert_eq!(south.grid, grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 2, 0, 0], [0, 4, 0, 0]]));
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    let g = grid(&[[8, 4, 2, 2], [4, 4, 8, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let out = tilt(&g, Direction::East);

    // 2+2 -> 4 must not join the 4, which must not join the 8.
    assert_eq!(out.grid, grid(&[[0, 8, 4, 4], [0, 0, 8, 8], [0, 0, 0, 0], [0, 0, 0, 0]]));
    assert_eq!(out.score_delta, 4 + 8);
    assert_eq!(out.merges, 2);
}

#[test]
fn test_distinct_values_against_wall_do_not_change() {
    let g = grid(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

    let out = tilt(&g, Direction::West);
    assert!(!out.changed);
    assert_eq!(out.grid, g);
    assert_eq!(out.score_delta, 0);

    // North: already on the top wall as well.
    assert!(!tilt(&g, Direction::North).changed);

    // The row is full, so east has nowhere to go either.
    assert!(!tilt(&g, Direction::East).changed);

    let south = tilt(&g, Direction::South);
    assert!(south.changed);
    assert_eq!(south.score_delta, 0);
    assert_eq!(south.grid, grid(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 4, 8, 16]]));
}

#[test]
fn test_full_board_without_pairs_is_a_no_op() {
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    for dir in Direction::ALL {
        let out = tilt(&g, dir);
        assert!(!out.changed, "{:?} changed a locked board", dir);
        assert_eq!(out.grid, g);
        assert_eq!(out.score_delta, 0);
    }
}

#[test]
fn test_tilt_does_not_modify_input() {
    let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]]);
    let before = g.clone();
    let _ = tilt(&g, Direction::West);
    let _ = tilt(&g, Direction::North);
    assert_eq!(g, before);
}

#[test]
fn test_opposite_tilt_does_not_restore_after_merge() {
    // Merges are lossy: west then east cannot bring back the two 2s.
    let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let west = tilt(&g, Direction::West);
    let back = tilt(&west.grid, Direction::East);
    assert_ne!(back.grid, g);
    assert_eq!(back.grid.tile_sum(), g.tile_sum());
}

#[test]
fn test_mixed_board_west() {
    let g = grid(&[[2, 0, 2, 4], [0, 4, 4, 4], [8, 8, 8, 8], [16, 0, 0, 16]]);
    let out = tilt(&g, Direction::West);
    assert_eq!(
        out.grid,
        grid(&[[4, 4, 0, 0], [8, 4, 0, 0], [16, 16, 0, 0], [32, 0, 0, 0]])
    );
    assert_eq!(out.score_delta, 4 + 8 + 32 + 32);
    assert_eq!(out.merges, 5);
}

#[test]
fn test_single_cell_grid() {
    let g = Grid::from_rows(&[[2]]).unwrap();
    for dir in Direction::ALL {
        let out = tilt(&g, dir);
        assert!(!out.changed);
        assert_eq!(out.grid, g);
    }
}

#[test]
fn test_large_grid_line() {
    let mut g = Grid::new(8).unwrap();
    for col in 0..8 {
        g.set(col, 7, Some(2)).unwrap();
    }
    let out = tilt(&g, Direction::East);
    for col in 0..4 {
        assert_eq!(out.grid.get(col, 7), Ok(None));
    }
    for col in 4..8 {
        assert_eq!(out.grid.get(col, 7), Ok(Some(4)));
    }
    assert_eq!(out.score_delta, 16);
}
