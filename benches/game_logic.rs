use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{has_any_move, tilt, GameState, Grid};
use tui_2048::types::{Direction, GameAction};

fn busy_grid() -> Grid {
    Grid::from_rows(&[[2, 2, 4, 8], [0, 4, 4, 0], [16, 0, 16, 2], [2, 8, 8, 8]]).unwrap_or_default()
}

fn bench_tilt(c: &mut Criterion) {
    let grid = busy_grid();
    for dir in Direction::ALL {
        c.bench_function(&format!("tilt_4x4_{}", dir.as_str()), |b| {
            b.iter(|| tilt(black_box(&grid), black_box(dir)))
        });
    }

    let mut large = Grid::new(16).unwrap_or_default();
    let cells: Vec<_> = large.empty_cells().collect();
    for (i, (col, row)) in cells.into_iter().enumerate() {
        let _ = large.set(col, row, Some(2u32 << (i % 5)));
    }
    c.bench_function("tilt_16x16_west", |b| {
        b.iter(|| tilt(black_box(&large), Direction::West))
    });
}

fn bench_has_any_move(c: &mut Criterion) {
    // Worst case: full and locked, every neighbor is visited.
    let locked = Grid::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .unwrap_or_default();
    c.bench_function("has_any_move_locked", |b| {
        b.iter(|| has_any_move(black_box(&locked)))
    });
}

fn bench_apply_action(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut turn = 0usize;

    c.bench_function("apply_action_cycle", |b| {
        b.iter(|| {
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
            let dir = Direction::ALL[turn % 4];
            turn += 1;
            state.apply_action(GameAction::Tilt(black_box(dir)))
        })
    });
}

criterion_group!(benches, bench_tilt, bench_has_any_move, bench_apply_action);
criterion_main!(benches);
