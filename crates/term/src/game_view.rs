//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Tile backgrounds indexed by log2(value) - 1, i.e. 2, 4, 8, ... 2048.
const TILE_COLORS: [Rgb; 11] = [
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

/// Beyond 2048.
const SUPER_TILE: Rgb = Rgb::new(60, 58, 50);

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a 4-digit value with padding and looks roughly square.
        Self { cell_w: 7, cell_h: 3 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the board frame (including the border) for a grid of `size`.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        (
            n.saturating_mul(self.cell_w).saturating_add(2),
            n.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::default().cell(' '));

        let size = snap.grid.size();
        let (frame_w, frame_h) = self.frame_size(size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let frame = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', frame);

        // Row 0 is the bottom of the board, so screen rows run top-down from size - 1.
        for row in 0..size {
            for col in 0..size {
                let cell = snap.grid.get(col, row).ok().flatten();
                let sx = start_x
                    .saturating_add(1)
                    .saturating_add((col as u16).saturating_mul(self.cell_w));
                let sy = start_y
                    .saturating_add(1)
                    .saturating_add(((size - 1 - row) as u16).saturating_mul(self.cell_h));
                self.draw_tile(fb, sx, sy, cell);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        if snap.game_over {
            let text = if snap.won { "YOU WIN!" } else { "GAME OVER" };
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, cell: Option<u32>) {
        // Leave a one-column/one-row gutter of board color between tiles.
        let w = self.cell_w.saturating_sub(1).max(1);
        let h = self.cell_h.saturating_sub(1).max(1);

        let Some(value) = cell else {
            fb.fill_rect(x, y, w, h, ' ', CellStyle::new(DARK_TEXT, EMPTY_BG));
            return;
        };

        let style = tile_style(value);
        fb.fill_rect(x, y, w, h, ' ', style);
        fb.put_u64_centered(x, y.saturating_add(h / 2), w, value as u64, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = y;
        fb.put_str(x, y, "SCORE", label);
        y += 1;
        fb.put_u64(x, y, snap.score, value);
        if snap.last_score_delta > 0 {
            let digits = decimal_width(snap.score);
            fb.put_str(x + digits + 1, y, "+", value);
            fb.put_u64(x + digits + 2, y, snap.last_score_delta, value);
        }
        y += 2;

        fb.put_str(x, y, "BEST", label);
        y += 1;
        fb.put_u64(x, y, snap.max_score.max(snap.score), value);
        y += 2;

        fb.put_str(x, y, "TARGET", label);
        y += 1;
        fb.put_u64(x, y, snap.target_tile as u64, value);
        y += 2;

        fb.put_str(x, y, "MOVES", label);
        y += 1;
        fb.put_u64(x, y, snap.moves as u64, value);
        y += 2;

        let hint = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        fb.put_str(x, y, "arrows/wasd", hint);
        fb.put_str(x, y + 1, "r restart", hint);
        fb.put_str(x, y + 2, "q quit", hint);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle::new(LIGHT_TEXT, Rgb::new(0, 0, 0)).bold();
        let mid = y.saturating_add(h / 2);
        fb.put_str_centered(x, mid, w, text, style);
        fb.put_str_centered(x, mid.saturating_add(1), w, "press r", style);
    }
}

fn tile_style(value: u32) -> CellStyle {
    let rank = value.trailing_zeros() as usize;
    let bg = TILE_COLORS.get(rank.wrapping_sub(1)).copied().unwrap_or(SUPER_TILE);
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::new(fg, bg).bold()
}
