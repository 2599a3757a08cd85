//! GameView: maps a `StageSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, StageSnapshot};
use crate::fb::{FrameBuffer, Tone};
use crate::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Glyphs used for board cells
const FLOOR: char = '·';
const BLOCK: char = '█';
const FIXED: char = '▓';
const SHADOW: char = '░';

/// Widest cell the view accepts, in terminal columns
pub const MAX_CELL_W: u16 = 8;

/// Renders the stage centered in the viewport with a side panel when there is room.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares typical terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Size of the bordered board frame in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// When the snapshot reports game over, only fixed cells are drawn, in the
    /// game-over tone, with no active piece and no shadow.
    pub fn render_into(&self, snap: &StageSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (ch, tone) = match (cell, snap.is_end) {
                    (CellState::Fixed, true) => (FIXED, Tone::GameOver),
                    (CellState::Fixed, false) => (FIXED, Tone::Fixed),
                    (CellState::Falling, false) => (BLOCK, Tone::Falling),
                    _ => (FLOOR, Tone::Floor),
                };
                self.fill_cell(fb, origin_x, origin_y, x as i8, y as i8, ch, tone);
            }
        }

        if snap.is_end {
            overlay(fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        } else {
            // Shadow goes on empty cells only so it never hides the piece itself.
            let active = snap.active;
            for (dx, dy) in get_shape(active.kind, active.rotation) {
                let x = active.x.saturating_add(dx);
                let y = snap.shadow_y.saturating_add(dy);
                if cell_at(snap, x, y) == Some(CellState::Empty) {
                    self.fill_cell(fb, origin_x, origin_y, x, y, SHADOW, Tone::Shadow);
                }
            }
        }

        self.draw_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &StageSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i8,
        y: i8,
        ch: char,
        tone: Tone,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = origin_x + 1 + x as u16 * self.cell_w;
        let py = origin_y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, tone);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &StageSnapshot, viewport: Viewport, x: u16, y: u16) {
        if x.saturating_add(10) > viewport.width {
            return;
        }

        fb.put_str(x, y, "LOCKED", Tone::Label);
        put_u32(fb, x, y.saturating_add(1), snap.locked_pieces, Tone::Text);
        fb.put_str(x, y.saturating_add(3), "LINES", Tone::Label);
        put_u32(fb, x, y.saturating_add(4), snap.cleared_lines, Tone::Text);
        fb.put_str(x, y.saturating_add(6), "DROP", Tone::Label);
        let drop = if snap.can_drop { "ON" } else { "OFF" };
        fb.put_str(x, y.saturating_add(7), drop, Tone::Text);
    }
}

/// Write `value` in decimal without allocating
fn put_u32(fb: &mut FrameBuffer, x: u16, y: u16, value: u32, tone: Tone) {
    let mut digits = [b'0'; 10];
    let mut start = digits.len();
    let mut n = value;
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    for (i, &d) in digits[start..].iter().enumerate() {
        fb.put(x.saturating_add(i as u16), y, d as char, tone);
    }
}

fn cell_at(snap: &StageSnapshot, x: i8, y: i8) -> Option<CellState> {
    if x < 0 || y < 0 {
        return None;
    }
    snap.board
        .get(y as usize)
        .and_then(|row| row.get(x as usize))
        .copied()
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put(x, y, '┌', Tone::Border);
    fb.put(right, y, '┐', Tone::Border);
    fb.put(x, bottom, '└', Tone::Border);
    fb.put(right, bottom, '┘', Tone::Border);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', Tone::Border);
        fb.put(x + dx, bottom, '─', Tone::Border);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', Tone::Border);
        fb.put(right, y + dy, '│', Tone::Border);
    }
}

fn overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(tx, y.saturating_add(h / 2), text, Tone::Label);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_includes_border() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0).frame_size(), (12, 22));
    }

    #[test]
    fn wide_cells_are_clamped() {
        let view = GameView::new(u16::MAX);
        assert_eq!(view.frame_size(), (10 * MAX_CELL_W + 2, 22));

        let snap = StageSnapshot::default();
        let fb = view.render(&snap, Viewport::new(200, 30));
        assert_eq!(fb.width(), 200);
    }

    #[test]
    fn counters_print_in_decimal() {
        let mut fb = FrameBuffer::new(12, 3);
        put_u32(&mut fb, 0, 0, 0, Tone::Text);
        put_u32(&mut fb, 0, 1, 120, Tone::Text);
        put_u32(&mut fb, 0, 2, u32::MAX, Tone::Text);
        assert_eq!(fb.row_text(0), "0           ");
        assert_eq!(fb.row_text(1), "120         ");
        assert_eq!(fb.row_text(2), "4294967295  ");
    }

    #[test]
    fn cell_lookup_rejects_off_board() {
        let snap = StageSnapshot::default();
        assert_eq!(cell_at(&snap, -1, 0), None);
        assert_eq!(cell_at(&snap, 0, 20), None);
        assert_eq!(cell_at(&snap, 9, 19), Some(CellState::Empty));
    }
}
