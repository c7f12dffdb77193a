//! GameView: projects a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Board row 0 is drawn at the
//! bottom of the play field.

use blockfall_core::GameSnapshot;
use blockfall_types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Renders the play field, side panel, and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into a freshly allocated framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, overwriting all of it.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.fill_rect(0, 0, fb.width(), fb.height(), ' ', CellStyle::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let well = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, bottom row at the bottom of the screen.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if let Some(kind) = snap.cells[y][x] {
                    self.draw_cell(fb, start_x, start_y, x as i8, y as i8, kind);
                }
            }
        }

        // Active piece on top.
        if let Some(active) = snap.active {
            for (x, y) in active.cells {
                self.draw_cell(fb, start_x, start_y, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y + 1);

        if snap.paused {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Terminal position of board cell (x, y); flips the y axis.
    fn cell_origin(&self, start_x: u16, start_y: u16, x: i8, y: i8) -> (u16, u16) {
        let screen_row = (BOARD_HEIGHT as i8 - 1 - y) as u16;
        (
            start_x + 1 + (x as u16) * self.cell_w,
            start_y + 1 + screen_row * self.cell_h,
        )
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, kind: ShapeKind) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: kind_color(kind),
            bold: false,
        };
        let (cx, cy) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(cx, cy, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(150, 150, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let value = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "HIGH SCORE", label);
        fb.put_str(x, y + 4, &snap.high_score.to_string(), value);

        if snap.game_over {
            fb.put_str(x, y + 6, "press r to restart", label);
        }
        fb.put_str(x, y + 8, "q quits", label);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
    }
}

/// Per-kind block colors.
fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::Z => Rgb::new(204, 102, 102),
        ShapeKind::S => Rgb::new(102, 204, 102),
        ShapeKind::I => Rgb::new(102, 102, 204),
        ShapeKind::T => Rgb::new(204, 204, 102),
        ShapeKind::O => Rgb::new(204, 102, 204),
        ShapeKind::L => Rgb::new(102, 204, 204),
        ShapeKind::J => Rgb::new(218, 170, 0),
    }
}
