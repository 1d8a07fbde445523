//! SessionView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSession, Grid, RandomSource};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BOARD_BG, TILE_BOARD_BG};
use crate::types::{FallingCell, Status, TileCell, Variant};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board cell size in terminal columns/rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    pub w: u16,
    pub h: u16,
}

/// Renders either variant; cell sizes are chosen per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    falling_cell: CellSize,
    tile_cell: CellSize,
    anchor_y: AnchorY,
}

impl Default for SessionView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio; tiles need
        // room for a four-digit label.
        Self {
            falling_cell: CellSize { w: 2, h: 1 },
            tile_cell: CellSize { w: 7, h: 3 },
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    cell: CellSize,
}

impl Frame {
    fn cell_origin(&self, cell_x: u16, cell_y: u16) -> (u16, u16) {
        (
            self.x + 1 + cell_x * self.cell.w,
            self.y + 1 + cell_y * self.cell.h,
        )
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

impl SessionView {
    pub fn new(falling_cell: CellSize, tile_cell: CellSize) -> Self {
        Self {
            falling_cell,
            tile_cell,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<R: RandomSource + Clone>(
        &self,
        session: &GameSession<R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = match (session.falling_board(), session.tile_board()) {
            (Some(board), _) => {
                let frame = self.frame_for(board.width(), board.height(), self.falling_cell, viewport);
                self.draw_falling(fb, session, board, frame);
                frame
            }
            (None, Some(board)) => {
                let frame = self.frame_for(board.width(), board.height(), self.tile_cell, viewport);
                self.draw_tiles(fb, board, frame);
                frame
            }
            (None, None) => return,
        };

        self.draw_border(fb, frame);
        self.draw_side_panel(fb, session, viewport, frame);

        let overlay = match session.status() {
            Status::Idle => Some("PRESS R TO START"),
            Status::Paused => Some("PAUSED"),
            Status::GameOver => Some("GAME OVER"),
            Status::Won => Some("YOU WIN!"),
            Status::Running => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, frame, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: RandomSource + Clone>(
        &self,
        session: &GameSession<R>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn frame_for(&self, cols: usize, rows: usize, cell: CellSize, viewport: Viewport) -> Frame {
        let w = (cols as u16).saturating_mul(cell.w).saturating_add(2);
        let h = (rows as u16).saturating_mul(cell.h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h, cell }
    }

    fn draw_falling<R: RandomSource + Clone>(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession<R>,
        board: &Grid<FallingCell>,
        frame: Frame,
    ) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();

        for (y, row) in board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', palette::piece_style(*color)),
                    None => ('·', empty),
                };
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        let Some(active) = session.active_piece() else {
            return;
        };

        if let Some(ghost_y) = session.ghost_y() {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
            for (x, y) in active.translated(0, ghost_y - active.y).cells() {
                if board.cell(x, y).is_some() {
                    self.fill_cell(fb, frame, x as u16, y as u16, '░', ghost);
                }
            }
        }

        let style = palette::piece_style(active.color);
        for (x, y) in session.active_cells() {
            self.fill_cell(fb, frame, x as u16, y as u16, '█', style);
        }
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, board: &Grid<TileCell>, frame: Frame) {
        let bg = CellStyle::new(TILE_BOARD_BG, TILE_BOARD_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);

        // One column and row of board background between tiles.
        let tile_w = frame.cell.w.saturating_sub(1).max(1);
        let tile_h = frame.cell.h.saturating_sub(1).max(1);

        for (y, row) in board.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let (px, py) = frame.cell_origin(x as u16, y as u16);
                let style = palette::tile_style(value);
                fb.fill_rect(px, py, tile_w, tile_h, ' ', style);
                let label = palette::tile_label(value);
                if !label.is_empty() {
                    fb.put_str_centered(px, py + tile_h / 2, tile_w, &label, style);
                }
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let (px, py) = frame.cell_origin(x, y);
        fb.fill_rect(px, py, frame.cell.w, frame.cell.h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h, .. } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_side_panel<R: RandomSource + Clone>(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession<R>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = frame.y;
        let mut entry = |fb: &mut FrameBuffer, label: &str, value: &str| {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_str(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        };

        entry(fb, "SCORE", &session.score().to_string());
        entry(fb, "BEST", &session.best_score().to_string());
        match session.variant() {
            Variant::FallingBlock => {
                entry(fb, "LINES", &session.lines_cleared().to_string());
                if let Some(ms) = session.gravity_interval_ms() {
                    entry(fb, "SPEED", &format!("{ms}ms"));
                }
            }
            Variant::TileMerge => {
                entry(fb, "MAX TILE", &session.max_tile().to_string());
            }
        }
        entry(fb, "STATUS", session.status().as_str());

        let keys = match session.variant() {
            Variant::FallingBlock => "←→↓ move  ↑ rotate  space drop",
            Variant::TileMerge => "←→↑↓ slide",
        };
        let dim = VALUE.dim();
        fb.put_str(panel_x, y, keys, dim);
        fb.put_str(panel_x, y.saturating_add(1), "p pause  r restart  q quit", dim);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(frame.x, mid_y, frame.w, text, style);
    }
}
