//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Point, SessionState};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const FIXED_FG: Rgb = Rgb::new(150, 150, 160);

/// A lightweight terminal view of the playfield and side panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner of the board frame in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (snap.width as u16).saturating_mul(self.cell_w);
        let board_px_h = (snap.height as u16).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, frame, border);

        // Fixed cells carry no color; draw them in a neutral tone.
        for y in 0..snap.height {
            for x in 0..snap.width {
                let p = Point::new(x as i32, y as i32);
                if snap.filled(x, y) {
                    self.fill_board_cell(fb, frame, snap, p, '█', CellStyle::new(FIXED_FG, PLAYFIELD_BG));
                } else {
                    let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
                    self.fill_board_cell(fb, frame, snap, p, '·', dot);
                }
            }
        }

        if let Some(ghost) = &snap.ghost {
            let style = CellStyle::new(Rgb::from_argb(ghost.color).darken(), PLAYFIELD_BG).dim();
            for &p in &ghost.cells {
                self.fill_board_cell(fb, frame, snap, p, '░', style);
            }
        }

        if let Some(active) = &snap.active {
            let style = CellStyle::new(Rgb::from_argb(active.color), PLAYFIELD_BG).bold();
            for &p in &active.cells {
                self.fill_board_cell(fb, frame, snap, p, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.state {
            SessionState::Paused => self.draw_overlay_text(fb, frame, "PAUSED"),
            SessionState::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
            SessionState::NotStarted => self.draw_overlay_text(fb, frame, "PRESS N"),
            SessionState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left corner of board cell `p`
    pub fn cell_origin(&self, snap: &GameSnapshot, viewport: Viewport, p: Point) -> Option<(u16, u16)> {
        if p.x < 0 || p.y < 0 || p.x as usize >= snap.width || p.y as usize >= snap.height {
            return None;
        }
        let frame_w = (snap.width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = (snap.height as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Some((
            x + 1 + p.x as u16 * self.cell_w,
            y + 1 + p.y as u16 * self.cell_h,
        ))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
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

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.y < 0 || p.x as usize >= snap.width || p.y as usize >= snap.height {
            return;
        }
        let px = frame.x + 1 + p.x as u16 * self.cell_w;
        let py = frame.y + 1 + p.y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match &snap.next {
            Some(next) => self.draw_preview(fb, panel_x, y, next),
            None => fb.put_str(panel_x, y, "-", value),
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &PieceSnapshot) {
        let style = CellStyle::new(Rgb::from_argb(next.color), Rgb::new(0, 0, 0)).bold();
        for p in &next.cells {
            if p.x < 0 || p.y < 0 {
                continue;
            }
            let px = x.saturating_add(p.x as u16 * self.cell_w);
            let py = y.saturating_add(p.y as u16 * self.cell_h);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
