//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Piece;
use crate::engine::Session;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, SessionState};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const FLASH: Rgb = Rgb::new(255, 255, 255);

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

/// Board frame rectangle in terminal cells, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
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

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is blanked and
    /// sized to the viewport first, keeping its allocation.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let engine = session.engine();
        let board = engine.board();

        let board_px_w = board.width().saturating_mul(self.cell_w);
        let board_px_h = board.height().saturating_mul(self.cell_h);
        let frame = Frame {
            x: 0,
            y: 0,
            w: board_px_w.saturating_add(2),
            h: board_px_h.saturating_add(2),
        };
        let frame = Frame {
            x: viewport.width.saturating_sub(frame.w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame.h) / 2,
                AnchorY::Top => 0,
            },
            ..frame
        };

        let bg = Style::new(Rgb::new(80, 80, 90), PLAY_BG);
        fb.fill(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            board_px_w,
            board_px_h,
            ' ',
            bg,
        );
        self.draw_border(fb, frame);

        // Locked cells; rows being cleared fade towards white.
        let progress = engine.clear_progress();
        for y in 0..board.height() {
            let clearing = engine.clearing_rows().contains(&(y as usize));
            for x in 0..board.width() {
                match board.get(x as i32, y as i32) {
                    Some(Some(kind)) => {
                        let mut fg = Rgb::from(kind.rgb());
                        if clearing {
                            fg = fg.lerp(FLASH, progress);
                        }
                        self.draw_block(fb, frame, x, y, fg, '█', false);
                    }
                    _ => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if let Some(ghost) = session.ghost_piece() {
            let fg = Rgb::new(140, 140, 140);
            self.draw_piece(fb, frame, &ghost, fg, '░', true, board.width(), board.height());
        }

        if let Some(current) = engine.current() {
            let fg = Rgb::from(current.kind().rgb());
            self.draw_piece(fb, frame, current, fg, '█', false, board.width(), board.height());
        }

        self.draw_side_panel(fb, session, viewport, frame);

        match session.state() {
            SessionState::Paused => self.draw_overlay_text(fb, frame, "PAUSED"),
            SessionState::GameOver => {
                self.draw_overlay_text(fb, frame, "GAME OVER");
                self.draw_overlay_line(fb, frame, 1, "r restart");
            }
            SessionState::Playing | SessionState::LineClearing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = Style::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        piece: &Piece,
        fg: Rgb,
        ch: char,
        dim: bool,
        board_w: u16,
        board_h: u16,
    ) {
        // Cells above the grid are not drawn.
        for (x, y) in piece.occupied_cells() {
            if x >= 0 && y >= 0 && x < board_w as i32 && y < board_h as i32 {
                self.draw_block(fb, frame, x as u16, y as u16, fg, ch, dim);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        fg: Rgb,
        ch: char,
        dim: bool,
    ) {
        let style = Style::new(fg, PLAY_BG);
        let style = if dim { style.dim() } else { style.bold() };
        self.fill_cell_rect(fb, frame, x, y, ch, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = frame
            .x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = frame
            .y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };
        let engine = session.engine();

        let mut y = frame.y;
        for (name, number) in [
            ("SCORE", engine.score()),
            ("LEVEL", engine.level()),
            ("LINES", engine.lines()),
        ] {
            fb.text(panel_x, y, name, label);
            fb.number(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.text(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        y = self.draw_preview(fb, panel_x, y, Some(engine.next().kind()));
        y = y.saturating_add(1);

        fb.text(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        y = self.draw_preview(fb, panel_x, y, engine.hold_piece());
        y = y.saturating_add(1);

        fb.text(panel_x, y, "GHOST", label);
        fb.text(
            panel_x.saturating_add(6),
            y,
            if session.show_ghost() { "on" } else { "off" },
            value.dim(),
        );
    }

    /// Draw a piece's spawn shape at half width; returns the next free row.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: Option<PieceKind>) -> u16 {
        let Some(kind) = kind else {
            fb.text(x, y, "-", Style::default());
            return y.saturating_add(1);
        };

        let piece = Piece::new(kind, 0, 0);
        let style = Style {
            fg: Rgb::from(kind.rgb()),
            ..Style::default()
        }
        .bold();
        for (col, row) in piece.occupied_cells() {
            fb.fill(
                x.saturating_add((col as u16) * 2),
                y.saturating_add(row as u16),
                2,
                1,
                '█',
                style,
            );
        }
        y.saturating_add(piece.shape().rows() as u16)
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        self.draw_overlay_line(fb, frame, 0, text);
    }

    fn draw_overlay_line(&self, fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
        let y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            ..Style::default()
        }
        .bold();
        fb.text(x, y, text, style);
    }
}
