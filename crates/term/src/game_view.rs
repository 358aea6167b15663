//! GameView: maps a core `Snapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Piece, Snapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
const PANEL_GAP: u16 = 3;
const PANEL_WIDTH: u16 = 12;

/// Draws the board, the falling piece and a side panel with score, level and next piece.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let board_w = snap.width.max(0) as u16 * self.cell_w;
        let board_h = snap.height.max(0) as u16;
        let total_w = board_w + 2 + PANEL_GAP + PANEL_WIDTH;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(board_h + 2) / 2;

        let border = CellStyle::default();
        let empty = CellStyle::new(Rgb::new(80, 80, 90), BACKGROUND);

        draw_border(fb, start_x, start_y, board_w + 2, board_h + 2, border);
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, ' ', empty);

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.settled_at(x, y) {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x, y, kind),
                    None => {
                        let (px, py) = self.cell_origin(start_x, start_y, x, y);
                        fb.put_char(px + self.cell_w / 2, py, '.', empty);
                    }
                }
            }
        }

        if let Some(kind) = snap.falling_kind {
            for &(x, y) in &snap.falling_piece_cells {
                self.draw_block(fb, start_x, start_y, x, y, kind);
            }
        }

        let panel_x = start_x + board_w + 2 + PANEL_GAP;
        self.draw_panel(fb, snap, panel_x, start_y + 1);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: i16, y: i16) -> (u16, u16) {
        (start_x + 1 + x as u16 * self.cell_w, start_y + 1 + y as u16)
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i16, y: i16, kind: PieceKind) {
        if x < 0 || y < 0 {
            return;
        }
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        let style = CellStyle::new(Rgb::new(0, 0, 0), kind_color(kind));
        fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &Snapshot, x: u16, y: u16) {
        let label = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));
        let value = CellStyle::default().bold();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_str(x, y + 4, &snap.level.to_string(), value);
        fb.put_str(x, y + 6, "NEXT", label);

        // Laid out around (2, 0) so every shape fits a 4x2 box.
        let preview = Piece::new(snap.next_piece_kind, (2, 0));
        for (bx, by) in preview.offsets() {
            let style = CellStyle::new(Rgb::new(0, 0, 0), kind_color(snap.next_piece_kind));
            fb.fill_rect(x + bx as u16 * self.cell_w, y + 7 + by as u16, self.cell_w, 1, ' ', style);
        }

        let status = if snap.game_over {
            Some("GAME OVER")
        } else if snap.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = status {
            fb.put_str(x, y + 10, text, value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
}

/// Terminal color for each kind's canonical color tag.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind.color_name() {
        "blue" => Rgb::new(60, 110, 230),
        "orange" => Rgb::new(240, 160, 40),
        "cyan" => Rgb::new(60, 210, 220),
        "red" => Rgb::new(220, 60, 60),
        "green" => Rgb::new(80, 200, 90),
        "yellow" => Rgb::new(235, 220, 70),
        "magenta" => Rgb::new(200, 80, 200),
        _ => Rgb::new(200, 200, 200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, GameConfig, PieceFactory};
    use crate::types::Command;

    fn find_text(fb: &FrameBuffer, text: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(text))
    }

    #[test]
    fn renders_panel_labels() {
        let game = Game::default();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
        assert!(find_text(&fb, "SCORE"));
        assert!(find_text(&fb, "LEVEL"));
        assert!(find_text(&fb, "NEXT"));
        assert!(!find_text(&fb, "PAUSED"));
    }

    #[test]
    fn renders_pause_status() {
        let mut game = Game::default();
        game.command(Command::TogglePause);
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
        assert!(find_text(&fb, "PAUSED"));
    }

    #[test]
    fn falling_piece_uses_kind_color() {
        let game = Game::with_factory(GameConfig::default(), PieceFactory::scripted(&[PieceKind::T]));
        let view = GameView::default();
        let fb = view.render(&game.snapshot(), Viewport::new(80, 24));

        // Board is 22 rows tall in a 24 row viewport, centered.
        let total_w = 20 + 2 + PANEL_GAP + PANEL_WIDTH;
        let start_x = (80 - total_w) / 2;
        let (px, py) = view.cell_origin(start_x, 1, 5, 0);
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.style.bg, kind_color(PieceKind::T));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let game = Game::default();
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
