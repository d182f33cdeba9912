//! GameView: maps a core [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crossterm::style::Color;

use crate::fb::{rgb, Cell, CellStyle, FrameBuffer};

const BACKGROUND: Color = rgb(0, 0, 0);
const GRID_LINE: CellStyle = CellStyle::new(rgb(90, 90, 90), BACKGROUND);
const BORDER: CellStyle = CellStyle::new(rgb(255, 255, 255), BACKGROUND);
const LOCKED: CellStyle = CellStyle::new(rgb(0, 255, 0), BACKGROUND);
const ACTIVE: CellStyle = CellStyle::new(rgb(255, 0, 0), BACKGROUND);
const SCORE: CellStyle = CellStyle::new(rgb(0, 0, 255), BACKGROUND).bold();
const OVERLAY: CellStyle = CellStyle::new(rgb(255, 255, 255), BACKGROUND).bold();

const FILLED: char = '█';
const EMPTY: char = '·';

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

/// Where the board frame's top-left corner lands for a given snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// Draws the score line, the bordered board, locked cells, the active piece
/// and the game-over overlay.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board frame placement: centred, with one line reserved above it for
    /// the score.
    pub fn layout(&self, snap: &Snapshot, viewport: Viewport) -> Layout {
        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let total_h = frame_h.saturating_add(1);
        Layout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(total_h) / 2 + 1,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can keep one framebuffer across frames.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(snap, viewport);

        self.draw_score(fb, snap, layout);
        self.draw_border(fb, layout);

        for y in 0..snap.height {
            for x in 0..snap.width {
                if snap.is_locked(x as i32, y as i32) {
                    self.fill_cell(fb, layout, x, y, FILLED, LOCKED);
                } else {
                    self.fill_cell(fb, layout, x, y, EMPTY, GRID_LINE);
                }
            }
        }

        for (x, y) in snap.active.grid_cells() {
            if x >= 0 && y >= 0 && x < snap.width as i32 && y < snap.height as i32 {
                self.fill_cell(fb, layout, x as u16, y as u16, FILLED, ACTIVE);
            }
        }

        if !snap.running() {
            self.draw_overlay_text(fb, layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_score(&self, fb: &mut FrameBuffer, snap: &Snapshot, layout: Layout) {
        let Some(y) = layout.frame_y.checked_sub(1) else {
            return;
        };
        let label = "Score: ";
        fb.put_str(layout.frame_x, y, label, SCORE);
        fb.put_u32(
            layout.frame_x.saturating_add(label.len() as u16),
            y,
            snap.score,
            SCORE,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout) {
        let Layout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;

        let right = x.saturating_add(w.saturating_sub(1));
        let bottom = y.saturating_add(h.saturating_sub(1));

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);

        for px in (1..w.saturating_sub(1)).map(|dx| x.saturating_add(dx)) {
            fb.put_char(px, y, '─', BORDER);
            fb.put_char(px, bottom, '─', BORDER);
        }
        for py in (1..h.saturating_sub(1)).map(|dy| y.saturating_add(dy)) {
            fb.put_char(x, py, '│', BORDER);
            fb.put_char(right, py, '│', BORDER);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.frame_x.saturating_add(1).saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = layout.frame_y.saturating_add(1).saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, GameEngine, Grid, ScriptedShapes};
    use crate::types::ShapeKind;

    #[test]
    fn layout_reserves_score_line() {
        let snap = GameEngine::new(EngineConfig::default().with_size(4, 3)).snapshot();
        let view = GameView::default();
        // frame is 4*2+2 wide, 3+2 tall; plus one score line => 10x6 exactly
        let layout = view.layout(&snap, Viewport::new(10, 6));
        assert_eq!(
            layout,
            Layout {
                frame_x: 0,
                frame_y: 1,
                frame_w: 10,
                frame_h: 5,
            }
        );
    }

    #[test]
    fn overlay_only_when_over() {
        let view = GameView::default();
        let vp = Viewport::new(40, 20);

        let running = GameEngine::new(EngineConfig::default().with_size(10, 10)).snapshot();
        assert!(!view.render(&running, vp).to_text().contains("GAME OVER"));

        let blocked = Grid::from_ascii(&["##########", "..........", ".........."]);
        let over = GameEngine::with_grid(
            EngineConfig::default(),
            blocked,
            ScriptedShapes::repeat(ShapeKind::O),
        )
        .snapshot();
        assert!(view.render(&over, vp).to_text().contains("GAME OVER"));
    }

    #[test]
    fn tall_board_clips_instead_of_overflowing() {
        let snap = GameEngine::with_source(
            EngineConfig::default().with_size(1, u16::MAX - 1),
            ScriptedShapes::repeat(ShapeKind::O),
        )
        .snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        // frame is 4 wide, centred; taller than the viewport so it starts
        // right under the score line and runs off the bottom
        assert_eq!(fb.get(38, 1).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(41, 1).map(|c| c.ch), Some('┐'));
        assert_eq!(fb.get(38, 23).map(|c| c.ch), Some('│'));
        assert_eq!(fb.get(41, 23).map(|c| c.ch), Some('│'));
    }

    #[test]
    fn custom_cell_size_scales_frame() {
        let snap = GameEngine::new(EngineConfig::default().with_size(4, 3)).snapshot();
        let layout = GameView::new(1, 2).layout(&snap, Viewport::new(6, 9));
        assert_eq!((layout.frame_w, layout.frame_h), (6, 8));
        assert_eq!((layout.frame_x, layout.frame_y), (0, 1));

        // zero sizes are bumped to one column / row
        let layout = GameView::new(0, 0).layout(&snap, Viewport::new(6, 9));
        assert_eq!((layout.frame_w, layout.frame_h), (6, 5));
    }

    #[test]
    fn truncated_cells_render_as_empty() {
        let mut snap = GameEngine::new(EngineConfig::default().with_size(4, 3)).snapshot();
        snap.cells.truncate(2);
        let text = GameView::default().render(&snap, Viewport::new(10, 6)).to_text();
        assert!(!text.contains("GAME OVER"));
        assert!(text.contains('·'));
    }
}
