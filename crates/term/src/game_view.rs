//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Blocks are square on screen. A terminal glyph is about twice as tall as it
//! is wide, so one block is `2k` columns by `k` rows. By default `k` is the
//! largest value that keeps the well within 60% of the viewport width and 80%
//! of its height (never below 1).

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Color, PREVIEW_SIZE};

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

/// How big one grid block is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSize {
    /// Scale with the viewport.
    Fit,
    /// Always `cols` x `rows` terminal cells.
    Fixed { cols: u16, rows: u16 },
}

impl BlockSize {
    /// Block size in terminal cells for a well of `cells_w` x `cells_h`.
    pub fn resolve(self, viewport: Viewport, cells_w: usize, cells_h: usize) -> (u16, u16) {
        match self {
            BlockSize::Fixed { cols, rows } => (cols.max(1), rows.max(1)),
            BlockSize::Fit => {
                let by_width = (0.6 * viewport.width as f64 / cells_w.max(1) as f64) as u16 / 2;
                let by_height = (0.8 * viewport.height as f64 / cells_h.max(1) as f64) as u16;
                let k = by_width.min(by_height).max(1);
                (2 * k, k)
            }
        }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const EMPTY: Style = Style::new(Rgb::new(90, 90, 100), WELL_BG);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const UNIT: Style = Style::new(Rgb::new(130, 130, 130), Rgb::BLACK);
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold();

/// Where everything goes for one frame.
struct Layout {
    block_w: u16,
    block_h: u16,
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    /// Terminal position of grid cell (row, col).
    fn cell_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.x + 1 + col as u16 * self.block_w,
            self.y + 1 + row as u16 * self.block_h,
        )
    }
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    block: BlockSize,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            block: BlockSize::Fit,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// A view with a fixed block size in terminal cells.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            block: BlockSize::Fixed { cols, rows },
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The buffer is resized to the viewport and fully repainted.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let layout = self.layout(snap, viewport);
        self.draw_border(fb, &layout);

        // Locked cells with the active piece painted over them.
        for row in 0..snap.height() {
            for col in 0..snap.width() {
                let (px, py) = layout.cell_origin(row, col);
                match snap.visible_cell(row, col).color() {
                    Some(color) => draw_block(fb, &layout, px, py, color),
                    None => fb.fill(px, py, layout.block_w, layout.block_h, '·', EMPTY),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            let text = "GAME OVER";
            let w = text.chars().count() as u16;
            let x = layout.x + layout.frame_w.saturating_sub(w) / 2;
            fb.text(x, layout.y + layout.frame_h / 2, text, BANNER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::default();
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let (block_w, block_h) = self.block.resolve(viewport, snap.width(), snap.height());
        let frame_w = snap.width() as u16 * block_w + 2;
        let frame_h = snap.height() as u16 * block_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            block_w,
            block_h,
            x: viewport.width.saturating_sub(frame_w) / 2,
            y,
            frame_w,
            frame_h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: &Layout) {
        let (right, bottom) = (l.x + l.frame_w - 1, l.y + l.frame_h - 1);
        fb.fill(l.x + 1, l.y, l.frame_w - 2, 1, '─', BORDER);
        fb.fill(l.x + 1, bottom, l.frame_w - 2, 1, '─', BORDER);
        fb.fill(l.x, l.y + 1, 1, l.frame_h - 2, '│', BORDER);
        fb.fill(right, l.y + 1, 1, l.frame_h - 2, '│', BORDER);
        fb.put(l.x, l.y, '┌', BORDER);
        fb.put(right, l.y, '┐', BORDER);
        fb.put(l.x, bottom, '└', BORDER);
        fb.put(right, bottom, '┘', BORDER);
    }

    /// Score, line count, fall interval and the next piece, right of the well.
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        l: &Layout,
    ) {
        let x = l.x.saturating_add(l.frame_w).saturating_add(2);
        if viewport.width.saturating_sub(x) < PREVIEW_SIZE as u16 * l.block_w {
            return;
        }

        let mut y = l.y;
        fb.text(x, y, "SCORE", LABEL);
        fb.number(x, y + 1, snap.score, VALUE);
        y += 3;

        fb.text(x, y, "LINES", LABEL);
        fb.number(x, y + 1, snap.lines_cleared, VALUE);
        y += 3;

        fb.text(x, y, "SPEED", LABEL);
        let used = fb.number(x, y + 1, snap.tick_interval_ms.round() as u32, VALUE);
        fb.text(x + used, y + 1, "ms", UNIT);
        y += 3;

        fb.text(x, y, "NEXT", LABEL);
        y += 1;
        for (r, slots) in snap.preview().iter().enumerate() {
            for (c, slot) in slots.iter().enumerate() {
                let px = x + c as u16 * l.block_w;
                let py = y + r as u16 * l.block_h;
                match slot {
                    Some(color) => draw_block(fb, l, px, py, *color),
                    None => fb.fill(px, py, l.block_w, l.block_h, ' ', EMPTY),
                }
            }
        }
    }
}

/// One block with its top-left at terminal position (px, py).
fn draw_block(fb: &mut FrameBuffer, l: &Layout, px: u16, py: u16, color: Color) {
    let style = Style::new(color.into(), WELL_BG).bold();
    fb.fill(px, py, l.block_w, l.block_h, '█', style);
}
