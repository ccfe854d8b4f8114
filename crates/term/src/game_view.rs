//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so every frame can be unit-tested.

use crate::core::{color_of, shadow_color_of, shape_of, GameSnapshot, Mask};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::input::KEY_HELP;
use crate::scores::HighScores;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const BLOCK: char = '█';
const GHOST: char = '▒';

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

/// Driver state the engine does not know about.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub paused: bool,
    /// Shown once the game is over
    pub high_scores: Option<&'a HighScores>,
    /// Rank the last game reached, highlighted in the table
    pub last_rank: Option<usize>,
}

/// Layout of the board and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left corner of the bordered well.
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
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w + 16) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_well(fb, frame, snap);
        self.draw_side_panel(fb, frame, snap, hud, viewport);

        if hud.paused {
            self.draw_banner(fb, frame, 0, "PAUSED");
        } else if snap.game_over {
            self.draw_banner(fb, frame, 0, "GAME OVER");
            self.draw_banner(fb, frame, 2, "r: restart");
            if let Some(scores) = hud.high_scores {
                self.draw_high_scores(fb, frame, scores, hud.last_rank);
            }
        }
    }

    /// Convenience wrapper that allocates a framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, frame, border);

        let empty = CellStyle::new(Rgb::new(70, 70, 80), WELL_BG).dim();
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, '·', empty);

        for (x, y, id) in snap.locked_cells() {
            if let Some(kind) = PieceKind::from_id(id) {
                let style = CellStyle::new(color_of(kind), WELL_BG);
                self.fill_board_cell(fb, frame, x as i8, y as i8, BLOCK, style);
            }
        }

        let Some(active) = snap.active else {
            return;
        };

        if let Some(shadow_y) = snap.shadow_y {
            let style = CellStyle::new(shadow_color_of(active.kind), WELL_BG);
            for (dx, dy) in active.mask.cells() {
                self.fill_board_cell(fb, frame, active.x + dx, shadow_y + dy, GHOST, style);
            }
        }

        let style = CellStyle::new(color_of(active.kind), WELL_BG).bold();
        for (dx, dy) in active.mask.cells() {
            self.fill_board_cell(fb, frame, active.x + dx, active.y + dy, BLOCK, style);
        }
    }

    /// Paint one board cell; cells outside the 10x20 grid are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let mut y = frame.y;

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "HOLD", label);
        if let Some(kind) = snap.hold {
            self.draw_preview(fb, x, y + 1, kind, !snap.can_hold);
        } else {
            fb.put_str(x, y + 1, "-", value);
        }
        y += 6;

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, x, y + 1, snap.next, false);
        y += 6;

        let help = CellStyle::new(Rgb::new(140, 140, 150), PANEL_BG);
        for (keys, meaning) in KEY_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, keys, help.bold());
            fb.put_str(x + 7, y, meaning, help);
            y += 1;
        }
    }

    /// Small catalog-orientation drawing of `kind`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dim: bool) {
        let mask: Mask = shape_of(kind);
        let mut style = CellStyle::new(color_of(kind), PANEL_BG);
        if dim {
            style = style.dim();
        }
        for (dx, dy) in mask.cells() {
            let px = x + dx as u16 * self.cell_w;
            fb.fill_rect(px, y + dy as u16, self.cell_w, 1, BLOCK, style);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, frame: Frame, row_offset: u16, text: &str) {
        let y = frame.y + frame.h / 4 + row_offset;
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }

    fn draw_high_scores(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        scores: &HighScores,
        last_rank: Option<usize>,
    ) {
        let x = frame.x + 2;
        let mut y = frame.y + frame.h / 4 + 4;
        let title = CellStyle::new(Rgb::new(255, 215, 0), WELL_BG).bold();
        let row = CellStyle::new(Rgb::new(220, 220, 220), WELL_BG);
        let highlight = CellStyle::new(Rgb::new(0, 255, 255), WELL_BG).bold();

        fb.put_str(x, y, "HIGH SCORES", title);
        y += 1;
        if scores.is_empty() {
            fb.put_str(x, y, "none yet", row);
            return;
        }

        let name_w = frame.w.saturating_sub(14) as usize;
        for (i, entry) in scores.entries().iter().enumerate() {
            let rank = i + 1;
            let style = if last_rank == Some(rank) { highlight } else { row };
            fb.put_u32(x, y, rank as u32, style);
            let name: String = entry.player_name.chars().take(name_w).collect();
            fb.put_str(x + 3, y, &name, style);
            fb.put_u32(x + 4 + name_w as u16, y, entry.score, style);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
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
