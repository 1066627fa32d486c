//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom: a title line, the bordered maze with a side
//! panel on its right, then a message strip with the prompts for the current
//! session status. The pause menu is drawn over the maze.

use crate::core::Session;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Difficulty, Outcome, SessionStatus, MAZE_HEIGHT, MAZE_WIDTH, PLAYER_GLYPH};

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

const TITLE: &str = "PAC-MAN";
/// Rows under the maze frame reserved for prompts.
const MESSAGE_ROWS: u16 = 3;
const PANEL_MIN_W: u16 = 12;

const BG: Rgb = Rgb::new(0, 0, 0);
const FLOOR_BG: Rgb = Rgb::new(10, 10, 20);

/// A lightweight terminal renderer for the maze game.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // The maze is 50 wide; one column per cell keeps it inside 80 columns.
        Self {
            cell_w: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the maze frame including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            MAZE_WIDTH as u16 * self.cell_w + 2,
            MAZE_HEIGHT as u16 + 2,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let block_h = 1 + frame_h + MESSAGE_ROWS;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        let maze_y = start_y + 1;

        let title = CellStyle::new(Rgb::new(255, 220, 0), BG).bold();
        fb.put_str_centered(start_x, frame_w, start_y, TITLE, title);

        self.draw_border(fb, start_x, maze_y, frame_w, frame_h);
        self.draw_maze(fb, session, start_x + 1, maze_y + 1);
        self.draw_side_panel(fb, session, viewport, start_x + frame_w + 2, maze_y);
        self.draw_messages(fb, session, start_x, maze_y + frame_h, frame_w);

        if session.status() == SessionStatus::Running && session.paused() {
            self.draw_pause_menu(fb, start_x, maze_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), BG);

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

    fn draw_maze(&self, fb: &mut FrameBuffer, session: &Session, x0: u16, y0: u16) {
        for (y, row) in session.state().render().enumerate() {
            for (x, ch) in row.enumerate() {
                let style = glyph_style(ch);
                let px = x0 + x as u16 * self.cell_w;
                fb.fill_rect(px, y0 + y as u16, self.cell_w, 1, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        panel_x: u16,
        y0: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);

        let mut y = y0;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, session.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        match session.remaining_secs() {
            Some(secs) => put_clock(fb, panel_x, y + 1, secs, value),
            None => {
                fb.put_str(panel_x, y + 1, "--:--", value.dim());
            }
        }
        y += 3;

        fb.put_str(panel_x, y, "PELLETS", label);
        fb.put_u32(
            panel_x,
            y + 1,
            session.state().pellets_remaining() as u32,
            value,
        );
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", label);
        let level = session.difficulty().map(difficulty_label).unwrap_or("-");
        fb.put_str(panel_x, y + 1, level, value);
    }

    fn draw_messages(&self, fb: &mut FrameBuffer, session: &Session, x: u16, y: u16, w: u16) {
        let text = CellStyle::default();
        let hint = CellStyle::default().dim();
        let win = CellStyle::new(Rgb::new(120, 230, 120), BG).bold();
        let lose = CellStyle::new(Rgb::new(230, 100, 100), BG).bold();

        match session.status() {
            SessionStatus::Idle => {
                fb.put_str_centered(x, w, y, "Press A to start the game.", text);
                fb.put_str_centered(x, w, y + 1, "Press Q to exit.", hint);
            }
            SessionStatus::AwaitingDifficulty => {
                fb.put_str_centered(x, w, y, "Select difficulty:", text);
                fb.put_str_centered(
                    x,
                    w,
                    y + 1,
                    "A: Easy (4:00)  B: Medium (2:30)  X: Hard (2:00)",
                    text,
                );
            }
            SessionStatus::Running => {
                fb.put_str_centered(x, w, y, "Game started! Use arrows to move Pac-Man.", text);
                fb.put_str_centered(x, w, y + 1, "P: pause   Q: exit", hint);
            }
            SessionStatus::Ended => {
                let (line, style) = match session.outcome() {
                    Some(Outcome::AllPelletsCollected) => {
                        ("Congratulations! All dots collected!", win)
                    }
                    Some(Outcome::TimeExpired) | None => ("Time's up!", lose),
                };
                fb.put_str_centered(x, w, y, line, style);

                let score_label = "Final score: ";
                let digits = digit_count(session.score());
                let len = score_label.len() as u16 + digits;
                let sx = x.saturating_add(w.saturating_sub(len) / 2);
                let after = fb.put_str(sx, y + 1, score_label, text);
                fb.put_u32(after, y + 1, session.score(), text);

                fb.put_str_centered(x, w, y + 2, "Press A to start the game again.", hint);
            }
        }
    }

    fn draw_pause_menu(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        let mid = y + h / 2;
        let lines = ["--- PAUSE MENU ---", "Press A to Resume", "Press Q to Quit"];
        let box_w = 24;
        let bx = x + w.saturating_sub(box_w) / 2;
        fb.fill_rect(bx, mid - 2, box_w, 5, ' ', CellStyle::new(BG, BG));
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(x, w, mid - 1 + i as u16, line, style);
        }
    }
}

fn glyph_style(ch: char) -> CellStyle {
    match ch {
        '#' => CellStyle::new(Rgb::new(60, 90, 230), Rgb::new(20, 30, 90)),
        '.' => CellStyle::new(Rgb::new(240, 200, 160), FLOOR_BG),
        PLAYER_GLYPH => CellStyle::new(Rgb::new(255, 220, 0), FLOOR_BG).bold(),
        _ => CellStyle::new(FLOOR_BG, FLOOR_BG),
    }
}

fn difficulty_label(level: Difficulty) -> &'static str {
    match level {
        Difficulty::Easy => "EASY",
        Difficulty::Medium => "MEDIUM",
        Difficulty::Hard => "HARD",
    }
}

/// m:ss
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, secs: u32, style: CellStyle) {
    let after = fb.put_u32(x, y, secs / 60, style);
    fb.put_char(after, y, ':', style);
    let s = secs % 60;
    fb.put_char(after + 1, y, char::from(b'0' + (s / 10) as u8), style);
    fb.put_char(after + 2, y, char::from(b'0' + (s % 10) as u8), style);
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        let mut fb = FrameBuffer::new(8, 1);
        put_clock(&mut fb, 0, 0, 150, CellStyle::default());
        assert_eq!(fb.row_text(0).trim_end(), "2:30");

        put_clock(&mut fb, 0, 0, 9, CellStyle::default());
        assert_eq!(fb.row_text(0).trim_end(), "0:09");
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4950), 4);
    }
}
