/// Rendering layer. All terminal I/O lives here.
///
/// `render` draws one frame onto any `Surface` in logical arena pixels.
/// No game logic is performed; this module only translates state into
/// draw calls. `TerminalSurface` rasterises those calls into character
/// cells and writes them out with crossterm.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use glam::Vec2;

use crate::compute::circle_hits_rect;
use crate::config::{
    Arena, GAME_OVER_TEXT, HP_TEXT_POS, HP_TEXT_SIZE, OVERLAY_TEXT_SIZE, PAUSED_TEXT,
};
use crate::entities::{Colour, GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Colour = Colour::Black;
const C_PLAYER: Colour = Colour::Magenta;
const C_ENEMY: Colour = Colour::Red;
const C_HUD: Colour = Colour::White;
const C_OVERLAY: Colour = Colour::Gray;

/// Draw target in logical pixels.
pub trait Surface {
    fn clear(&mut self, colour: Colour);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, colour: Colour);
    fn fill_circle(&mut self, centre: Vec2, radius: f32, colour: Colour);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, colour: Colour);
    /// Rendered width of `text` in logical pixels.
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

pub fn hp_text(hp: i32) -> String {
    format!("HP{}", hp)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(surface: &mut impl Surface, state: &GameState) {
    surface.clear(C_BACKGROUND);

    surface.fill_rect(state.player.pos, state.player.size, C_PLAYER);
    surface.fill_rect(state.enemy.pos, state.enemy.size, C_ENEMY);

    for proj in &state.enemy.projectiles {
        surface.fill_circle(proj.pos, proj.radius(), proj.colour);
    }

    surface.draw_text(&hp_text(state.player.hp), HP_TEXT_POS, HP_TEXT_SIZE, C_HUD);

    match state.status {
        GameStatus::Paused => draw_overlay(surface, &state.arena, PAUSED_TEXT),
        GameStatus::GameOver => draw_overlay(surface, &state.arena, GAME_OVER_TEXT),
        GameStatus::Running => {}
    }
}

/// One centred banner line just above the middle of the arena.
fn draw_overlay(surface: &mut impl Surface, arena: &Arena, text: &str) {
    let width = surface.measure_text(text, OVERLAY_TEXT_SIZE);
    let pos = Vec2::new(
        arena.width / 2.0 - width / 2.0,
        arena.height / 2.0 - OVERLAY_TEXT_SIZE,
    );
    surface.draw_text(text, pos, OVERLAY_TEXT_SIZE, C_OVERLAY);
}

// ── Terminal back end ─────────────────────────────────────────────────────────

fn terminal_colour(colour: Colour) -> Color {
    match colour {
        Colour::Black => Color::Black,
        Colour::White => Color::White,
        Colour::Gray => Color::Grey,
        Colour::Red => Color::Red,
        Colour::Magenta => Color::Magenta,
        Colour::Purple => Color::DarkMagenta,
        Colour::SkyBlue => Color::Cyan,
        Colour::Maroon => Color::DarkRed,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    colour: Colour,
}

const BLANK: Cell = Cell {
    ch: ' ',
    colour: C_BACKGROUND,
};

/// Character-cell framebuffer stretched over the whole arena.
///
/// Each cell covers `arena.width / cols` × `arena.height / rows` logical
/// pixels. Shapes light every cell they touch, so nothing smaller than a
/// cell disappears.
pub struct TerminalSurface<W: Write> {
    out: W,
    arena: Arena,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, arena: Arena, cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            arena,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    /// Follow a terminal resize. The buffer is blank until the next frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.cells = vec![BLANK; self.cols as usize * self.rows as usize];
    }

    fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.arena.width / f32::from(self.cols),
            self.arena.height / f32::from(self.rows),
        )
    }

    /// Cell range `[first, last]` covering `[start, end]` on one axis.
    fn span(start: f32, end: f32, cell: f32, count: u16) -> Option<(u16, u16)> {
        let max = f32::from(count) - 1.0;
        let first = (start / cell).floor();
        let last = ((end / cell).ceil() - 1.0).max(first);
        if last < 0.0 || first > max {
            return None;
        }
        Some((first.max(0.0) as u16, last.min(max) as u16))
    }

    fn set(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.cols && row < self.rows {
            let i = row as usize * self.cols as usize + col as usize;
            self.cells[i] = cell;
        }
    }

    /// Write the buffer to the terminal and flush.
    pub fn present(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::BeginSynchronizedUpdate)?;
        let mut current = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            for i in start..start + self.cols as usize {
                let cell = self.cells[i];
                if current != Some(cell.colour) {
                    self.out
                        .queue(style::SetForegroundColor(terminal_colour(cell.colour)))?;
                    current = Some(cell.colour);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, colour: Colour) {
        self.cells.fill(Cell { ch: ' ', colour });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, colour: Colour) {
        let cell = self.cell_size();
        let end = pos + size;
        let (Some((c0, c1)), Some((r0, r1))) = (
            Self::span(pos.x, end.x, cell.x, self.cols),
            Self::span(pos.y, end.y, cell.y, self.rows),
        ) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set(col, row, Cell { ch: '█', colour });
            }
        }
    }

    fn fill_circle(&mut self, centre: Vec2, radius: f32, colour: Colour) {
        let cell = self.cell_size();
        let (Some((c0, c1)), Some((r0, r1))) = (
            Self::span(centre.x - radius, centre.x + radius, cell.x, self.cols),
            Self::span(centre.y - radius, centre.y + radius, cell.y, self.rows),
        ) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                let origin = Vec2::new(f32::from(col), f32::from(row)) * cell;
                if circle_hits_rect(centre, radius, origin, cell) {
                    self.set(col, row, Cell { ch: '●', colour });
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _size: f32, colour: Colour) {
        let cell = self.cell_size();
        if pos.y < 0.0 {
            return;
        }
        let row = (pos.y / cell.y).floor() as u16;
        let first = (pos.x / cell.x).floor();
        for (i, ch) in text.chars().enumerate() {
            let col = first + i as f32;
            if col >= 0.0 {
                self.set(col as u16, row, Cell { ch, colour });
            }
        }
    }

    /// One cell per character, whatever the point size.
    fn measure_text(&self, text: &str, _size: f32) -> f32 {
        text.chars().count() as f32 * self.cell_size().x
    }
}
