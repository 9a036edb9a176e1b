//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, PlayerSnapshot, Screen};
use crate::core::turn::TurnPhase;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Category, DICE_COUNT, HIGH_SCORE_LIMIT, MAX_ROUNDS, UPPER_BONUS, YAHTZEE_BONUS,
    YAHTZEE_BONUS_INCREMENTS,
};

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

const LABEL_W: u16 = 18;
const HELP: &str = "r roll  1-5 hold  ↑↓ select  enter score  c bot  v scores  p again  q quit";

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(160, 170, 190));
const TITLE: CellStyle = CellStyle::fg(Rgb::new(240, 200, 80)).bold();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(110, 110, 120));
const CURSOR: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255))
    .on(Rgb::new(50, 60, 90))
    .bold();
const PREVIEW: CellStyle = CellStyle::fg(Rgb::new(120, 200, 120)).dim();
const DIE: CellStyle = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
const DIE_HELD: CellStyle = CellStyle::fg(Rgb::new(20, 20, 20))
    .on(Rgb::new(240, 200, 80))
    .bold();
const BANNER: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255))
    .on(Rgb::new(140, 40, 40))
    .bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130)).dim();

/// Terminal layout for a game of Yahtzee.
pub struct GameView {
    /// Width of each player's score column.
    col_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            col_w: 12,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(col_w: u16) -> Self {
        Self {
            col_w: col_w.max(6),
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

        if snap.screen == Screen::HighScores {
            self.draw_high_scores(fb, snap, viewport);
            return;
        }

        let players = snap.players.len().max(1) as u16;
        let table_w = LABEL_W + self.col_w * players + 2;
        // Categories plus borders, header, two rules and five summary rows.
        let table_h = Category::ALL.len() as u16 + 10;
        // Title, dice, table, gap, then status, message and help.
        let total_h = 1 + 4 + table_h + 1 + 3;

        let x0 = viewport.width.saturating_sub(table_w) / 2;
        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_title(fb, snap, x0, y, table_w);
        y += 1;
        self.draw_dice(fb, snap, x0 + 2, y);
        y += 4;
        self.draw_table(fb, snap, x0, y, table_w, table_h);
        y += table_h + 1;

        fb.put_str(x0, y, &snap.status, TEXT.bold());
        fb.put_str(x0, y + 1, &snap.message, TEXT);
        fb.put_str(x0, y + 2, HELP, HINT);

        if snap.screen == Screen::GameOver {
            let banner = format!("  {}  ", snap.status);
            let w = banner.chars().count() as u16;
            let bx = x0 + table_w.saturating_sub(w) / 2;
            fb.put_str(bx, y.saturating_sub(table_h / 2 + 1), &banner, BANNER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        fb.put_str(x, y, "YAHTZEE", TITLE);
        let round = (snap.round + 1).min(MAX_ROUNDS);
        let mut label = String::with_capacity(16);
        label.push_str("Round ");
        label.push_str(&round.to_string());
        label.push('/');
        label.push_str(&MAX_ROUNDS.to_string());
        fb.put_str_right(x + w, y, &label, LABEL);
    }

    fn draw_dice(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        for i in 0..DICE_COUNT {
            let dx = x + (i as u16) * 6;
            let held = snap.held[i];
            let style = if held { DIE_HELD } else { DIE };
            let face = match snap.dice[i] {
                0 => '?',
                d => (b'0' + d) as char,
            };
            fb.put_str(dx, y, "┌───┐", BORDER);
            fb.put_char(dx, y + 1, '│', BORDER);
            fb.fill_rect(dx + 1, y + 1, 3, 1, ' ', style);
            fb.put_char(dx + 2, y + 1, face, style);
            fb.put_char(dx + 4, y + 1, '│', BORDER);
            fb.put_str(dx, y + 2, "└───┘", BORDER);
            if held {
                fb.put_str(dx, y + 3, "HOLD", LABEL);
            } else {
                fb.put_char(dx + 2, y + 3, (b'1' + i as u8) as char, HINT);
            }
        }

        let rx = x + (DICE_COUNT as u16) * 6 + 1;
        fb.put_str(rx, y + 1, "rolls", LABEL);
        fb.put_u32(rx + 6, y + 1, u32::from(snap.rolls_left), TEXT.bold());
    }

    fn draw_table(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        draw_border(fb, x, y, w, h, BORDER);
        let ix = x + 1;
        let mut cy = y + 1;

        // Header: player names, active one highlighted.
        fb.put_str(ix + 1, cy, "Category", LABEL.bold());
        for (col, p) in snap.players.iter().enumerate() {
            let style = if snap.active == Some(p.seat) { TITLE } else { LABEL.bold() };
            let name: String = p.name.chars().take(self.col_w as usize - 1).collect();
            fb.put_str_right(self.col_right(ix, col), cy, &name, style);
        }
        cy += 1;

        for cat in Category::UPPER {
            self.draw_category_row(fb, snap, cat, ix, cy);
            cy += 1;
        }
        self.draw_rule(fb, x, cy, w);
        cy += 1;
        self.draw_summary_row(fb, snap, "Upper subtotal", ix, cy, |p| p.upper_subtotal.to_string());
        cy += 1;
        self.draw_summary_row(fb, snap, "Bonus / +-", ix, cy, |p| {
            if p.upper_bonus {
                UPPER_BONUS.to_string()
            } else {
                p.plus_minus.clone()
            }
        });
        cy += 1;

        for cat in Category::LOWER {
            self.draw_category_row(fb, snap, cat, ix, cy);
            cy += 1;
        }
        self.draw_rule(fb, x, cy, w);
        cy += 1;
        self.draw_summary_row(fb, snap, "Lower subtotal", ix, cy, |p| p.lower_subtotal.to_string());
        cy += 1;
        self.draw_summary_row(fb, snap, "Yahtzee bonus", ix, cy, |p| {
            let events = u16::from(p.yahtzee_bonus_count / YAHTZEE_BONUS_INCREMENTS);
            (events * YAHTZEE_BONUS).to_string()
        });
        cy += 1;
        self.draw_summary_row(fb, snap, "TOTAL", ix, cy, |p| p.total.to_string());
    }

    fn col_right(&self, ix: u16, col: usize) -> u16 {
        ix + LABEL_W + self.col_w * (col as u16 + 1) - 1
    }

    fn draw_category_row(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        cat: Category,
        ix: u16,
        y: u16,
    ) {
        let selecting = snap.screen == Screen::Playing
            && snap.active.is_some()
            && matches!(snap.phase, TurnPhase::Rolling | TurnPhase::CategorySelection);
        let under_cursor = selecting && snap.cursor == cat;

        if under_cursor {
            let row_w = LABEL_W + self.col_w * snap.players.len() as u16;
            fb.fill_rect(ix, y, row_w, 1, ' ', CURSOR);
            fb.put_char(ix, y, '>', CURSOR);
        }
        fb.put_str(ix + 1, y, cat.label(), if under_cursor { CURSOR } else { TEXT });

        for (col, p) in snap.players.iter().enumerate() {
            let row = p.row(cat);
            let right = self.col_right(ix, col);
            match (row.score, row.potential) {
                (Some(s), _) => {
                    let style = if under_cursor { CURSOR } else { TEXT };
                    fb.put_str_right(right, y, &s.to_string(), style);
                }
                (None, Some(s)) => {
                    let style = if under_cursor { CURSOR } else { PREVIEW };
                    let mut text = String::with_capacity(6);
                    text.push('(');
                    text.push_str(&s.to_string());
                    text.push(')');
                    fb.put_str_right(right, y, &text, style);
                }
                (None, None) => fb.put_str_right(right, y, "-", HINT),
            }
        }
    }

    fn draw_summary_row(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        label: &str,
        ix: u16,
        y: u16,
        value: impl Fn(&PlayerSnapshot) -> String,
    ) {
        fb.put_str(ix + 1, y, label, LABEL);
        for (col, p) in snap.players.iter().enumerate() {
            fb.put_str_right(self.col_right(ix, col), y, &value(p), TEXT.bold());
        }
    }

    fn draw_rule(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16) {
        fb.put_char(x, y, '├', BORDER);
        fb.fill_rect(x + 1, y, w.saturating_sub(2), 1, '─', BORDER);
        fb.put_char(x + w - 1, y, '┤', BORDER);
    }

    fn draw_high_scores(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let w: u16 = 44;
        let h: u16 = HIGH_SCORE_LIMIT as u16 + 5;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        draw_border(fb, x, y, w, h, BORDER);
        fb.put_str(x + 2, y + 1, "HIGH SCORES", TITLE);

        if snap.high_scores.is_empty() {
            fb.put_str(x + 2, y + 3, "No scores yet", HINT);
        }
        for (i, entry) in snap.high_scores.iter().take(HIGH_SCORE_LIMIT).enumerate() {
            let ry = y + 3 + i as u16;
            fb.put_u32(x + 2, ry, i as u32 + 1, HINT);
            fb.put_str_right(x + 10, ry, &entry.score.to_string(), TEXT.bold());
            let mut who = entry.player.clone();
            if !entry.opponent.is_empty() {
                who.push_str(" vs ");
                who.push_str(&entry.opponent);
            }
            let who: String = who.chars().take(w as usize - 14).collect();
            fb.put_str(x + 12, ry, &who, TEXT);
        }
        fb.put_str(x + 2, y + h - 2, "v to go back", HINT);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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
